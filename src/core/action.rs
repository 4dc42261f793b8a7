//! # Actions
//!
//! Everything that can happen in Cardflip becomes an `Action`.
//! User presses Right? That's `Action::Next`.
//! The deck finishes loading? That's `Action::DeckLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller should start. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::gesture::Gesture;
use crate::core::navigator::Step;
use crate::core::state::{App, LoadState, Screen};
use crate::deck::{Deck, LoadError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Shell
    OpenSet(String),
    OpenSource(String),
    DeckLoaded {
        generation: u64,
        result: Result<Deck, LoadError>,
    },
    BackToPicker,
    Quit,

    // Navigator
    Flip,
    ToggleExplanation,
    Next,
    Previous,
    Reset,
    GotoTextChanged(String),
    GotoCommit,
    Gesture(Gesture),
    ConfirmRestart,
    DismissRestart,
    /// The presentation layer drew the frame that skipped the flip animation.
    TransitionFrameDone,
}

/// Side effects the event loop must carry out after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnLoad { generation: u64, location: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenSet(id) => {
            let Some(set) = app.config.find_set(&id).cloned() else {
                warn!("Unknown set id: {}", id);
                app.status_message = format!("Unknown set: {id}");
                return Effect::None;
            };
            info!("Opening set {} ({})", set.id, set.title);
            let location = app.config.set_location(&set);
            start_load(app, set.title, location)
        }
        Action::OpenSource(location) => start_load(app, location.clone(), location),
        Action::DeckLoaded { generation, result } => {
            if generation != app.load_generation {
                debug!(
                    "Discarding superseded load (generation {}, current {})",
                    generation, app.load_generation
                );
                return Effect::None;
            }
            match result {
                Ok(deck) => {
                    info!("Deck ready: {} cards", deck.len());
                    app.status_message = format!("{} cards", deck.len());
                    app.navigator.load(deck);
                    app.load = LoadState::Ready;
                }
                Err(e) => {
                    warn!("Deck load failed: {}", e);
                    app.status_message = String::from("Load failed");
                    app.load = LoadState::Failed(e.to_string());
                }
            }
            Effect::None
        }
        Action::BackToPicker => {
            if app.can_go_back() {
                // Any in-flight load becomes stale.
                app.load_generation += 1;
                app.load = LoadState::Idle;
                app.navigator.load(Deck::default());
                app.screen = Screen::Picker;
                app.title = String::from("Cardflip");
                app.location = None;
                app.status_message.clear();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
        navigation => {
            if !app.is_ready() {
                debug!("Ignoring navigation while not ready: {:?}", navigation);
                return Effect::None;
            }
            navigate(app, navigation);
            Effect::None
        }
    }
}

fn start_load(app: &mut App, title: String, location: String) -> Effect {
    app.load_generation += 1;
    app.screen = Screen::Player;
    app.title = title;
    app.location = Some(location.clone());
    app.load = LoadState::Loading;
    app.status_message = String::from("Loading...");
    app.navigator.load(Deck::default());
    Effect::SpawnLoad {
        generation: app.load_generation,
        location,
    }
}

fn navigate(app: &mut App, action: Action) {
    let nav = &mut app.navigator;

    // The restart prompt is modal.
    if nav.restart_prompt() {
        match action {
            Action::ConfirmRestart => nav.confirm_restart(),
            Action::DismissRestart => nav.dismiss_restart_prompt(),
            Action::Reset => nav.reset(),
            Action::TransitionFrameDone => nav.end_suppressed_frame(),
            other => debug!("Restart prompt open, ignoring {:?}", other),
        }
        return;
    }

    match action {
        Action::Flip => nav.flip(),
        Action::ToggleExplanation => nav.toggle_explanation(),
        Action::Next => {
            if nav.next() == Step::Exhausted {
                app.status_message = String::from("End of deck");
            }
        }
        Action::Previous => {
            nav.previous();
        }
        Action::Reset => nav.reset(),
        Action::GotoTextChanged(text) => nav.set_goto_text(text),
        Action::GotoCommit => {
            nav.commit_goto();
        }
        Action::Gesture(gesture) => match gesture {
            Gesture::Next => {
                if nav.next() == Step::Exhausted {
                    app.status_message = String::from("End of deck");
                }
            }
            Gesture::Previous => {
                nav.previous();
            }
            Gesture::Tap => nav.flip(),
        },
        Action::TransitionFrameDone => nav.end_suppressed_frame(),
        Action::ConfirmRestart | Action::DismissRestart => {}
        other => warn!("Unhandled navigation action: {:?}", other),
    }
}
