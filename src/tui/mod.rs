//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Flipping**: draws every ~16ms while a card turns over.
//! - **Loading**: draws every ~80ms to keep the spinner moving.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Flip Transitions
//!
//! A change of face on the same card starts a `FlipAnimation`. When the
//! navigator asks for the transition to be skipped (moving away from a card
//! that was showing its answer), the next frame is drawn settled and
//! `Action::TransitionFrameDone` is dispatched right after it.

mod component;
mod components;
mod event;
mod input;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{ResolvedConfig, SetEntry};
use crate::core::gesture::SwipeTracker;
use crate::core::state::App;
use crate::deck::{load_deck, resolve_source};
use crate::tui::components::{Face, FlipAnimation, GotoBox, SetPickerState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub set_picker: SetPickerState,
    pub goto_box: GotoBox,
    pub swipe: SwipeTracker,
    // Animation state
    pub flip_anim: Option<FlipAnimation>,
    /// (load generation, card index, flipped) as of the previous frame.
    last_card: Option<(u64, Option<usize>, bool)>,
}

impl TuiState {
    pub fn new(sets: Vec<SetEntry>) -> Self {
        Self {
            set_picker: SetPickerState::new(sets),
            goto_box: GotoBox::new(),
            swipe: SwipeTracker::new(),
            flip_anim: None,
            last_card: None,
        }
    }

    /// Mirrors the navigator's goto text into the input box.
    fn sync_goto(&mut self, app: &App) {
        if self.goto_box.buffer != app.navigator.goto_text() {
            self.goto_box.buffer = app.navigator.goto_text().to_string();
        }
    }

    /// Starts or retires the flip animation based on what changed since the
    /// previous frame.
    fn sync(&mut self, app: &App, now: Instant) {
        self.sync_goto(app);

        let nav = &app.navigator;
        let current = (app.load_generation, nav.current_index(), nav.is_flipped());
        if let Some((generation, index, flipped)) = self.last_card {
            let same_card = generation == current.0 && index == current.1;
            if flipped != current.2 && same_card && !nav.suppress_transition() {
                self.flip_anim = Some(FlipAnimation::start(Face::from_flipped(current.2)));
            } else if !same_card || nav.suppress_transition() {
                self.flip_anim = None;
            }
        }
        self.last_card = Some(current);

        if self
            .flip_anim
            .as_ref()
            .is_some_and(|anim| anim.frame_at(now).is_none())
        {
            self.flip_anim = None;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Drag reporting needs mouse capture; there's no text cursor to show.
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config);
    let mut tui = TuiState::new(app.config.sets.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // The in-flight deck load, aborted when a newer one replaces it
    let mut active_load: Option<AbortHandle> = None;

    if let Some(action) = app.initial_action() {
        dispatch(&mut app, action, &tx, &mut active_load);
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        tui.sync(&app, now);

        let flipping = tui.flip_anim.is_some();
        let animating = flipping || app.is_loading() || app.navigator.suppress_transition();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame, now))?;
            needs_redraw = false;

            if app.navigator.suppress_transition() {
                update(&mut app, Action::TransitionFrameDone);
            }
        }

        let timeout = if flipping {
            Duration::from_millis(16)
        } else if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = input::route_event(&app, &mut tui, &event, frame_area) {
                if dispatch(&mut app, action, &tx, &mut active_load) {
                    should_quit = true;
                }
                tui.sync_goto(&app);
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (finished deck loads)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx, &mut active_load) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = active_load.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Runs `update()` and carries out its effect. Returns true when the app should exit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    active_load: &mut Option<AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnLoad {
            generation,
            location,
        } => {
            if let Some(handle) = active_load.take() {
                handle.abort();
            }
            *active_load = Some(spawn_load(
                generation,
                location,
                app.config.request_timeout,
                tx.clone(),
            ));
            false
        }
    }
}

fn spawn_load(
    generation: u64,
    location: String,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning deck load: {} (generation={})", location, generation);
    let handle = tokio::spawn(async move {
        let source = resolve_source(&location, Some(timeout));
        let result = load_deck(source.as_ref()).await;
        if let Err(e) = &result {
            warn!("Deck load failed for {}: {}", source.describe(), e);
        }
        if tx.send(Action::DeckLoaded { generation, result }).is_err() {
            warn!("Failed to send DeckLoaded: receiver dropped");
        }
    });
    handle.abort_handle()
}
