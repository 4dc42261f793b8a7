//! # Input Routing
//!
//! Turns a `TuiEvent` into at most one `core::Action`, given which screen is
//! showing. Component-local state (picker selection, goto buffer, swipe
//! tracking) is updated here; everything else goes through `update()`.
//!
//! Kept free of terminal I/O so the routing table can be tested directly.

use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{GotoEvent, PickerEvent, PromptEvent, RestartPrompt};
use crate::tui::event::TuiEvent;
use crate::tui::ui::{self, Hit};

pub fn route_event(
    app: &App,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.screen {
        Screen::Picker => route_picker(app, tui, event, frame_area),
        Screen::Player if app.is_ready() && !app.navigator.is_empty() => {
            if app.navigator.restart_prompt() {
                route_restart_prompt(app, event)
            } else {
                route_player(app, tui, event, frame_area)
            }
        }
        // Loading, failed, or an empty deck: only leaving is possible.
        Screen::Player => match event {
            TuiEvent::Escape | TuiEvent::InputChar('b') if app.can_go_back() => {
                Some(Action::BackToPicker)
            }
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

fn route_picker(app: &App, tui: &mut TuiState, event: &TuiEvent, frame_area: Rect) -> Option<Action> {
    if let TuiEvent::MouseDown(col, row) = *event {
        return match ui::hit_test(col, row, frame_area, app, tui) {
            Some(Hit::PickerRow(i)) => tui
                .set_picker
                .sets
                .get(i)
                .map(|set| Action::OpenSet(set.id.clone())),
            _ => None,
        };
    }
    match tui.set_picker.handle_event(event)? {
        PickerEvent::Open(id) => Some(Action::OpenSet(id)),
        PickerEvent::Quit => Some(Action::Quit),
    }
}

fn route_restart_prompt(app: &App, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::InputChar('r') => return Some(Action::Reset),
        _ => {}
    }
    match RestartPrompt::new(app.navigator.len()).handle_event(event)? {
        PromptEvent::Confirm => Some(Action::ConfirmRestart),
        PromptEvent::Dismiss => Some(Action::DismissRestart),
    }
}

fn route_player(app: &App, tui: &mut TuiState, event: &TuiEvent, frame_area: Rect) -> Option<Action> {
    if let Some(goto_event) = tui.goto_box.handle_event(event) {
        return Some(match goto_event {
            GotoEvent::Changed(text) => Action::GotoTextChanged(text),
            GotoEvent::Commit => Action::GotoCommit,
        });
    }

    match *event {
        TuiEvent::InputChar(' ') | TuiEvent::Submit => Some(Action::Flip),
        TuiEvent::CursorLeft | TuiEvent::InputChar('h') => Some(Action::Previous),
        TuiEvent::CursorRight | TuiEvent::InputChar('l') => Some(Action::Next),
        TuiEvent::Home | TuiEvent::InputChar('r') => Some(Action::Reset),
        TuiEvent::InputChar('e') => Some(Action::ToggleExplanation),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::Escape | TuiEvent::InputChar('b') => {
            if !app.navigator.goto_text().is_empty() {
                Some(Action::GotoTextChanged(String::new()))
            } else if app.can_go_back() {
                Some(Action::BackToPicker)
            } else {
                None
            }
        }
        TuiEvent::MouseDown(col, row) => {
            tui.swipe.cancel();
            route_click(app, tui, col, row, frame_area)
        }
        TuiEvent::MouseDrag(col, _) => {
            tui.swipe.move_to(col as i32);
            None
        }
        TuiEvent::MouseUp(col, _) => tui.swipe.finish(Some(col as i32)).map(Action::Gesture),
        _ => None,
    }
}

fn route_click(app: &App, tui: &mut TuiState, col: u16, row: u16, frame_area: Rect) -> Option<Action> {
    match ui::hit_test(col, row, frame_area, app, tui)? {
        Hit::Card => {
            tui.swipe.start(col as i32);
            None
        }
        Hit::Prev => Some(Action::Previous),
        Hit::Reset => Some(Action::Reset),
        Hit::Next => Some(Action::Next),
        Hit::ExplanationToggle => Some(Action::ToggleExplanation),
        Hit::GotoGo => Some(Action::GotoCommit),
        Hit::PickerRow(_) => None,
    }
}
