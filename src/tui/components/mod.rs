//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar showing the open deck and status
//! - `ProgressBar`: Percentage, hint text and gauge
//! - `CardView`: One face of the current card (borrowed for a frame)
//! - `Controls`: Previous / reset / next buttons
//! - `Explanation`: Toggle and box for explanation text
//! - `StatusView`: Loading spinner, load error, or "No cards."
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `GotoBox`: Numeric jump input
//! - `SetPickerState`: Deck list on the entry screen
//! - `RestartPrompt`: End-of-deck confirmation overlay
//!
//! Components that need hit testing expose a `*_layout(area)` function so the
//! event loop resolves mouse clicks against the same rectangles the renderer
//! used.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── progress.rs        (Progress line + gauge)
//! ├── card_view.rs       (Card faces + flip animation)
//! ├── controls.rs        (Prev / reset / next)
//! ├── explanation.rs     (Explanation toggle + box)
//! ├── goto_box.rs        (Jump-to-card input)
//! ├── set_picker.rs      (Entry screen)
//! ├── restart_prompt.rs  (End-of-deck overlay)
//! └── status_view.rs     (Loading / error / empty)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod card_view;
pub mod controls;
pub mod explanation;
pub mod goto_box;
pub mod progress;
pub mod restart_prompt;
pub mod set_picker;
pub mod status_view;
mod title_bar;

pub use card_view::{CardView, Face, FlipAnimation};
pub use controls::{Controls, controls_layout};
pub use explanation::{Explanation, explanation_height};
pub use goto_box::{GotoBox, GotoEvent, goto_layout};
pub use progress::ProgressBar;
pub use restart_prompt::{PromptEvent, RestartPrompt};
pub use set_picker::{PickerEvent, SetPicker, SetPickerState};
pub use status_view::{Status, StatusView};
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
