//! # TitleBar Component
//!
//! Top status bar showing which deck is open and a transient status.
//!
//! Purely presentational: all data arrives as props and there is no internal
//! state. The title text changes based on state:
//!
//! 1. **Back available**: `"← Esc | NCP 200 | 12 cards"`
//! 2. **Status message**: `"NCP 200 | 12 cards"`
//! 3. **Default**: `"NCP 200"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Title of the open deck, or the app name on the picker
    pub title: String,
    /// Status message (e.g., "Loading...", "End of deck")
    pub status_message: String,
    /// Whether Esc returns to the set picker
    pub can_go_back: bool,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, can_go_back: bool) -> Self {
        Self {
            title,
            status_message,
            can_go_back,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if self.can_go_back {
            spans.push(Span::raw("← Esc | "));
        }
        spans.push(Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
