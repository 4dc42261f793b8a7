//! Previous / reset / next buttons.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const BUTTON_WIDTH: u16 = 5;
const BUTTON_GAP: u16 = 2;

/// Screen regions of the three buttons, shared by rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsLayout {
    pub prev: Rect,
    pub reset: Rect,
    pub next: Rect,
}

pub fn controls_layout(area: Rect) -> ControlsLayout {
    let [prev, _, reset, _, next] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_GAP),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_GAP),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .flex(Flex::Center)
    .areas(area);
    ControlsLayout { prev, reset, next }
}

pub struct Controls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    pub fn new(prev_enabled: bool, next_enabled: bool) -> Self {
        Self {
            prev_enabled,
            next_enabled,
        }
    }
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = controls_layout(area);
        frame.render_widget(
            Paragraph::new("[ ◀ ]").style(button_style(self.prev_enabled)),
            layout.prev,
        );
        frame.render_widget(
            Paragraph::new("[ ⟳ ]").style(button_style(true)),
            layout.reset,
        );
        frame.render_widget(
            Paragraph::new("[ ▶ ]").style(button_style(self.next_enabled)),
            layout.next,
        );
    }
}
