//! # GotoBox Component
//!
//! The "jump to card" row: a `[n]/N` position counter on the left and a
//! small numeric input with a go button on the right.
//!
//! ## State Management
//!
//! The buffer mirrors the navigator's goto text. The event loop copies the
//! navigator's text back into `buffer` after every update (props sync), so a
//! reset or a successful commit clears the box without the component knowing
//! why.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Longest goto text accepted from the keyboard.
const MAX_GOTO_LEN: usize = 8;
/// Width of the input field, brackets included.
const INPUT_WIDTH: u16 = MAX_GOTO_LEN as u16 + 2;
const GO_WIDTH: u16 = 3;

/// High-level events emitted by the GotoBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoEvent {
    /// The text changed; carries the full new text.
    Changed(String),
    /// Enter on a non-empty box.
    Commit,
}

/// Screen regions of the goto row, shared by rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotoLayout {
    pub counter: Rect,
    pub label: Rect,
    pub input: Rect,
    pub go: Rect,
}

pub fn goto_layout(area: Rect) -> GotoLayout {
    let [counter, label, input, _, go] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(7),
        Constraint::Length(INPUT_WIDTH),
        Constraint::Length(1),
        Constraint::Length(GO_WIDTH),
    ])
    .areas(area);
    GotoLayout {
        counter,
        label,
        input,
        go,
    }
}

pub struct GotoBox {
    /// Text buffer (mirrors the navigator's goto text)
    pub buffer: String,
    /// 1-based position of the current card (Prop)
    pub position: usize,
    /// Number of cards in the deck (Prop)
    pub total: usize,
}

impl GotoBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            position: 0,
            total: 0,
        }
    }

    /// Characters that can appear in a typed number.
    pub fn accepts(c: char) -> bool {
        c.is_ascii_digit() || c == '-' || c == '.'
    }
}

impl Default for GotoBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for GotoBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = goto_layout(area);

        let counter = Line::from(vec![
            Span::styled(
                format!("[{}]", self.position),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("/{}", self.total), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(counter), layout.counter);

        frame.render_widget(
            Paragraph::new("Go to: ").style(Style::default().fg(Color::DarkGray)),
            layout.label,
        );

        let input = format!("[{:<width$}]", self.buffer, width = MAX_GOTO_LEN);
        frame.render_widget(
            Paragraph::new(input).style(Style::default().fg(Color::Green)),
            layout.input,
        );

        let go_style = if self.buffer.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Paragraph::new(" ➜ ").style(go_style), layout.go);
    }
}

impl EventHandler for GotoBox {
    type Event = GotoEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if Self::accepts(*c) => {
                if self.buffer.len() >= MAX_GOTO_LEN {
                    return None;
                }
                self.buffer.push(*c);
                Some(GotoEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| GotoEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit if !self.buffer.is_empty() => Some(GotoEvent::Commit),
            _ => None,
        }
    }
}
