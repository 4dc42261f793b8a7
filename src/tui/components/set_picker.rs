//! # Set Picker Component
//!
//! Entry screen listing the configured decks. Up/Down select, Enter opens,
//! Esc or `q` quits. Clicking a row opens it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SetPickerState` lives in `TuiState`
//! - `SetPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::config::SetEntry;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the set picker.
pub struct SetPickerState {
    pub sets: Vec<SetEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl SetPickerState {
    pub fn new(sets: Vec<SetEntry>) -> Self {
        let mut list_state = ListState::default();
        if !sets.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            sets,
            selected: 0,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Index of the set drawn at screen row `row`, given the picker's area.
    pub fn row_at(&self, area: Rect, row: u16) -> Option<usize> {
        let first_row = area.y + 2; // border + top padding
        if row < first_row || row >= area.y + area.height.saturating_sub(1) {
            return None;
        }
        let index = (row - first_row) as usize + self.list_state.offset();
        (index < self.sets.len()).then_some(index)
    }
}

/// Events emitted by the set picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Open(String),
    Quit,
}

impl EventHandler for SetPickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(PickerEvent::Quit),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                if !self.sets.is_empty() {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if !self.sets.is_empty() {
                    self.select((self.selected + 1).min(self.sets.len() - 1));
                }
                None
            }
            TuiEvent::Submit => self
                .sets
                .get(self.selected)
                .map(|set| PickerEvent::Open(set.id.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the set picker.
pub struct SetPicker<'a> {
    state: &'a mut SetPickerState,
}

impl<'a> SetPicker<'a> {
    pub fn new(state: &'a mut SetPickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Choose a set ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Select  Enter Study  q Quit ").centered())
            .padding(Padding::new(1, 1, 1, 0));

        if self.state.sets.is_empty() {
            let empty = Paragraph::new("No sets configured.\nAdd [[sets]] entries to ~/.cardflip/config.toml")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let title_width = self
            .state
            .sets
            .iter()
            .map(|s| s.title.width())
            .max()
            .unwrap_or(0)
            .min(inner_width);

        let items: Vec<ListItem> = self
            .state
            .sets
            .iter()
            .enumerate()
            .map(|(i, set)| {
                let selected = i == self.state.selected;
                let title_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                let desc_style = if selected {
                    title_style.remove_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let title = truncate_str(&set.title, title_width);
                let padded_title = format!("{}{}", title, " ".repeat(title_width - title.width()));
                let desc_width = inner_width.saturating_sub(title_width + 2);
                let desc = set
                    .description
                    .as_deref()
                    .map(|d| truncate_str(d, desc_width))
                    .unwrap_or_default();

                ListItem::new(Line::from(vec![
                    Span::styled(padded_title, title_style),
                    Span::styled("  ", desc_style),
                    Span::styled(desc, desc_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
