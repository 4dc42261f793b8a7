//! # Restart Prompt
//!
//! Modal overlay shown when "next" is pressed on the last card in
//! prompt-restart mode. `y`/Enter restarts from the first card, `n`/Esc
//! dismisses.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    Confirm,
    Dismiss,
}

pub struct RestartPrompt {
    pub total: usize,
}

impl RestartPrompt {
    pub fn new(total: usize) -> Self {
        Self { total }
    }
}

impl Component for RestartPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" End of deck ")
            .title_bottom(Line::from(" y Restart  n Stay ").centered())
            .padding(Padding::uniform(1));

        let text = vec![
            Line::from(format!("You finished all {} cards.", self.total)),
            Line::default(),
            Line::from("Restart from the first card?")
                .style(Style::default().add_modifier(Modifier::BOLD)),
        ];

        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            overlay,
        );
    }
}

impl EventHandler for RestartPrompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') | TuiEvent::Submit => {
                Some(PromptEvent::Confirm)
            }
            TuiEvent::InputChar('n') | TuiEvent::InputChar('N') | TuiEvent::Escape => {
                Some(PromptEvent::Dismiss)
            }
            _ => None,
        }
    }
}
