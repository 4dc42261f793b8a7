//! Plain status message shown in place of the card: loading spinner, load
//! failure, or an empty deck.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading { spinner_frame: usize },
    Failed(String),
    Empty,
}

pub struct StatusView {
    pub status: Status,
}

impl StatusView {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    pub fn message(&self) -> String {
        match &self.status {
            Status::Loading { spinner_frame } => {
                format!("{} Loading...", SPINNER[spinner_frame % SPINNER.len()])
            }
            Status::Failed(msg) => msg.clone(),
            Status::Empty => "No cards.".to_string(),
        }
    }
}

impl Component for StatusView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        let paragraph = match &self.status {
            Status::Failed(_) => Paragraph::new(self.message())
                .block(
                    Block::bordered()
                        .title("ERROR")
                        .border_style(Style::default().fg(Color::Red)),
                )
                .wrap(Wrap { trim: true }),
            _ => Paragraph::new(Line::from(self.message()))
                .style(Style::default().fg(Color::Gray))
                .block(Block::default()),
        };

        frame.render_widget(paragraph.alignment(Alignment::Center), middle);
    }
}
