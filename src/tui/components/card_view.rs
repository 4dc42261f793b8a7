//! # CardView Component
//!
//! Renders one face of the current card inside a rounded border, plus the
//! horizontal "turn" animation used when the card flips.
//!
//! Follows the transient wrapper pattern: `CardView` borrows the card for a
//! single frame. The animation lives in `TuiState` as a [`FlipAnimation`].
//!
//! ```text
//! t = 0.0        t = 0.25      t = 0.5     t = 0.75      t = 1.0
//! ┌────────┐     ┌──────┐        ┌┐        ┌──────┐     ┌────────┐
//! │  front │     │ front│        ││        │ back │     │  back  │
//! └────────┘     └──────┘        └┘        └──────┘     └────────┘
//! ```

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::deck::Card;
use crate::tui::component::Component;

pub const FLIP_DURATION: Duration = Duration::from_millis(240);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped { Face::Back } else { Face::Front }
    }
}

/// A flip in progress.
#[derive(Debug, Clone, Copy)]
pub struct FlipAnimation {
    started: Instant,
    to: Face,
}

impl FlipAnimation {
    pub fn start(to: Face) -> Self {
        Self {
            started: Instant::now(),
            to,
        }
    }

    /// Width fraction and visible face at `now`, or `None` once finished.
    pub fn frame_at(&self, now: Instant) -> Option<(f32, Face)> {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= FLIP_DURATION {
            return None;
        }
        let t = elapsed.as_secs_f32() / FLIP_DURATION.as_secs_f32();
        Some(flip_frame(t, self.to))
    }
}

/// Width fraction and face for animation progress `t` in `[0, 1]`.
/// The card narrows to an edge at the midpoint, where the face swaps.
pub fn flip_frame(t: f32, to: Face) -> (f32, Face) {
    let t = t.clamp(0.0, 1.0);
    let squeeze = (std::f32::consts::PI * t).cos().abs().max(0.05);
    let from = match to {
        Face::Front => Face::Back,
        Face::Back => Face::Front,
    };
    let face = if t < 0.5 { from } else { to };
    (squeeze, face)
}

pub struct CardView<'a> {
    card: &'a Card,
    /// 1-based card number
    number: usize,
    face: Face,
    /// Horizontal scale, 1.0 = full width
    squeeze: f32,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a Card, number: usize, face: Face) -> Self {
        Self {
            card,
            number,
            face,
            squeeze: 1.0,
        }
    }

    pub fn squeeze(mut self, squeeze: f32) -> Self {
        self.squeeze = squeeze.clamp(0.0, 1.0);
        self
    }

    fn front_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(self.card.question.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        ];
        if let Some(sub) = &self.card.sub_question {
            lines.push(Line::default());
            lines.push(
                Line::from(sub.as_str())
                    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)),
            );
        }
        if !self.card.options.is_empty() {
            lines.push(Line::default());
            for option in &self.card.options {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::DarkGray)),
                    Span::raw(option.as_str()),
                ]));
            }
        }
        lines
    }
}

impl Component for CardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = ((area.width as f32 * self.squeeze).round() as u16).clamp(2, area.width.max(2));
        let [_, card_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .areas(area);

        let (tag, tag_color) = match self.face {
            Face::Front => (format!(" QUESTION {} ", self.number), Color::Yellow),
            Face::Back => (" ANSWER ".to_string(), Color::Green),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(tag_color))
            .title(Span::styled(
                tag,
                Style::default().fg(tag_color).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Space to flip ").centered())
            .padding(Padding::uniform(1));

        // Mid-turn the card is too thin to hold text
        if self.squeeze < 0.3 {
            frame.render_widget(block, card_area);
            return;
        }

        let paragraph = match self.face {
            Face::Front => Paragraph::new(self.front_lines()).alignment(Alignment::Left),
            Face::Back => Paragraph::new(self.card.answer.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
        };

        frame.render_widget(paragraph.wrap(Wrap { trim: true }).block(block), card_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(view: &mut CardView) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_front_shows_question_and_options() {
        let mut card = Card::new("Which tier is cheapest?", "Archive");
        card.sub_question = Some("Choose one".to_string());
        card.options = vec!["A. Standard".to_string(), "B. Archive".to_string()];
        let text = render_text(&mut CardView::new(&card, 3, Face::Front));
        assert!(text.contains("QUESTION 3"));
        assert!(text.contains("Which tier"));
        assert!(text.contains("Choose one"));
        assert!(text.contains("B. Archive"));
        assert!(!text.contains("ANSWER"));
    }

    #[test]
    fn test_back_shows_answer() {
        let card = Card::new("Q", "Forty-two");
        let text = render_text(&mut CardView::new(&card, 1, Face::Back));
        assert!(text.contains("ANSWER"));
        assert!(text.contains("Forty-two"));
    }

    #[test]
    fn test_thin_card_hides_text() {
        let card = Card::new("Hidden question", "A");
        let text = render_text(&mut CardView::new(&card, 1, Face::Front).squeeze(0.1));
        assert!(!text.contains("Hidden"));
    }

    #[test]
    fn test_flip_frame_swaps_face_at_midpoint() {
        assert_eq!(flip_frame(0.0, Face::Back), (1.0, Face::Front));
        assert_eq!(flip_frame(0.49, Face::Back).1, Face::Front);
        assert_eq!(flip_frame(0.51, Face::Back).1, Face::Back);
        assert_eq!(flip_frame(1.0, Face::Back).1, Face::Back);
        assert!(flip_frame(0.5, Face::Front).0 < 0.1);
    }

    #[test]
    fn test_animation_finishes() {
        let anim = FlipAnimation::start(Face::Back);
        assert!(anim.frame_at(anim.started).is_some());
        assert!(anim.frame_at(anim.started + FLIP_DURATION).is_none());
    }
}
