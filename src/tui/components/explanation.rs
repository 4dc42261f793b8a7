//! Explanation toggle and box, offered only on the answer side of cards that
//! carry explanation text.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

/// Tallest the explanation box may grow, borders included.
const MAX_BOX_HEIGHT: u16 = 10;

/// Rows needed below the card: 0 when unavailable, 1 for the toggle alone,
/// more when the box is open.
pub fn explanation_height(text: Option<&str>, shown: bool, width: u16) -> u16 {
    let Some(text) = text else {
        return 0;
    };
    if !shown {
        return 1;
    }
    let inner = width.saturating_sub(2).max(1) as usize;
    let lines = textwrap::wrap(text, inner).len() as u16;
    1 + (lines + 2).min(MAX_BOX_HEIGHT)
}

/// Row holding the toggle button inside the explanation area.
pub fn toggle_area(area: Rect) -> Rect {
    Rect { height: area.height.min(1), ..area }
}

pub struct Explanation<'a> {
    pub text: &'a str,
    pub shown: bool,
}

impl<'a> Explanation<'a> {
    pub fn new(text: &'a str, shown: bool) -> Self {
        Self { text, shown }
    }
}

impl Component for Explanation<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [button_area, box_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let label = if self.shown {
            "[ e Hide explanation ]"
        } else {
            "[ e Show explanation ]"
        };
        frame.render_widget(
            Paragraph::new(label)
                .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .centered(),
            button_area,
        );

        if self.shown && box_area.height > 0 {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(
                Paragraph::new(self.text).wrap(Wrap { trim: true }).block(block),
                box_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_height_without_explanation() {
        assert_eq!(explanation_height(None, true, 40), 0);
    }

    #[test]
    fn test_height_collapsed() {
        assert_eq!(explanation_height(Some("because"), false, 40), 1);
    }

    #[test]
    fn test_height_expanded_is_capped() {
        assert_eq!(explanation_height(Some("short"), true, 40), 1 + 3);
        let long = "word ".repeat(500);
        assert_eq!(explanation_height(Some(&long), true, 40), 1 + MAX_BOX_HEIGHT);
    }

    #[test]
    fn test_render_expanded() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = Explanation::new("Object storage scales.", true);
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Hide explanation"));
        assert!(text.contains("Object storage"));
    }
}
