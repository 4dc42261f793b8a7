//! Progress indicator: rounded percentage, input hint, and a filled bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph};

use crate::tui::component::Component;

const HINT: &str = "Drag: prev/next · Click: flip";

pub struct ProgressBar {
    /// Exact progress in percent (0.0..=100.0)
    pub percent: f64,
}

impl ProgressBar {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent.round() as u16)
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [info_area, bar_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let [percent_area, hint_area] = Layout::horizontal([
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(info_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.label(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            percent_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(HINT).right_aligned())
                .style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );

        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .label("")
            .ratio((self.percent / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, bar_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_label_rounds() {
        assert_eq!(ProgressBar::new(33.333).label(), "33%");
        assert_eq!(ProgressBar::new(66.666).label(), "67%");
        assert_eq!(ProgressBar::new(100.0).label(), "100%");
    }

    #[test]
    fn test_render_shows_percent() {
        let backend = TestBackend::new(50, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut progress = ProgressBar::new(10.0);
        terminal.draw(|f| progress.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("10%"));
    }
}
