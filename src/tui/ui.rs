use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, LoadState, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CardView, Controls, Explanation, Face, ProgressBar, RestartPrompt, SetPicker, Status,
    StatusView, TitleBar, controls_layout, explanation, explanation_height, goto_layout,
};

const PLAYER_HELP: &str = "Space flip · ←/→ move · r reset · e explain · 0-9 Enter jump · q quit";

/// Screen regions of the player, shared by rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub progress: Rect,
    pub card: Rect,
    pub explanation: Rect,
    pub controls: Rect,
    pub goto: Rect,
    pub help: Rect,
}

/// Clickable things on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Card,
    Prev,
    Reset,
    Next,
    ExplanationToggle,
    GotoGo,
    PickerRow(usize),
}

/// Splits the frame into title bar and main area.
pub fn frame_layout(frame_area: Rect) -> (Rect, Rect) {
    let [title_area, main_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame_area);
    (title_area, main_area)
}

pub fn player_layout(main_area: Rect, explanation_rows: u16) -> PlayerLayout {
    use Constraint::{Length, Min};
    let [_, progress, _, card, explanation, _, controls, goto, help] = Layout::vertical([
        Length(1),
        Length(2),
        Length(1),
        Min(5),
        Length(explanation_rows),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
    ])
    .areas(main_area);
    PlayerLayout {
        progress,
        card,
        explanation,
        controls,
        goto,
        help,
    }
}

/// Rows the explanation area needs for the current navigator state.
pub fn explanation_rows(app: &App, width: u16) -> u16 {
    if !app.navigator.explanation_available() {
        return 0;
    }
    let text = app
        .navigator
        .current_card()
        .and_then(|c| c.explanation.as_deref());
    explanation_height(text, app.navigator.show_explanation(), width)
}

/// Hit test: given a screen position, find which control (if any) is there.
pub fn hit_test(column: u16, row: u16, frame_area: Rect, app: &App, tui: &TuiState) -> Option<Hit> {
    let (_, main_area) = frame_layout(frame_area);
    let pos = Position::new(column, row);

    match app.screen {
        Screen::Picker => tui.set_picker.row_at(main_area, row).map(Hit::PickerRow),
        Screen::Player => {
            if !app.is_ready() || app.navigator.is_empty() {
                return None;
            }
            let layout = player_layout(main_area, explanation_rows(app, main_area.width));
            let controls = controls_layout(layout.controls);
            let goto = goto_layout(layout.goto);

            if layout.card.contains(pos) {
                Some(Hit::Card)
            } else if controls.prev.contains(pos) {
                Some(Hit::Prev)
            } else if controls.reset.contains(pos) {
                Some(Hit::Reset)
            } else if controls.next.contains(pos) {
                Some(Hit::Next)
            } else if explanation::toggle_area(layout.explanation).contains(pos) {
                Some(Hit::ExplanationToggle)
            } else if goto.go.contains(pos) {
                Some(Hit::GotoGo)
            } else {
                None
            }
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize, now: Instant) {
    let (title_area, main_area) = frame_layout(frame.area());

    TitleBar::new(
        app.title.clone(),
        app.status_message.clone(),
        app.screen == Screen::Player && app.can_go_back(),
    )
    .render(frame, title_area);

    match app.screen {
        Screen::Picker => SetPicker::new(&mut tui.set_picker).render(frame, main_area),
        Screen::Player => match &app.load {
            LoadState::Idle | LoadState::Loading => {
                StatusView::new(Status::Loading { spinner_frame }).render(frame, main_area)
            }
            LoadState::Failed(msg) => {
                StatusView::new(Status::Failed(msg.clone())).render(frame, main_area)
            }
            LoadState::Ready if app.navigator.is_empty() => {
                StatusView::new(Status::Empty).render(frame, main_area)
            }
            LoadState::Ready => draw_player(frame, main_area, app, tui, now),
        },
    }
}

fn draw_player(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, now: Instant) {
    let nav = &app.navigator;
    let (Some(index), Some(card)) = (nav.current_index(), nav.current_card()) else {
        return;
    };
    let layout = player_layout(area, explanation_rows(app, area.width));

    ProgressBar::new(nav.progress()).render(frame, layout.progress);

    // A suppressed frame shows the settled face with no turn animation.
    let (squeeze, face) = match tui.flip_anim.as_ref().and_then(|a| a.frame_at(now)) {
        Some(frame_state) if !nav.suppress_transition() => frame_state,
        _ => (1.0, Face::from_flipped(nav.is_flipped())),
    };
    CardView::new(card, index + 1, face)
        .squeeze(squeeze)
        .render(frame, layout.card);

    if nav.explanation_available()
        && let Some(text) = card.explanation.as_deref()
    {
        Explanation::new(text, nav.show_explanation()).render(frame, layout.explanation);
    }

    let next_enabled = !nav.is_last()
        || nav.on_exhausted() == crate::core::navigator::ExhaustedNext::PromptRestart;
    Controls::new(!nav.is_first(), next_enabled).render(frame, layout.controls);

    tui.goto_box.position = index + 1;
    tui.goto_box.total = nav.len();
    tui.goto_box.render(frame, layout.goto);

    frame.render_widget(
        Paragraph::new(PLAYER_HELP)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        layout.help,
    );

    if nav.restart_prompt() {
        RestartPrompt::new(nav.len()).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::navigator::ExhaustedNext;
    use crate::deck::{Card, Deck};
    use crate::test_support::{ready_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, 0, Instant::now()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_picker() {
        let app = test_app();
        let mut tui = TuiState::new(app.config.sets.clone());
        let text = render(&app, &mut tui);
        assert!(text.contains("Choose a set"));
        assert!(text.contains("NCP 202"));
    }

    #[test]
    fn test_draw_loading() {
        let mut app = test_app();
        update(&mut app, Action::OpenSet("ncp200".to_string()));
        let mut tui = TuiState::new(app.config.sets.clone());
        let text = render(&app, &mut tui);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut app = test_app();
        update(&mut app, Action::OpenSet("ncp200".to_string()));
        update(&mut app, Action::DeckLoaded { generation: 1, result: Ok(Deck::default()) });
        let mut tui = TuiState::new(app.config.sets.clone());
        assert!(render(&app, &mut tui).contains("No cards."));
    }

    #[test]
    fn test_draw_player_front_and_progress() {
        let app = ready_app(10, ExhaustedNext::Clamp);
        let mut tui = TuiState::new(app.config.sets.clone());
        let text = render(&app, &mut tui);
        assert!(text.contains("10%"));
        assert!(text.contains("QUESTION 1"));
        assert!(text.contains("Question 1"));
        assert!(text.contains("[1]/10"));
        assert!(!text.contains("explanation"));
    }

    #[test]
    fn test_draw_player_back_with_explanation() {
        let mut app = test_app();
        update(&mut app, Action::OpenSet("ncp200".to_string()));
        update(
            &mut app,
            Action::DeckLoaded {
                generation: 1,
                result: Ok(Deck::new(vec![Card::new("Q", "The answer").with_explanation("Because reasons")])),
            },
        );
        update(&mut app, Action::Flip);
        update(&mut app, Action::ToggleExplanation);
        let mut tui = TuiState::new(app.config.sets.clone());
        let text = render(&app, &mut tui);
        assert!(text.contains("ANSWER"));
        assert!(text.contains("The answer"));
        assert!(text.contains("Hide explanation"));
        assert!(text.contains("Because reasons"));
    }

    #[test]
    fn test_draw_restart_prompt() {
        let mut app = ready_app(1, ExhaustedNext::PromptRestart);
        update(&mut app, Action::Next);
        let mut tui = TuiState::new(app.config.sets.clone());
        assert!(render(&app, &mut tui).contains("Restart from the first card?"));
    }

    #[test]
    fn test_hit_test_player() {
        let app = ready_app(3, ExhaustedNext::Clamp);
        let tui = TuiState::new(app.config.sets.clone());
        let frame_area = Rect::new(0, 0, 80, 30);
        let (_, main_area) = frame_layout(frame_area);
        let layout = player_layout(main_area, 0);
        let controls = controls_layout(layout.controls);

        assert_eq!(
            hit_test(layout.card.x + 2, layout.card.y + 1, frame_area, &app, &tui),
            Some(Hit::Card)
        );
        assert_eq!(
            hit_test(controls.next.x, controls.next.y, frame_area, &app, &tui),
            Some(Hit::Next)
        );
        assert_eq!(
            hit_test(controls.prev.x, controls.prev.y, frame_area, &app, &tui),
            Some(Hit::Prev)
        );
        assert_eq!(hit_test(0, 0, frame_area, &app, &tui), None);
    }

    #[test]
    fn test_hit_test_picker() {
        let app = test_app();
        let tui = TuiState::new(app.config.sets.clone());
        let frame_area = Rect::new(0, 0, 80, 30);
        // title (1) + border (1) + padding (1)
        assert_eq!(hit_test(5, 3, frame_area, &app, &tui), Some(Hit::PickerRow(0)));
    }
}
