//! # Navigator
//!
//! Owns the position in the deck and the transient view flags. Every field is
//! private; the methods below are the only way to change them.
//!
//! ```text
//! Navigator
//! ├── deck: Deck                    // replaced wholesale by load()
//! ├── index: usize                  // always < deck.len() when non-empty
//! ├── flipped: bool                 // answer side showing
//! ├── show_explanation: bool        // only meaningful while flipped
//! ├── goto_text: String             // uncommitted jump input
//! ├── restart_prompt: bool          // end-of-deck prompt visible
//! └── suppress_transition: bool     // skip the flip animation for one frame
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::deck::{Card, Deck};

/// What `next()` does on the last card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustedNext {
    /// Stay on the last card.
    #[default]
    Clamp,
    /// Ask whether to restart from the first card.
    PromptRestart,
}

impl ExhaustedNext {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Some(ExhaustedNext::Clamp),
            "prompt-restart" | "prompt_restart" | "promptrestart" => {
                Some(ExhaustedNext::PromptRestart)
            }
            _ => None,
        }
    }
}

/// Result of a navigation request, so callers can tell a move from a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Unchanged,
    /// `next()` on the last card in prompt-restart mode.
    Exhausted,
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    deck: Deck,
    on_exhausted: ExhaustedNext,
    index: usize,
    flipped: bool,
    show_explanation: bool,
    goto_text: String,
    restart_prompt: bool,
    suppress_transition: bool,
}

impl Navigator {
    pub fn new(deck: Deck, on_exhausted: ExhaustedNext) -> Self {
        Self {
            deck,
            on_exhausted,
            ..Default::default()
        }
    }

    /// Replaces the deck and returns every view flag to its initial value.
    pub fn load(&mut self, deck: Deck) {
        self.deck = deck;
        self.reset();
        self.suppress_transition = false;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Zero-based position, `None` when the deck is empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.deck.is_empty()).then_some(self.index)
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.index)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn show_explanation(&self) -> bool {
        self.show_explanation
    }

    /// Whether the explanation toggle should be offered at all.
    pub fn explanation_available(&self) -> bool {
        self.flipped && self.current_card().is_some_and(Card::has_explanation)
    }

    pub fn goto_text(&self) -> &str {
        &self.goto_text
    }

    pub fn restart_prompt(&self) -> bool {
        self.restart_prompt
    }

    pub fn suppress_transition(&self) -> bool {
        self.suppress_transition
    }

    pub fn on_exhausted(&self) -> ExhaustedNext {
        self.on_exhausted
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.deck.len()
    }

    /// Percent of the deck reached, `0.0` for an empty deck.
    pub fn progress(&self) -> f64 {
        if self.deck.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.deck.len() as f64 * 100.0
    }

    /// Progress rounded to the nearest whole percent, for display.
    pub fn progress_percent(&self) -> u16 {
        self.progress().round() as u16
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    pub fn flip(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
        if !self.flipped {
            self.show_explanation = false;
        }
    }

    /// Toggles the explanation. Ignored unless the explanation is available.
    pub fn toggle_explanation(&mut self) {
        if self.explanation_available() {
            self.show_explanation = !self.show_explanation;
        }
    }

    pub fn next(&mut self) -> Step {
        if self.deck.is_empty() {
            return Step::Unchanged;
        }
        if self.is_last() {
            return match self.on_exhausted {
                ExhaustedNext::Clamp => Step::Unchanged,
                ExhaustedNext::PromptRestart => {
                    self.restart_prompt = true;
                    Step::Exhausted
                }
            };
        }
        self.jump_to(self.index + 1);
        Step::Moved
    }

    pub fn previous(&mut self) -> Step {
        if self.deck.is_empty() || self.index == 0 {
            return Step::Unchanged;
        }
        self.jump_to(self.index - 1);
        Step::Moved
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.flipped = false;
        self.show_explanation = false;
        self.goto_text.clear();
        self.restart_prompt = false;
    }

    pub fn set_goto_text(&mut self, text: impl Into<String>) {
        self.goto_text = text.into();
    }

    /// Commits the pending goto text.
    pub fn commit_goto(&mut self) -> Step {
        let text = std::mem::take(&mut self.goto_text);
        let step = self.goto_commit(&text);
        if step == Step::Unchanged && parse_goto(&text).is_none() {
            // Invalid input stays in the box for correction.
            self.goto_text = text;
        }
        step
    }

    /// Jumps to the 1-based card number in `raw`, clamped to the deck.
    /// Non-numeric or non-finite input is ignored.
    pub fn goto_commit(&mut self, raw: &str) -> Step {
        if self.deck.is_empty() {
            return Step::Unchanged;
        }
        let Some(number) = parse_goto(raw) else {
            debug!("Ignoring goto input {:?}", raw);
            return Step::Unchanged;
        };
        let target = number.clamp(1, self.deck.len() as i64) as usize - 1;
        self.jump_to(target);
        self.goto_text.clear();
        Step::Moved
    }

    /// Dismisses the end-of-deck prompt without moving.
    pub fn dismiss_restart_prompt(&mut self) {
        self.restart_prompt = false;
    }

    /// Accepts the end-of-deck prompt: back to the first card.
    pub fn confirm_restart(&mut self) {
        if self.restart_prompt {
            self.reset();
        }
    }

    /// Called by the presentation layer once the suppressed frame is drawn.
    pub fn end_suppressed_frame(&mut self) {
        self.suppress_transition = false;
    }

    fn jump_to(&mut self, target: usize) {
        if self.flipped {
            self.suppress_transition = true;
        }
        self.index = target;
        self.flipped = false;
        self.show_explanation = false;
    }
}

/// Parses goto input like a number field: finite decimal, truncated toward zero.
fn parse_goto(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    // A number input would read "" as 0 and jump to card 1; here it's ignored.
    if trimmed.is_empty() {
        return None;
    }
    let n: f64 = trimmed.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(n.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{explained_navigator, sample_deck, sample_navigator};

    #[test]
    fn test_next_advances_and_clears_flags() {
        for n in 2..8 {
            for i in 0..n - 1 {
                let mut nav = explained_navigator(n, ExhaustedNext::Clamp);
                nav.goto_commit(&(i + 1).to_string());
                nav.flip();
                nav.toggle_explanation();
                assert!(nav.show_explanation());
                assert_eq!(nav.next(), Step::Moved);
                assert_eq!(nav.current_index(), Some(i + 1));
                assert!(!nav.is_flipped());
                assert!(!nav.show_explanation());
            }
        }
    }

    #[test]
    fn test_next_on_last_card_clamps() {
        let mut nav = sample_navigator(3, ExhaustedNext::Clamp);
        nav.goto_commit("3");
        nav.flip();
        assert_eq!(nav.next(), Step::Unchanged);
        assert_eq!(nav.current_index(), Some(2));
        assert!(nav.is_flipped());
        assert!(!nav.restart_prompt());
    }

    #[test]
    fn test_next_on_last_card_prompts_restart() {
        let mut nav = sample_navigator(3, ExhaustedNext::PromptRestart);
        nav.goto_commit("3");
        assert_eq!(nav.next(), Step::Exhausted);
        assert_eq!(nav.current_index(), Some(2));
        assert!(nav.restart_prompt());

        nav.confirm_restart();
        assert_eq!(nav.current_index(), Some(0));
        assert!(!nav.restart_prompt());
    }

    #[test]
    fn test_dismiss_restart_prompt_keeps_position() {
        let mut nav = sample_navigator(2, ExhaustedNext::PromptRestart);
        nav.next();
        nav.next();
        nav.dismiss_restart_prompt();
        assert_eq!(nav.current_index(), Some(1));
        assert!(!nav.restart_prompt());
    }

    #[test]
    fn test_confirm_restart_without_prompt_is_noop() {
        let mut nav = sample_navigator(3, ExhaustedNext::PromptRestart);
        nav.next();
        nav.confirm_restart();
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut nav = sample_navigator(4, ExhaustedNext::Clamp);
        nav.flip();
        assert_eq!(nav.previous(), Step::Unchanged);
        assert_eq!(nav.current_index(), Some(0));
        assert!(nav.is_flipped());
    }

    #[test]
    fn test_previous_decrements_and_clears_flags() {
        for n in 2..6 {
            for i in 1..n {
                let mut nav = explained_navigator(n, ExhaustedNext::Clamp);
                nav.goto_commit(&(i + 1).to_string());
                nav.flip();
                nav.toggle_explanation();
                assert!(nav.show_explanation());
                assert_eq!(nav.previous(), Step::Moved);
                assert_eq!(nav.current_index(), Some(i - 1));
                assert!(!nav.is_flipped());
                assert!(!nav.show_explanation());
            }
        }
    }

    #[test]
    fn test_flip_clears_explanation_when_turning_back() {
        let mut nav = explained_navigator(1, ExhaustedNext::Clamp);
        nav.flip();
        nav.toggle_explanation();
        assert!(nav.show_explanation());
        nav.flip();
        assert!(!nav.is_flipped());
        assert!(!nav.show_explanation());
    }

    #[test]
    fn test_explanation_requires_flip_and_text() {
        let mut nav = Navigator::new(
            Deck::new(vec![Card::new("Q", "A"), Card::new("Q2", "A2").with_explanation("why")]),
            ExhaustedNext::Clamp,
        );
        nav.toggle_explanation();
        assert!(!nav.show_explanation());

        nav.flip();
        nav.toggle_explanation();
        assert!(!nav.show_explanation(), "first card has no explanation");

        nav.next();
        nav.toggle_explanation();
        assert!(!nav.show_explanation(), "not flipped yet");
        nav.flip();
        nav.toggle_explanation();
        assert!(nav.show_explanation());
    }

    #[test]
    fn test_empty_deck_operations_are_noops() {
        let mut nav = Navigator::new(Deck::default(), ExhaustedNext::PromptRestart);
        nav.flip();
        assert!(!nav.is_flipped());
        assert_eq!(nav.next(), Step::Unchanged);
        assert!(!nav.restart_prompt());
        assert_eq!(nav.previous(), Step::Unchanged);
        assert_eq!(nav.goto_commit("1"), Step::Unchanged);
        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.progress(), 0.0);
    }

    #[test]
    fn test_goto_clamps_low() {
        let mut nav = sample_navigator(5, ExhaustedNext::Clamp);
        nav.next();
        nav.goto_commit("0");
        assert_eq!(nav.current_index(), Some(0));
        nav.next();
        nav.goto_commit("-7");
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn test_goto_clamps_high() {
        let mut nav = sample_navigator(5, ExhaustedNext::Clamp);
        nav.goto_commit("5");
        assert_eq!(nav.current_index(), Some(4));
        nav.goto_commit("1");
        nav.goto_commit("999");
        assert_eq!(nav.current_index(), Some(4));
    }

    #[test]
    fn test_goto_truncates_toward_zero() {
        let mut nav = sample_navigator(10, ExhaustedNext::Clamp);
        nav.goto_commit("3.9");
        assert_eq!(nav.current_index(), Some(2));
        nav.goto_commit("-0.5");
        assert_eq!(nav.current_index(), Some(0));
        nav.goto_commit(" 7 ");
        assert_eq!(nav.current_index(), Some(6));
    }

    #[test]
    fn test_goto_ignores_non_numeric() {
        let mut nav = sample_navigator(5, ExhaustedNext::Clamp);
        nav.goto_commit("3");
        for raw in ["abc", "", "  ", "NaN", "inf", "-infinity", "1e400", "3x"] {
            assert_eq!(nav.goto_commit(raw), Step::Unchanged, "input {raw:?}");
            assert_eq!(nav.current_index(), Some(2));
        }
    }

    #[test]
    fn test_goto_is_idempotent() {
        let mut nav = sample_navigator(8, ExhaustedNext::Clamp);
        nav.goto_commit("4");
        let first = (nav.current_index(), nav.is_flipped(), nav.show_explanation());
        nav.goto_commit("4");
        let second = (nav.current_index(), nav.is_flipped(), nav.show_explanation());
        assert_eq!(first, second);
        assert_eq!(first.0, Some(3));
    }

    #[test]
    fn test_commit_goto_clears_text_on_success() {
        let mut nav = sample_navigator(5, ExhaustedNext::Clamp);
        nav.set_goto_text("4");
        assert_eq!(nav.commit_goto(), Step::Moved);
        assert_eq!(nav.current_index(), Some(3));
        assert_eq!(nav.goto_text(), "");
    }

    #[test]
    fn test_commit_goto_keeps_invalid_text() {
        let mut nav = sample_navigator(5, ExhaustedNext::Clamp);
        nav.set_goto_text("4-");
        assert_eq!(nav.commit_goto(), Step::Unchanged);
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.goto_text(), "4-");
    }

    #[test]
    fn test_progress() {
        let mut nav = sample_navigator(10, ExhaustedNext::Clamp);
        assert_eq!(nav.progress(), 10.0);
        nav.goto_commit("10");
        assert_eq!(nav.progress(), 100.0);
        assert_eq!(nav.progress_percent(), 100);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let mut nav = sample_navigator(3, ExhaustedNext::Clamp);
        assert_eq!(nav.progress_percent(), 33);
        nav.next();
        assert_eq!(nav.progress_percent(), 67);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut nav = sample_navigator(4, ExhaustedNext::PromptRestart);
        nav.goto_commit("4");
        nav.flip();
        nav.toggle_explanation();
        nav.set_goto_text("2");
        nav.next();
        assert!(nav.restart_prompt());

        nav.reset();
        assert_eq!(nav.current_index(), Some(0));
        assert!(!nav.is_flipped());
        assert!(!nav.show_explanation());
        assert_eq!(nav.goto_text(), "");
        assert!(!nav.restart_prompt());
    }

    #[test]
    fn test_jump_while_flipped_suppresses_one_transition() {
        let mut nav = sample_navigator(3, ExhaustedNext::Clamp);
        nav.next();
        assert!(!nav.suppress_transition(), "was not flipped");

        nav.flip();
        nav.next();
        assert!(nav.suppress_transition());
        nav.end_suppressed_frame();
        assert!(!nav.suppress_transition());

        nav.flip();
        nav.goto_commit("1");
        assert!(nav.suppress_transition());
    }

    #[test]
    fn test_load_resets_position() {
        let mut nav = sample_navigator(5, ExhaustedNext::Clamp);
        nav.goto_commit("5");
        nav.flip();
        nav.load(sample_deck(2));
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.current_index(), Some(0));
        assert!(!nav.is_flipped());
    }

    #[test]
    fn test_exhausted_next_parse() {
        assert_eq!(ExhaustedNext::parse("clamp"), Some(ExhaustedNext::Clamp));
        assert_eq!(ExhaustedNext::parse("Prompt-Restart"), Some(ExhaustedNext::PromptRestart));
        assert_eq!(ExhaustedNext::parse("wrap"), None);
    }
}
