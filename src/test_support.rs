//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::action::{Action, update};
use crate::core::config::{DataSource, ResolvedConfig, builtin_sets};
use crate::core::navigator::{ExhaustedNext, Navigator};
use crate::core::state::App;
use crate::deck::{Card, Deck};

/// A deck of `n` cards: "Question 1"/"Answer 1", ...
pub fn sample_deck(n: usize) -> Deck {
    Deck::new(
        (1..=n)
            .map(|i| Card::new(format!("Question {i}"), format!("Answer {i}")))
            .collect(),
    )
}

/// Like [`sample_deck`], but every card carries "Explanation i".
pub fn explained_deck(n: usize) -> Deck {
    Deck::new(
        (1..=n)
            .map(|i| {
                Card::new(format!("Question {i}"), format!("Answer {i}"))
                    .with_explanation(format!("Explanation {i}"))
            })
            .collect(),
    )
}

pub fn explained_navigator(n: usize, on_exhausted: ExhaustedNext) -> Navigator {
    Navigator::new(explained_deck(n), on_exhausted)
}

pub fn sample_navigator(n: usize, on_exhausted: ExhaustedNext) -> Navigator {
    Navigator::new(sample_deck(n), on_exhausted)
}

/// Picker-mode config over the built-in sets, resolved against ".".
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        base_url: ".".to_string(),
        on_exhausted: ExhaustedNext::Clamp,
        data_source: DataSource::Picker { initial: None },
        request_timeout: Duration::from_secs(5),
        sets: builtin_sets(),
    }
}

/// Creates a test App on the picker screen.
pub fn test_app() -> App {
    App::new(test_config())
}

/// Creates a test App with a loaded deck of `n` cards.
pub fn ready_app(n: usize, on_exhausted: ExhaustedNext) -> App {
    let mut config = test_config();
    config.on_exhausted = on_exhausted;
    let mut app = App::new(config);
    update(&mut app, Action::OpenSet("ncp200".to_string()));
    let generation = app.load_generation;
    update(
        &mut app,
        Action::DeckLoaded {
            generation,
            result: Ok(sample_deck(n)),
        },
    );
    app
}
