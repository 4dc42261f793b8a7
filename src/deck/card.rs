//! Card and deck types plus JSON validation.
//!
//! The input document is a JSON array of objects. Each object is validated on
//! its own: entries that are not objects, have a mistyped `question`/`answer`,
//! or lack a non-empty one are dropped without failing the whole load.
//! Optional fields of the wrong type are ignored and the card is kept.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::source::LoadError;

/// A single question/answer card. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub sub_question: Option<String>,
    pub answer: String,
    pub explanation: Option<String>,
    pub options: Vec<String>,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            sub_question: None,
            answer: answer.into(),
            explanation: None,
            options: Vec::new(),
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// True when there is explanation text worth offering.
    pub fn has_explanation(&self) -> bool {
        self.explanation.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

/// Wire shape of one entry. Every field is optional so that validation can
/// happen after deserialization.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    question: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    sub_question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    options: Option<Vec<String>>,
}

/// Reads an optional field, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl RawCard {
    fn into_card(self) -> Option<Card> {
        let question = self.question.filter(|q| !q.is_empty())?;
        let answer = self.answer.filter(|a| !a.is_empty())?;
        Some(Card {
            question,
            sub_question: self.sub_question.filter(|s| !s.is_empty()),
            answer,
            explanation: self.explanation,
            options: self.options.unwrap_or_default(),
        })
    }
}

/// An ordered, immutable list of valid cards for one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Parses a JSON document into a deck, dropping invalid entries.
///
/// Fails only when the document itself is malformed or is not an array.
pub fn parse_deck(text: &str) -> Result<Deck, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))?;

    let serde_json::Value::Array(entries) = value else {
        return Err(LoadError::Parse("expected a JSON array of cards".to_string()));
    };

    let total = entries.len();
    let cards: Vec<Card> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<RawCard>(entry) {
            Ok(raw) => {
                let card = raw.into_card();
                if card.is_none() {
                    debug!("Dropping entry {}: missing question or answer", i);
                }
                card
            }
            Err(e) => {
                debug!("Dropping entry {}: {}", i, e);
                None
            }
        })
        .collect();

    debug!("Parsed deck: {} of {} entries valid", cards.len(), total);
    Ok(Deck::new(cards))
}
