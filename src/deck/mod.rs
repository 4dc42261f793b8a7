//! # Deck Loading
//!
//! Everything needed to turn a source identifier (URL or file path) into a
//! validated, ordered [`Deck`]. Nothing here knows about the terminal.
//!
//! ```text
//! "https://…/ncp200.json"  ──resolve_source()──▶  Arc<dyn DeckSource>
//!                                                     │ fetch()
//!                                                     ▼
//!                                                raw JSON text
//!                                                     │ parse_deck()
//!                                                     ▼
//!                                                   Deck
//! ```

pub mod card;
pub mod source;

pub use card::{Card, Deck, parse_deck};
pub use source::{DeckSource, FileSource, HttpSource, LoadError, build_url, load_deck, resolve_source};
