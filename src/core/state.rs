//! # Application State
//!
//! Core business state for Cardflip. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── config: ResolvedConfig        // sets, base URL, exhausted-next mode
//! ├── screen: Screen                // picker or player
//! ├── title: String                 // title of the open deck
//! ├── load: LoadState               // idle / loading / failed / ready
//! ├── load_generation: u64          // bumps on every load start
//! ├── navigator: Navigator          // position + view flags
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::action::Action;
use crate::core::config::{DataSource, ResolvedConfig};
use crate::core::navigator::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Picker,
    Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Failed(String),
    Ready,
}

pub struct App {
    pub config: ResolvedConfig,
    pub screen: Screen,
    pub title: String,
    /// Where the current deck comes from (URL or path).
    pub location: Option<String>,
    pub load: LoadState,
    /// Results tagged with an older generation belong to a superseded load.
    pub load_generation: u64,
    pub navigator: Navigator,
    pub status_message: String,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        let screen = match config.data_source {
            DataSource::Fixed(_) => Screen::Player,
            DataSource::Picker { .. } => Screen::Picker,
        };
        let navigator = Navigator::new(Default::default(), config.on_exhausted);
        Self {
            config,
            screen,
            title: String::from("Cardflip"),
            location: None,
            load: LoadState::Idle,
            load_generation: 0,
            navigator,
            status_message: String::new(),
        }
    }

    /// The action that kicks off the first load, if the shell starts in the player.
    pub fn initial_action(&self) -> Option<Action> {
        match &self.config.data_source {
            DataSource::Fixed(source) => Some(Action::OpenSource(source.clone())),
            DataSource::Picker { initial: Some(id) } if self.config.find_set(id).is_some() => {
                Some(Action::OpenSet(id.clone()))
            }
            DataSource::Picker { .. } => None,
        }
    }

    /// Whether Esc can leave the player for the picker.
    pub fn can_go_back(&self) -> bool {
        matches!(self.config.data_source, DataSource::Picker { .. })
    }

    /// Whether navigation input should reach the navigator.
    pub fn is_ready(&self) -> bool {
        self.screen == Screen::Player && self.load == LoadState::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }
}
