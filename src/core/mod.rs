//! # Core Application Logic
//!
//! This module contains Cardflip's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (position) │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: The `Navigator`: deck position and view flags
//! - [`gesture`]: Swipe tracking and classification
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod gesture;
pub mod navigator;
pub mod state;
