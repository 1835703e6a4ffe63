//! # Core Application Logic
//!
//! This module contains lingua's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • NavState (focus)     │
//!                    │  • Action (gestures)    │
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
//! - [`state`]: The `App` struct — all application state in one place
//! - [`nav`]: The navigation state machine and deep-link `Location`
//! - [`action`]: The `Action` enum — every gesture the app reacts to
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod nav;
pub mod state;
