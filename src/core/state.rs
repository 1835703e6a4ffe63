//! # Application State
//!
//! Core business state for lingua. This module contains domain logic
//! only — no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── tree: Curriculum        // loaded curriculum, read-only
//! ├── nav: NavState           // page / expansion / highlight state
//! ├── location: Location      // live deep-link descriptor
//! ├── status_message: String  // status bar text
//! └── audio_player: String    // external player command
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use crate::content::Curriculum;
use crate::core::config::ResolvedConfig;
use crate::core::nav::{Location, NavState};

pub struct App {
    /// Read-only after load; all navigation is resolved against it.
    pub tree: Curriculum,
    pub nav: NavState,
    /// Recomputed after every action so the descriptor shown to the user
    /// always reflects the current focus.
    pub location: Location,
    pub status_message: String,
    pub audio_player: String,
}

impl App {
    pub fn new(tree: Curriculum, audio_player: String) -> Self {
        let nav = NavState::new(&tree);
        let location = nav.to_location(&tree);
        Self {
            tree,
            nav,
            location,
            status_message: String::new(),
            audio_player,
        }
    }

    pub fn from_config(tree: Curriculum, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(tree, config.audio_player.clone());
        if let Some(ref start) = config.start_location {
            let loc = Location::parse(start);
            app.nav.apply_location(&app.tree, &loc);
            app.sync_location();
        }
        app
    }

    /// Rewrite the deep-link descriptor from the current navigation state.
    pub fn sync_location(&mut self) {
        self.location = self.nav.to_location(&self.tree);
    }
}
