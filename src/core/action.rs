//! # Actions
//!
//! Every user gesture becomes an `Action` — a tagged variant carrying
//! the full path identifiers it operates on, dispatched through one
//! typed `update()` switch. No string-keyed lookups decide what runs.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! `update()` mutates only `NavState` and the status message, then
//! rewrites the location descriptor. Side effects (audio playback,
//! quitting) are returned as an [`Effect`] for the event loop to run.

use log::debug;

use crate::core::state::App;

/// Discrete user gestures, path-qualified per the id-uniqueness rule
/// (ids are only unique within their immediate parent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTheme { unit: u32, theme: u32 },
    TogglePart { unit: u32, theme: u32, part: u32 },
    ToggleSection { unit: u32, theme: u32, part: u32, section: usize },
    /// Fire-and-forget playback of an audio clip.
    PlayAudio(String),
    /// Jump-form submission. `unit` is validated here against `[1, N]`;
    /// topic/part cascade through the focus chain when present.
    JumpSubmit { unit: u32, topic: Option<u32>, part: Option<u32> },
    /// Unit chosen from the navigation list (by unit id).
    NavClick(u32),
    /// Pagination: switch to a 1-based page index.
    PageClick(usize),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    PlayAudio(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    app.status_message.clear();

    let effect = match action {
        Action::ToggleTheme { unit, theme } => {
            app.nav.toggle_theme(unit, theme);
            Effect::None
        }
        Action::TogglePart { unit, theme, part } => {
            app.nav.toggle_part(unit, theme, part);
            Effect::None
        }
        Action::ToggleSection {
            unit,
            theme,
            part,
            section,
        } => {
            app.nav.toggle_section(unit, theme, part, section);
            Effect::None
        }
        Action::PlayAudio(src) => Effect::PlayAudio(src),
        Action::JumpSubmit { unit, topic, part } => {
            let total = app.tree.page_count();
            if unit < 1 || unit as usize > total {
                // Validation failure: message only, state untouched
                app.status_message = format!("Enter a valid unit number (1-{total})");
                return Effect::None;
            }
            match (topic, part) {
                (Some(t), Some(p)) => app.nav.focus_part(&app.tree, unit, t, p),
                (Some(t), None) => app.nav.focus_theme(&app.tree, unit, t),
                _ => app.nav.focus_unit(&app.tree, unit),
            }
            Effect::None
        }
        Action::NavClick(unit) => {
            app.nav.focus_unit(&app.tree, unit);
            Effect::None
        }
        Action::PageClick(page) => {
            // go_to_page assumes pre-validated input, so validate here
            if page >= 1 && page <= app.tree.page_count() {
                app.nav.go_to_page(page);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    };

    app.sync_location();
    effect
}
