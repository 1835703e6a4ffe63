//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 500ms in
//! `poll_event_timeout` and only redraws when an event arrived. All
//! pending events are drained before the next draw so a held-down key
//! never queues up stale frames.

mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::render::UnitPage;
use crate::tui::components::{
    JumpFormEvent, JumpFormState, Row, RowTarget, UnitNavEvent, UnitNavState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Per-unit view pages, built once from the content tree.
    pub pages: Vec<UnitPage>,
    /// Interactive rows of the current page, cached from the last draw.
    pub rows: Vec<Row>,
    /// Index into `rows` of the keyboard cursor.
    pub cursor: usize,
    pub scroll_state: ScrollViewState,
    /// Scroll this line into view on the next draw.
    pub scroll_to_line: Option<usize>,
    /// Move cursor and scroll to the highlighted element on the next draw.
    pub follow_highlight: bool,
    // Overlays (None = hidden)
    pub jump_form: Option<JumpFormState>,
    pub unit_nav: Option<UnitNavState>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            pages: ui::build_view(app),
            rows: Vec::new(),
            cursor: 0,
            scroll_state: ScrollViewState::default(),
            scroll_to_line: None,
            // A deep link sets a highlight before the first frame
            follow_highlight: app.nav.highlight.is_some(),
            jump_form: None,
            unit_nav: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Spawn the external audio player, fire-and-forget. A missing player
/// degrades to a status message rather than an error.
fn play_audio(app: &mut App, src: &str) {
    info!("Playing audio: {} via {}", src, app.audio_player);
    let result = std::process::Command::new(&app.audio_player)
        .arg(src)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();
    match result {
        Ok(_) => app.status_message = format!("Playing {}", src),
        Err(e) => {
            warn!("Failed to launch audio player '{}': {}", app.audio_player, e);
            app.status_message = format!("Could not launch '{}': {}", app.audio_player, e);
        }
    }
}

fn dispatch(app: &mut App, action: Action) -> Effect {
    update(app, action)
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if dispatch(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the jump form is open, route all events to it
            if let Some(ref mut form) = tui.jump_form {
                if let Some(form_event) = form.handle_event(&event, &app.tree) {
                    match form_event {
                        JumpFormEvent::Submit { unit, topic, part } => {
                            tui.jump_form = None;
                            let effect =
                                dispatch(&mut app, Action::JumpSubmit { unit, topic, part });
                            handle_effect(&mut app, effect, &mut should_quit);
                            tui.follow_highlight = true;
                        }
                        JumpFormEvent::Dismiss => {
                            tui.jump_form = None;
                        }
                    }
                }
                continue;
            }

            // Likewise the unit navigation overlay
            if let Some(ref mut nav) = tui.unit_nav {
                if let Some(nav_event) = nav.handle_event(&event) {
                    match nav_event {
                        UnitNavEvent::Select(unit) => {
                            tui.unit_nav = None;
                            let effect = dispatch(&mut app, Action::NavClick(unit));
                            handle_effect(&mut app, effect, &mut should_quit);
                            tui.cursor = 0;
                            tui.scroll_to_line = Some(0);
                        }
                        UnitNavEvent::Dismiss => {
                            tui.unit_nav = None;
                        }
                    }
                }
                continue;
            }

            match event {
                TuiEvent::InputChar('q') | TuiEvent::Escape => {
                    if dispatch(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::InputChar('g') => {
                    tui.jump_form = Some(JumpFormState::new(&app.tree));
                }
                TuiEvent::InputChar('u') => {
                    tui.unit_nav = Some(UnitNavState::new(&app.tree, app.nav.current_page));
                }
                TuiEvent::CursorUp => {
                    if tui.cursor > 0 {
                        tui.cursor -= 1;
                    }
                    if let Some(row) = tui.rows.get(tui.cursor) {
                        tui.scroll_to_line = Some(row.line);
                    }
                }
                TuiEvent::CursorDown => {
                    if tui.cursor + 1 < tui.rows.len() {
                        tui.cursor += 1;
                    }
                    if let Some(row) = tui.rows.get(tui.cursor) {
                        tui.scroll_to_line = Some(row.line);
                    }
                }
                // Enter or Space activates the cursor row
                TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                    if let Some(row) = tui.rows.get(tui.cursor) {
                        let action = match row.target.clone() {
                            RowTarget::Theme { unit, theme } => Action::ToggleTheme { unit, theme },
                            RowTarget::Part { unit, theme, part } => {
                                Action::TogglePart { unit, theme, part }
                            }
                            RowTarget::Section {
                                unit,
                                theme,
                                part,
                                section,
                            } => Action::ToggleSection {
                                unit,
                                theme,
                                part,
                                section,
                            },
                            RowTarget::Audio(src) => Action::PlayAudio(src),
                        };
                        let effect = dispatch(&mut app, action);
                        handle_effect(&mut app, effect, &mut should_quit);
                    }
                }
                TuiEvent::PrevPage => {
                    let target = app.nav.current_page.saturating_sub(1);
                    let effect = dispatch(&mut app, Action::PageClick(target));
                    handle_effect(&mut app, effect, &mut should_quit);
                    tui.cursor = 0;
                    tui.scroll_to_line = Some(0);
                }
                TuiEvent::NextPage => {
                    let target = app.nav.current_page + 1;
                    let effect = dispatch(&mut app, Action::PageClick(target));
                    handle_effect(&mut app, effect, &mut should_quit);
                    tui.cursor = 0;
                    tui.scroll_to_line = Some(0);
                }
                TuiEvent::ScrollUp => tui.scroll_state.scroll_up(),
                TuiEvent::ScrollDown => tui.scroll_state.scroll_down(),
                TuiEvent::ScrollPageUp => tui.scroll_state.scroll_page_up(),
                TuiEvent::ScrollPageDown => tui.scroll_state.scroll_page_down(),
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_effect(app: &mut App, effect: Effect, should_quit: &mut bool) {
    match effect {
        Effect::Quit => *should_quit = true,
        Effect::PlayAudio(src) => play_audio(app, &src),
        Effect::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_page_advance_dispatch_and_clamp() {
        let mut app = test_app();

        // Same shape as the NextPage arm: read the current page into a
        // local, then dispatch with the app borrowed mutably
        let target = app.nav.current_page + 1;
        dispatch(&mut app, Action::PageClick(target));
        assert_eq!(app.nav.current_page, 2);

        // Advancing past the last page is rejected by the reducer
        let target = app.nav.current_page + 1;
        dispatch(&mut app, Action::PageClick(target));
        assert_eq!(app.nav.current_page, 2);
    }

    #[test]
    fn test_quit_effect_sets_flag() {
        let mut app = test_app();
        let mut should_quit = false;
        let effect = dispatch(&mut app, Action::Quit);
        handle_effect(&mut app, effect, &mut should_quit);
        assert!(should_quit);
    }
}
