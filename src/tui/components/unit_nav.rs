//! # Unit Navigation Component
//!
//! Overlay listing every unit by id and title. Opened with `u`; picking
//! an entry focuses that unit. The TUI counterpart of the unit
//! navigation button strip.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::content::Curriculum;
use crate::tui::event::TuiEvent;

/// Events emitted by the unit navigation overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum UnitNavEvent {
    /// A unit was picked (by unit id, not page index).
    Select(u32),
    Dismiss,
}

/// Persistent state for the unit navigation overlay.
pub struct UnitNavState {
    pub entries: Vec<(u32, String)>,
    pub selected: usize,
    pub list_state: ListState,
}

impl UnitNavState {
    /// Build the entry list, pre-selecting the unit on the current page.
    pub fn new(tree: &Curriculum, current_page: usize) -> Self {
        let entries = tree
            .units
            .iter()
            .map(|u| (u.id, u.title.clone()))
            .collect::<Vec<_>>();
        let selected = current_page.saturating_sub(1).min(entries.len().saturating_sub(1));
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            entries,
            selected,
            list_state,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<UnitNavEvent> {
        match event {
            TuiEvent::Escape => Some(UnitNavEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .entries
                .get(self.selected)
                .map(|(id, _)| UnitNavEvent::Select(*id)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the unit navigation overlay.
pub struct UnitNav<'a> {
    state: &'a mut UnitNavState,
}

impl<'a> UnitNav<'a> {
    pub fn new(state: &'a mut UnitNavState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Units ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Open  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let inner_width = overlay.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, (id, title))| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let label = truncate_str(&format!("Unit {id}: {title}"), inner_width);
                ListItem::new(Line::styled(label, style))
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), overlay, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` terminal columns, adding
/// "..." if needed. Width-aware because titles mix ASCII and CJK.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_curriculum;

    #[test]
    fn test_preselects_current_page() {
        let tree = sample_curriculum();
        let nav = UnitNavState::new(&tree, 2);
        assert_eq!(nav.selected, 1);
        assert_eq!(nav.entries.len(), 2);
    }

    #[test]
    fn test_submit_selects_unit_id() {
        let tree = sample_curriculum();
        let mut nav = UnitNavState::new(&tree, 1);
        nav.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            nav.handle_event(&TuiEvent::Submit),
            Some(UnitNavEvent::Select(2))
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let tree = sample_curriculum();
        let mut nav = UnitNavState::new(&tree, 1);
        nav.handle_event(&TuiEvent::CursorUp);
        assert_eq!(nav.selected, 0);
        nav.handle_event(&TuiEvent::CursorDown);
        nav.handle_event(&TuiEvent::CursorDown);
        nav.handle_event(&TuiEvent::CursorDown);
        assert_eq!(nav.selected, 1);
    }

    #[test]
    fn test_truncate_is_width_aware() {
        assert_eq!(truncate_str("short", 20), "short");
        let truncated = truncate_str("单元一：日常问候语练习", 10);
        assert!(truncated.ends_with("..."));
        assert!(truncated.width() <= 10);
    }
}
