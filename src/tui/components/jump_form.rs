//! # Jump Form Component
//!
//! Overlay for jumping straight to a unit / topic / part by number.
//! Opened with `g`, dismissed with Esc.
//!
//! Owns the cascading bound-update: editing the unit field re-derives
//! the valid topic range from the tree (and the part range from the
//! unit's first theme); editing the topic field re-derives the part
//! range. Both resets put the dependent value back to 1. These are pure
//! derived-range lookups — nothing here mutates navigation state; the
//! submitted values are validated by the action reducer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `JumpFormState` lives in `TuiState`
//! - `JumpForm` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::content::Curriculum;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpField {
    Unit,
    Topic,
    Part,
}

impl JumpField {
    fn next(self) -> Self {
        match self {
            JumpField::Unit => JumpField::Topic,
            JumpField::Topic => JumpField::Part,
            JumpField::Part => JumpField::Unit,
        }
    }

    fn prev(self) -> Self {
        match self {
            JumpField::Unit => JumpField::Part,
            JumpField::Topic => JumpField::Unit,
            JumpField::Part => JumpField::Topic,
        }
    }
}

/// Events emitted by the jump form.
#[derive(Debug, PartialEq, Eq)]
pub enum JumpFormEvent {
    /// Submitted field values. `unit` is unvalidated here — range
    /// checking is the reducer's job; zero/empty topic and part are
    /// treated as absent.
    Submit {
        unit: u32,
        topic: Option<u32>,
        part: Option<u32>,
    },
    Dismiss,
}

/// Persistent state for the jump-form overlay.
pub struct JumpFormState {
    pub unit: String,
    pub topic: String,
    pub part: String,
    pub field: JumpField,
    pub unit_max: usize,
    pub topic_max: usize,
    pub part_max: usize,
}

impl JumpFormState {
    pub fn new(tree: &Curriculum) -> Self {
        let mut state = Self {
            unit: "1".to_string(),
            topic: "1".to_string(),
            part: "1".to_string(),
            field: JumpField::Unit,
            unit_max: tree.page_count(),
            topic_max: 0,
            part_max: 0,
        };
        state.recompute_unit_caps(tree);
        state
    }

    /// Unit changed: topic range from the unit, part range from its
    /// first theme, dependent values reset to 1.
    fn recompute_unit_caps(&mut self, tree: &Curriculum) {
        let unit_id = parse_field(&self.unit).unwrap_or(0);
        self.topic_max = tree.theme_count(unit_id);
        self.topic = "1".to_string();
        self.part_max = tree
            .unit(unit_id)
            .and_then(|u| u.themes.first())
            .map_or(0, |t| t.parts.len());
        self.part = "1".to_string();
    }

    /// Topic changed: part range from the `(unit, topic)` path, part
    /// value reset to 1.
    fn recompute_topic_caps(&mut self, tree: &Curriculum) {
        let unit_id = parse_field(&self.unit).unwrap_or(0);
        let topic_id = parse_field(&self.topic).unwrap_or(0);
        self.part_max = tree.part_count(unit_id, topic_id);
        self.part = "1".to_string();
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            JumpField::Unit => &mut self.unit,
            JumpField::Topic => &mut self.topic,
            JumpField::Part => &mut self.part,
        }
    }

    fn cascade(&mut self, tree: &Curriculum) {
        match self.field {
            JumpField::Unit => self.recompute_unit_caps(tree),
            JumpField::Topic => self.recompute_topic_caps(tree),
            JumpField::Part => {}
        }
    }

    /// Handle a key event, returning a JumpFormEvent when the overlay
    /// should act.
    pub fn handle_event(&mut self, event: &TuiEvent, tree: &Curriculum) -> Option<JumpFormEvent> {
        match event {
            TuiEvent::Escape => Some(JumpFormEvent::Dismiss),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.field = self.field.next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.field = self.field.prev();
                None
            }
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                let buffer = self.active_buffer();
                if buffer.len() < 4 {
                    buffer.push(*c);
                }
                self.cascade(tree);
                None
            }
            TuiEvent::Backspace => {
                self.active_buffer().pop();
                self.cascade(tree);
                None
            }
            TuiEvent::Submit => Some(JumpFormEvent::Submit {
                unit: parse_field(&self.unit).unwrap_or(0),
                topic: parse_field(&self.topic).filter(|v| *v > 0),
                part: parse_field(&self.part).filter(|v| *v > 0),
            }),
            _ => None,
        }
    }
}

fn parse_field(buffer: &str) -> Option<u32> {
    buffer.parse().ok()
}

/// Transient render wrapper for the jump-form overlay.
pub struct JumpForm<'a> {
    state: &'a JumpFormState,
}

impl<'a> JumpForm<'a> {
    pub fn new(state: &'a JumpFormState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(44, 9, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Jump to ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Tab Next  Enter Go  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let rows = [
            ("Unit", &self.state.unit, self.state.unit_max, JumpField::Unit),
            ("Topic", &self.state.topic, self.state.topic_max, JumpField::Topic),
            ("Part", &self.state.part, self.state.part_max, JumpField::Part),
        ];

        let mut lines = Vec::with_capacity(rows.len());
        for (label, value, max, field) in rows {
            let value_style = if self.state.field == field {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{label:<6}")),
                Span::styled(format!("[{value:>4}]"), value_style),
                Span::styled(
                    format!("  (1-{max})"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

/// Compute a centered rect with fixed dimensions, clamped to the outer
/// rect.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_curriculum;

    #[test]
    fn test_new_seeds_caps_from_first_unit() {
        let tree = sample_curriculum();
        let form = JumpFormState::new(&tree);
        assert_eq!(form.unit_max, 2);
        assert_eq!(form.topic_max, 2); // unit 1 has 2 themes
        assert_eq!(form.part_max, 2); // first theme has 2 parts
        assert_eq!(form.unit, "1");
    }

    #[test]
    fn test_unit_edit_cascades_both_caps() {
        let tree = sample_curriculum();
        let mut form = JumpFormState::new(&tree);
        form.handle_event(&TuiEvent::Backspace, &tree);
        form.handle_event(&TuiEvent::InputChar('2'), &tree);
        assert_eq!(form.topic_max, 1); // unit 2 has 1 theme
        assert_eq!(form.part_max, 1);
        assert_eq!(form.topic, "1");
        assert_eq!(form.part, "1");
    }

    #[test]
    fn test_topic_edit_cascades_part_cap_and_resets_value() {
        let tree = sample_curriculum();
        let mut form = JumpFormState::new(&tree);
        form.handle_event(&TuiEvent::Tab, &tree);
        assert_eq!(form.field, JumpField::Topic);
        form.handle_event(&TuiEvent::Backspace, &tree);
        form.handle_event(&TuiEvent::InputChar('2'), &tree);
        assert_eq!(form.part_max, 3); // unit 1 theme 2 has 3 parts
        assert_eq!(form.part, "1");
    }

    #[test]
    fn test_submit_reports_field_values() {
        let tree = sample_curriculum();
        let mut form = JumpFormState::new(&tree);
        let event = form.handle_event(&TuiEvent::Submit, &tree);
        assert_eq!(
            event,
            Some(JumpFormEvent::Submit {
                unit: 1,
                topic: Some(1),
                part: Some(1),
            })
        );
    }

    #[test]
    fn test_submit_with_empty_unit_reports_zero() {
        let tree = sample_curriculum();
        let mut form = JumpFormState::new(&tree);
        form.handle_event(&TuiEvent::Backspace, &tree);
        let event = form.handle_event(&TuiEvent::Submit, &tree);
        // Zero fails the reducer's [1, N] validation downstream
        assert!(matches!(
            event,
            Some(JumpFormEvent::Submit { unit: 0, .. })
        ));
    }

    #[test]
    fn test_escape_dismisses() {
        let tree = sample_curriculum();
        let mut form = JumpFormState::new(&tree);
        assert_eq!(
            form.handle_event(&TuiEvent::Escape, &tree),
            Some(JumpFormEvent::Dismiss)
        );
    }
}
