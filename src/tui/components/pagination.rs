//! # Pagination Component
//!
//! One button per unit, active page reversed. Stateless — receives the
//! unit list and current page as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Curriculum;

pub struct Pagination<'a> {
    tree: &'a Curriculum,
    current_page: usize,
}

impl<'a> Pagination<'a> {
    pub fn new(tree: &'a Curriculum, current_page: usize) -> Self {
        Self { tree, current_page }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.tree.units.len() * 2);
        for (index, unit) in self.tree.units.iter().enumerate() {
            let page = index + 1;
            let style = if page == self.current_page {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" Unit {} ", unit.id), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_curriculum;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_one_button_per_unit() {
        let tree = sample_curriculum();
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Pagination::new(&tree, 2).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let row: String = (0..40)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Unit 1"));
        assert!(row.contains("Unit 2"));
    }
}
