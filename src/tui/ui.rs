use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::state::App;
use crate::render::build_pages;
use crate::tui::TuiState;
use crate::tui::components::{JumpForm, Pagination, UnitNav, build_page};

const HELP_TEXT: &str = "↑↓ Move  Enter Toggle/Play  ←→ Page  u Units  g Jump  q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, pagination_area, main_area, status_area] = layout.areas(frame.area());

    // Title bar: app name + the live deep-link descriptor
    let title = if app.location.is_empty() {
        "Lingua".to_string()
    } else {
        format!("Lingua | {}", app.location)
    };
    frame.render_widget(
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );

    Pagination::new(&app.tree, app.nav.current_page).render(frame, pagination_area);

    draw_current_page(frame, main_area, app, tui);

    // Status bar: transient message wins over the key hints
    let (status, style) = if app.status_message.is_empty() {
        (HELP_TEXT.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (app.status_message.clone(), Style::default().fg(Color::Yellow))
    };
    frame.render_widget(Span::styled(status, style), status_area);

    // Overlays last, over everything else
    if let Some(ref form) = tui.jump_form {
        JumpForm::new(form).render(frame, frame.area());
    }
    if let Some(ref mut nav) = tui.unit_nav {
        UnitNav::new(nav).render(frame, frame.area());
    }
}

fn draw_current_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let Some(page) = tui.pages.get(app.nav.current_page.saturating_sub(1)) else {
        return;
    };
    let content_width = area.width.saturating_sub(1);

    let mut layout = build_page(page, &app.nav, content_width);

    // Cache the interactive rows for the event loop and clamp the cursor
    if tui.cursor >= layout.rows.len() {
        tui.cursor = layout.rows.len().saturating_sub(1);
    }

    // A focus change scrolls the highlighted element into view and moves
    // the cursor onto it
    if tui.follow_highlight {
        tui.follow_highlight = false;
        if let Some(line) = layout.highlight_line {
            tui.scroll_to_line = Some(line);
            if let Some(idx) = layout.rows.iter().position(|r| r.line == line) {
                tui.cursor = idx;
            }
        }
    }

    // Cursor row: reversed on top of whatever style the line carries
    if let Some(row) = layout.rows.get(tui.cursor) {
        let line = &mut layout.lines[row.line];
        line.style = line.style.add_modifier(Modifier::REVERSED);
    }

    let total_height = layout.lines.len() as u16;

    // Keep the requested line visible before rendering
    if let Some(target) = tui.scroll_to_line.take() {
        let target = target as u16;
        let offset = tui.scroll_state.offset().y;
        if target < offset {
            tui.scroll_state.set_offset(Position { x: 0, y: target });
        } else if area.height > 0 && target >= offset + area.height {
            tui.scroll_state.set_offset(Position {
                x: 0,
                y: target + 1 - area.height,
            });
        }
    }

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let paragraph = Paragraph::new(layout.lines.clone());
    scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, total_height));
    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);

    tui.rows = std::mem::take(&mut layout.rows);
}

/// Rebuild the cached view pages. Called once at startup; the tree is
/// read-only afterwards, so pages never go stale.
pub fn build_view(app: &App) -> Vec<crate::render::UnitPage> {
    build_pages(&app.tree)
}
