//! # Page Component
//!
//! Turns one [`UnitPage`] view node into styled terminal lines, deriving
//! every visual cue (collapse markers, highlight, cursor) from the
//! navigation state — class-like state never flows the other way.
//!
//! Alongside the lines it produces the list of interactive rows: each
//! row pairs a line index with the gesture target that activating it
//! should fire. The event loop walks this list with a cursor, so the
//! mapping from "row under cursor" to "action" is a typed lookup.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::nav::{Highlight, NavState};
use crate::render::{
    ArticleView, ContentView, DialogueView, SUPPLEMENTARY_VOCAB_TITLE, SentenceView, UnitPage,
    VocabItem,
};

/// What activating a row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    Theme { unit: u32, theme: u32 },
    Part { unit: u32, theme: u32, part: u32 },
    Section { unit: u32, theme: u32, part: u32, section: usize },
    Audio(String),
}

#[derive(Debug, Clone)]
pub struct Row {
    pub line: usize,
    pub target: RowTarget,
}

/// Rendered page: lines to draw plus the interactive row list.
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub rows: Vec<Row>,
    /// Line index of the highlighted element, for scroll-into-view.
    pub highlight_line: Option<usize>,
}

const CONTENT_INDENT: &str = "      ";
const SECTION_INDENT: &str = "        ";

struct PageBuilder {
    lines: Vec<Line<'static>>,
    rows: Vec<Row>,
    highlight_line: Option<usize>,
    wrap_width: usize,
}

pub fn build_page(page: &UnitPage, nav: &NavState, width: u16) -> PageLayout {
    let mut b = PageBuilder {
        lines: Vec::new(),
        rows: Vec::new(),
        highlight_line: None,
        wrap_width: (width as usize).saturating_sub(CONTENT_INDENT.len()).max(20),
    };

    // Unit header
    let unit_highlighted = nav.highlight == Some(Highlight::Unit(page.unit_id));
    let header_style = if unit_highlighted {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    if unit_highlighted {
        b.highlight_line = Some(b.lines.len());
    }
    b.lines.push(Line::styled(
        format!("Unit {}: {}", page.unit_id, page.title),
        header_style,
    ));
    if let Some(ref subtitle) = page.subtitle {
        b.lines
            .push(Line::styled(subtitle.clone(), Style::default().fg(Color::DarkGray)));
    }
    b.lines.push(Line::default());

    for theme in &page.themes {
        let expanded = nav.is_theme_expanded(theme.unit_id, theme.theme_id);
        let marker = if expanded { "▾" } else { "▸" };
        b.rows.push(Row {
            line: b.lines.len(),
            target: RowTarget::Theme {
                unit: theme.unit_id,
                theme: theme.theme_id,
            },
        });
        b.lines.push(Line::styled(
            format!("{marker} Topic {} {}", theme.theme_id, theme.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));

        if !expanded {
            continue;
        }

        for part in &theme.parts {
            let part_path = (part.unit_id, part.theme_id, part.part_id);
            let part_open = nav.is_part_expanded(part_path.0, part_path.1, part_path.2);
            let part_highlighted =
                nav.highlight == Some(Highlight::Part(part_path.0, part_path.1, part_path.2));
            let marker = if part_open { "▾" } else { "▸" };
            let style = if part_highlighted {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            if part_highlighted {
                b.highlight_line = Some(b.lines.len());
            }
            b.rows.push(Row {
                line: b.lines.len(),
                target: RowTarget::Part {
                    unit: part_path.0,
                    theme: part_path.1,
                    part: part_path.2,
                },
            });
            b.lines.push(Line::styled(
                format!("  {marker} Part {} {}", part.part_id, part.title),
                style,
            ));

            if !part_open {
                continue;
            }

            match &part.content {
                ContentView::Sentences(sentences) => b.push_sentences(sentences, CONTENT_INDENT),
                ContentView::Dialogue(lines) => b.push_dialogue(lines, CONTENT_INDENT),
                ContentView::Article(article) => b.push_article(article),
                ContentView::VocabList { title, entries } => b.push_vocab(title, entries),
                ContentView::Sections(sections) => {
                    for (idx, section) in sections.iter().enumerate() {
                        let collapsed = nav.is_section_collapsed(
                            part_path.0,
                            part_path.1,
                            part_path.2,
                            idx,
                        );
                        let marker = if collapsed { "▸" } else { "▾" };
                        b.rows.push(Row {
                            line: b.lines.len(),
                            target: RowTarget::Section {
                                unit: part_path.0,
                                theme: part_path.1,
                                part: part_path.2,
                                section: idx,
                            },
                        });
                        b.lines.push(Line::styled(
                            format!("{CONTENT_INDENT}{marker} {}", section.title),
                            Style::default().fg(Color::Magenta),
                        ));
                        if collapsed {
                            continue;
                        }
                        match &section.content {
                            ContentView::Sentences(s) => b.push_sentences(s, SECTION_INDENT),
                            ContentView::Dialogue(d) => b.push_dialogue(d, SECTION_INDENT),
                            _ => {}
                        }
                    }
                }
                ContentView::Empty => {}
            }

            if !part.extra_vocab.is_empty() {
                b.push_vocab(SUPPLEMENTARY_VOCAB_TITLE, &part.extra_vocab);
            }
        }
    }

    // Unit footer
    b.lines.push(Line::default());
    b.lines.push(Line::styled(
        format!(
            "{} topics, {} parts in this unit",
            page.theme_count, page.part_count
        ),
        Style::default().fg(Color::DarkGray),
    ));

    PageLayout {
        lines: b.lines,
        rows: b.rows,
        highlight_line: b.highlight_line,
    }
}

impl PageBuilder {
    fn push_english_line(&mut self, text: String, indent: &str, audio: &Option<String>) {
        let mut spans = vec![Span::raw(format!("{indent}{text}"))];
        if let Some(src) = audio {
            self.rows.push(Row {
                line: self.lines.len(),
                target: RowTarget::Audio(src.clone()),
            });
            spans.push(Span::styled(" ♪", Style::default().fg(Color::Blue)));
        }
        self.lines.push(Line::from(spans));
    }

    fn push_translation(&mut self, text: &str, indent: &str) {
        for wrapped in textwrap::wrap(text, self.wrap_width) {
            self.lines.push(Line::styled(
                format!("{indent}{wrapped}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    fn push_sentences(&mut self, sentences: &[SentenceView], indent: &str) {
        for s in sentences {
            self.push_english_line(s.label.clone(), indent, &s.audio);
            self.push_translation(&s.chinese, indent);
        }
    }

    fn push_dialogue(&mut self, lines: &[DialogueView], indent: &str) {
        for d in lines {
            self.push_english_line(d.label.clone(), indent, &d.audio);
            self.push_translation(&d.translation, indent);
        }
    }

    fn push_article(&mut self, article: &ArticleView) {
        let first = textwrap::wrap(&article.english, self.wrap_width);
        for (i, wrapped) in first.iter().enumerate() {
            // Attach the audio marker to the first wrapped line only
            if i == 0 {
                self.push_english_line(wrapped.to_string(), CONTENT_INDENT, &article.audio);
            } else {
                self.lines
                    .push(Line::raw(format!("{CONTENT_INDENT}{wrapped}")));
            }
        }
        self.push_translation(&article.chinese, CONTENT_INDENT);
    }

    fn push_vocab(&mut self, title: &str, entries: &[VocabItem]) {
        self.lines.push(Line::styled(
            format!("{CONTENT_INDENT}{title}"),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        for entry in entries {
            let mut spans = vec![
                Span::raw(format!("{CONTENT_INDENT}  {}", entry.english)),
                Span::styled(
                    format!("  {}", entry.chinese),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if let Some(ref src) = entry.audio {
                self.rows.push(Row {
                    line: self.lines.len(),
                    target: RowTarget::Audio(src.clone()),
                });
                spans.push(Span::styled(" ♪", Style::default().fg(Color::Blue)));
            }
            self.lines.push(Line::from(spans));
        }
    }
}
