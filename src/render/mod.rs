//! # View Tree
//!
//! Pure transform from the curriculum to a nested view-node structure:
//! one page per unit, with theme and part nodes carrying stable compound
//! identifiers derived from the tree's own ids
//! (`unit-{u}`, `theme-{u}-{t}`, `part-{u}-{t}-{p}`).
//!
//! Per-part content is a pure function of the part type. Rendering has
//! no side effects — the TUI layer mounts the result and derives visual
//! styles from the navigation state.

use crate::content::{Curriculum, Part, PartBody, SectionBody, VocabEntry};

/// Title of the supplementary vocabulary block shown under non-vocabulary
/// parts that carry a word list.
pub const SUPPLEMENTARY_VOCAB_TITLE: &str = "New Words and Expressions";

#[derive(Debug, Clone)]
pub struct UnitPage {
    pub node_id: String,
    pub unit_id: u32,
    pub title: String,
    pub subtitle: Option<String>,
    pub themes: Vec<ThemeView>,
    /// Footer counts: themes in this unit, parts across all its themes.
    pub theme_count: usize,
    pub part_count: usize,
}

#[derive(Debug, Clone)]
pub struct ThemeView {
    pub node_id: String,
    pub unit_id: u32,
    pub theme_id: u32,
    pub title: String,
    pub parts: Vec<PartView>,
}

#[derive(Debug, Clone)]
pub struct PartView {
    pub node_id: String,
    pub unit_id: u32,
    pub theme_id: u32,
    pub part_id: u32,
    pub title: String,
    pub content: ContentView,
    /// Word list rendered under the main content; empty when the part's
    /// primary content already is the vocabulary list.
    pub extra_vocab: Vec<VocabItem>,
}

/// Typed content of a part (or of a conversation sub-section).
#[derive(Debug, Clone)]
pub enum ContentView {
    Sentences(Vec<SentenceView>),
    Dialogue(Vec<DialogueView>),
    Article(ArticleView),
    VocabList { title: String, entries: Vec<VocabItem> },
    Sections(Vec<SectionView>),
    /// Unrecognized part/section type: silent skip, not an error.
    Empty,
}

#[derive(Debug, Clone)]
pub struct SentenceView {
    /// Numbered English line, e.g. `1. Hello`.
    pub label: String,
    pub chinese: String,
    pub audio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DialogueView {
    /// Speaker-prefixed English line, e.g. `A: How are you?`.
    pub label: String,
    pub translation: String,
    pub audio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ArticleView {
    pub english: String,
    pub chinese: String,
    pub audio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VocabItem {
    pub english: String,
    pub chinese: String,
    pub audio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub title: String,
    /// Only `Sentences`, `Dialogue` or `Empty` — sections don't nest.
    pub content: ContentView,
}

/// Build the full view tree: exactly one page per unit, one theme view
/// per theme, one part view per part.
pub fn build_pages(tree: &Curriculum) -> Vec<UnitPage> {
    tree.units
        .iter()
        .map(|unit| UnitPage {
            node_id: format!("unit-{}", unit.id),
            unit_id: unit.id,
            title: unit.title.clone(),
            subtitle: unit.subtitle.clone(),
            themes: unit
                .themes
                .iter()
                .map(|theme| ThemeView {
                    node_id: format!("theme-{}-{}", unit.id, theme.id),
                    unit_id: unit.id,
                    theme_id: theme.id,
                    title: theme.title.clone(),
                    parts: theme
                        .parts
                        .iter()
                        .map(|part| build_part(unit.id, theme.id, part))
                        .collect(),
                })
                .collect(),
            theme_count: unit.themes.len(),
            part_count: unit.total_parts(),
        })
        .collect()
}

fn build_part(unit_id: u32, theme_id: u32, part: &Part) -> PartView {
    let content = match &part.body {
        PartBody::Numbered { sentences } => ContentView::Sentences(
            sentences
                .iter()
                .map(|s| SentenceView {
                    label: format!("{}. {}", s.id, s.english),
                    chinese: s.chinese.clone(),
                    audio: s.audio.clone(),
                })
                .collect(),
        ),
        PartBody::Dialogue { content } => ContentView::Dialogue(build_dialogue(content)),
        PartBody::Article { content } => ContentView::Article(ArticleView {
            english: content.english.clone(),
            chinese: content.chinese.clone(),
            audio: content.audio.clone(),
        }),
        PartBody::Vocabulary => ContentView::VocabList {
            title: part.title.clone(),
            entries: build_vocab(&part.vocabulary),
        },
        PartBody::ConversationSections { sections } => ContentView::Sections(
            sections
                .iter()
                .map(|section| SectionView {
                    title: section.title.clone(),
                    content: match &section.body {
                        SectionBody::Dialogue { content } => {
                            ContentView::Dialogue(build_dialogue(content))
                        }
                        SectionBody::Numbered { sentences } => ContentView::Sentences(
                            sentences
                                .iter()
                                .map(|s| SentenceView {
                                    label: format!("{}. {}", s.id, s.english),
                                    chinese: s.chinese.clone(),
                                    audio: s.audio.clone(),
                                })
                                .collect(),
                        ),
                        SectionBody::Unknown => ContentView::Empty,
                    },
                })
                .collect(),
        ),
        PartBody::Unknown => ContentView::Empty,
    };

    PartView {
        node_id: format!("part-{}-{}-{}", unit_id, theme_id, part.id),
        unit_id,
        theme_id,
        part_id: part.id,
        title: part.title.clone(),
        content,
        extra_vocab: build_vocab(part.supplementary_vocab()),
    }
}

fn build_dialogue(lines: &[crate::content::DialogueLine]) -> Vec<DialogueView> {
    lines
        .iter()
        .map(|line| DialogueView {
            label: format!("{}: {}", line.speaker, line.text),
            translation: line.translation.clone(),
            audio: line.audio.clone(),
        })
        .collect()
}

fn build_vocab(entries: &[VocabEntry]) -> Vec<VocabItem> {
    entries
        .iter()
        .map(|v| VocabItem {
            english: v.english.clone(),
            chinese: v.chinese.clone(),
            audio: v.audio.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Part, PartBody};
    use crate::test_support::{minimal_curriculum, sample_curriculum};

    #[test]
    fn test_one_page_per_unit_with_stable_ids() {
        let tree = sample_curriculum();
        let pages = build_pages(&tree);
        assert_eq!(pages.len(), tree.units.len());
        for (page, unit) in pages.iter().zip(&tree.units) {
            assert_eq!(page.node_id, format!("unit-{}", unit.id));
            assert_eq!(page.themes.len(), unit.themes.len());
            for (tv, theme) in page.themes.iter().zip(&unit.themes) {
                assert_eq!(tv.node_id, format!("theme-{}-{}", unit.id, theme.id));
                assert_eq!(tv.parts.len(), theme.parts.len());
                for (pv, part) in tv.parts.iter().zip(&theme.parts) {
                    assert_eq!(
                        pv.node_id,
                        format!("part-{}-{}-{}", unit.id, theme.id, part.id)
                    );
                }
            }
        }
    }

    #[test]
    fn test_numbered_sentence_labels() {
        let tree = minimal_curriculum();
        let pages = build_pages(&tree);
        let part = &pages[0].themes[0].parts[0];
        match &part.content {
            ContentView::Sentences(sentences) => {
                assert_eq!(sentences.len(), 1);
                assert_eq!(sentences[0].label, "1. Hello");
                assert_eq!(sentences[0].chinese, "你好");
            }
            other => panic!("expected sentences, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_part_type_renders_empty() {
        let mut tree = minimal_curriculum();
        tree.units[0].themes[0].parts.push(Part {
            id: 2,
            title: "Quiz".to_string(),
            body: PartBody::Unknown,
            vocabulary: vec![],
        });
        let pages = build_pages(&tree);
        let part = &pages[0].themes[0].parts[1];
        assert!(matches!(part.content, ContentView::Empty));
    }

    #[test]
    fn test_vocabulary_part_is_primary_without_extra_block() {
        let tree = sample_curriculum();
        let pages = build_pages(&tree);
        // Unit 1, theme 2, part 3 is the vocabulary part in the fixture
        let part = pages[0].themes[1]
            .parts
            .iter()
            .find(|p| matches!(p.content, ContentView::VocabList { .. }))
            .expect("fixture has a vocabulary part");
        match &part.content {
            ContentView::VocabList { title, entries } => {
                assert_eq!(title, &part.title);
                assert!(!entries.is_empty());
            }
            _ => unreachable!(),
        }
        assert!(part.extra_vocab.is_empty());
    }

    #[test]
    fn test_supplementary_vocab_on_dialogue_part() {
        let tree = sample_curriculum();
        let pages = build_pages(&tree);
        let part = pages[0].themes[0]
            .parts
            .iter()
            .find(|p| matches!(p.content, ContentView::Dialogue(_)))
            .expect("fixture has a dialogue part");
        assert_eq!(part.extra_vocab.len(), 1);
    }

    #[test]
    fn test_conversation_sections_render_recursively() {
        let tree = sample_curriculum();
        let pages = build_pages(&tree);
        let part = pages[1].themes[0]
            .parts
            .iter()
            .find(|p| matches!(p.content, ContentView::Sections(_)))
            .expect("fixture has a sections part");
        match &part.content {
            ContentView::Sections(sections) => {
                assert!(matches!(sections[0].content, ContentView::Dialogue(_)));
                assert!(matches!(sections[1].content, ContentView::Sentences(_)));
                // Unrecognized sub-section type: empty block, no error
                assert!(matches!(sections[2].content, ContentView::Empty));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_footer_counts() {
        let tree = sample_curriculum();
        let pages = build_pages(&tree);
        assert_eq!(pages[0].theme_count, 2);
        assert_eq!(pages[0].part_count, 5);
    }
}
