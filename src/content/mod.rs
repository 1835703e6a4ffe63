//! # Curriculum Data Model
//!
//! The in-memory representation of the loaded curriculum:
//! units → themes → parts, where each part carries one of five typed
//! content bodies. Pure data plus path-qualified lookups — no behavior
//! beyond navigation helpers, and read-only after load.
//!
//! Ids are unique only within their immediate parent, so every
//! cross-reference in the rest of the crate is qualified by the full
//! `(unit, theme, part)` path.

mod load;

pub use load::{LoadError, load_curriculum};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Curriculum {
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Unit {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub themes: Vec<Theme>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    pub id: u32,
    pub title: String,
    pub parts: Vec<Part>,
}

/// A typed content block within a theme.
///
/// The `vocabulary` list can appear alongside any body type. When the
/// body itself is `Vocabulary` it is the primary content; otherwise it
/// renders as a supplementary "New Words and Expressions" block.
#[derive(Debug, Clone)]
pub struct Part {
    pub id: u32,
    pub title: String,
    pub body: PartBody,
    pub vocabulary: Vec<VocabEntry>,
}

/// The five recognized part types, discriminated by the JSON `type` field.
///
/// Anything else lands in `Unknown` and renders as an empty content
/// block — the data is display-only, so unrecognized types degrade
/// quietly instead of failing the whole load.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PartBody {
    Numbered { sentences: Vec<Sentence> },
    Dialogue { content: Vec<DialogueLine> },
    Article { content: Passage },
    Vocabulary,
    ConversationSections { sections: Vec<Section> },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sentence {
    pub id: u32,
    pub english: String,
    pub chinese: String,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
    pub translation: String,
    #[serde(default)]
    pub audio: Option<String>,
}

/// A single bilingual passage (the `article` body).
#[derive(Debug, Clone, Deserialize)]
pub struct Passage {
    pub english: String,
    pub chinese: String,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabEntry {
    pub english: String,
    pub chinese: String,
    #[serde(default)]
    pub audio: Option<String>,
}

/// A named sub-section of a `conversation-sections` part.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionBody {
    Dialogue { content: Vec<DialogueLine> },
    Numbered { sentences: Vec<Sentence> },
    #[serde(other)]
    Unknown,
}

// Parts and sections with no `type` key at all render the same empty
// block as an unrecognized type, so the tag is defaulted before the
// tagged-enum dispatch instead of failing the whole load.

fn ensure_type_tag(value: &mut serde_json::Value) {
    if let Some(obj) = value.as_object_mut() {
        obj.entry("type")
            .or_insert_with(|| serde_json::Value::String(String::new()));
    }
}

#[derive(Deserialize)]
struct PartRepr {
    id: u32,
    title: String,
    #[serde(flatten)]
    body: PartBody,
    #[serde(default)]
    vocabulary: Vec<VocabEntry>,
}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        ensure_type_tag(&mut value);
        let repr: PartRepr = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(Part {
            id: repr.id,
            title: repr.title,
            body: repr.body,
            vocabulary: repr.vocabulary,
        })
    }
}

#[derive(Deserialize)]
struct SectionRepr {
    title: String,
    #[serde(flatten)]
    body: SectionBody,
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        ensure_type_tag(&mut value);
        let repr: SectionRepr = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(Section {
            title: repr.title,
            body: repr.body,
        })
    }
}

impl Curriculum {
    /// Number of pages (one page per unit).
    pub fn page_count(&self) -> usize {
        self.units.len()
    }

    /// Unit shown on the given 1-based page.
    pub fn unit_at_page(&self, page: usize) -> Option<&Unit> {
        page.checked_sub(1).and_then(|i| self.units.get(i))
    }

    /// 1-based page index of the unit with the given id.
    pub fn page_of_unit(&self, unit_id: u32) -> Option<usize> {
        self.units.iter().position(|u| u.id == unit_id).map(|i| i + 1)
    }

    pub fn unit(&self, unit_id: u32) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn theme(&self, unit_id: u32, theme_id: u32) -> Option<&Theme> {
        self.unit(unit_id)?.themes.iter().find(|t| t.id == theme_id)
    }

    pub fn part(&self, unit_id: u32, theme_id: u32, part_id: u32) -> Option<&Part> {
        self.theme(unit_id, theme_id)?
            .parts
            .iter()
            .find(|p| p.id == part_id)
    }

    /// Theme count for a unit id (0 when the unit doesn't exist).
    pub fn theme_count(&self, unit_id: u32) -> usize {
        self.unit(unit_id).map_or(0, |u| u.themes.len())
    }

    /// Part count for a `(unit, theme)` path (0 when either is missing).
    pub fn part_count(&self, unit_id: u32, theme_id: u32) -> usize {
        self.theme(unit_id, theme_id).map_or(0, |t| t.parts.len())
    }
}

impl Unit {
    /// Total part count across all themes, shown in the unit footer.
    pub fn total_parts(&self) -> usize {
        self.themes.iter().map(|t| t.parts.len()).sum()
    }
}

impl Part {
    /// The supplementary vocabulary block for this part.
    ///
    /// Empty when the part's primary content already is the vocabulary
    /// list, so the same entries are never rendered twice.
    pub fn supplementary_vocab(&self) -> &[VocabEntry] {
        match self.body {
            PartBody::Vocabulary => &[],
            _ => &self.vocabulary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_curriculum;

    #[test]
    fn test_parse_numbered_part() {
        let json = r#"{
            "id": 1,
            "title": "Greetings",
            "type": "numbered",
            "sentences": [
                {"id": 1, "english": "Hello", "chinese": "你好"},
                {"id": 2, "english": "Goodbye", "chinese": "再见", "audio": "a/2.mp3"}
            ]
        }"#;
        let part: Part = serde_json::from_str(json).unwrap();
        match part.body {
            PartBody::Numbered { ref sentences } => {
                assert_eq!(sentences.len(), 2);
                assert_eq!(sentences[0].english, "Hello");
                assert!(sentences[0].audio.is_none());
                assert_eq!(sentences[1].audio.as_deref(), Some("a/2.mp3"));
            }
            ref other => panic!("expected numbered body, got {:?}", other),
        }
        assert!(part.vocabulary.is_empty());
    }

    #[test]
    fn test_parse_dialogue_with_supplementary_vocab() {
        let json = r#"{
            "id": 2,
            "title": "At the market",
            "type": "dialogue",
            "content": [
                {"speaker": "A", "text": "How much?", "translation": "多少钱？"}
            ],
            "vocabulary": [
                {"english": "price", "chinese": "价格"}
            ]
        }"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert!(matches!(part.body, PartBody::Dialogue { .. }));
        assert_eq!(part.supplementary_vocab().len(), 1);
    }

    #[test]
    fn test_vocabulary_part_suppresses_supplementary_block() {
        let json = r#"{
            "id": 3,
            "title": "Word list",
            "type": "vocabulary",
            "vocabulary": [
                {"english": "apple", "chinese": "苹果"},
                {"english": "pear", "chinese": "梨"}
            ]
        }"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert!(matches!(part.body, PartBody::Vocabulary));
        assert_eq!(part.vocabulary.len(), 2);
        // Primary content, not a supplementary block
        assert!(part.supplementary_vocab().is_empty());
    }

    #[test]
    fn test_unknown_part_type_parses_as_unknown() {
        let json = r#"{"id": 4, "title": "Quiz time", "type": "quiz"}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert!(matches!(part.body, PartBody::Unknown));
    }

    #[test]
    fn test_part_without_type_parses_as_unknown() {
        let json = r#"{"id": 4, "title": "Untyped"}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert!(matches!(part.body, PartBody::Unknown));
        assert_eq!(part.title, "Untyped");
    }

    #[test]
    fn test_untyped_part_does_not_fail_surrounding_load() {
        let json = r#"{
            "units": [{
                "id": 1,
                "title": "Mixed",
                "themes": [{
                    "id": 1,
                    "title": "Theme",
                    "parts": [
                        {"id": 1, "title": "Untyped"},
                        {"id": 2, "title": "Sentences", "type": "numbered",
                         "sentences": [{"id": 1, "english": "Hi", "chinese": "嗨"}]}
                    ]
                }]
            }]
        }"#;
        let tree: Curriculum = serde_json::from_str(json).unwrap();
        let parts = &tree.units[0].themes[0].parts;
        assert!(matches!(parts[0].body, PartBody::Unknown));
        assert!(matches!(parts[1].body, PartBody::Numbered { .. }));
    }

    #[test]
    fn test_section_without_type_parses_as_unknown() {
        let json = r#"{"title": "Notes"}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert!(matches!(section.body, SectionBody::Unknown));
    }

    #[test]
    fn test_parse_conversation_sections() {
        let json = r#"{
            "id": 5,
            "title": "Conversations",
            "type": "conversation-sections",
            "sections": [
                {"title": "Warm up", "type": "numbered", "sentences": []},
                {"title": "Role play", "type": "dialogue", "content": []},
                {"title": "Mystery", "type": "puzzle"}
            ]
        }"#;
        let part: Part = serde_json::from_str(json).unwrap();
        match part.body {
            PartBody::ConversationSections { ref sections } => {
                assert_eq!(sections.len(), 3);
                assert!(matches!(sections[0].body, SectionBody::Numbered { .. }));
                assert!(matches!(sections[1].body, SectionBody::Dialogue { .. }));
                assert!(matches!(sections[2].body, SectionBody::Unknown));
            }
            ref other => panic!("expected sections body, got {:?}", other),
        }
    }

    #[test]
    fn test_page_lookups() {
        let tree = sample_curriculum();
        assert_eq!(tree.page_count(), 2);
        assert_eq!(tree.unit_at_page(1).unwrap().id, 1);
        assert_eq!(tree.unit_at_page(2).unwrap().id, 2);
        assert!(tree.unit_at_page(0).is_none());
        assert!(tree.unit_at_page(3).is_none());
        assert_eq!(tree.page_of_unit(2), Some(2));
        assert_eq!(tree.page_of_unit(99), None);
    }

    #[test]
    fn test_path_qualified_lookups() {
        let tree = sample_curriculum();
        assert!(tree.part(1, 1, 1).is_some());
        assert!(tree.part(1, 1, 99).is_none());
        assert!(tree.part(99, 1, 1).is_none());
        assert_eq!(tree.theme_count(1), 2);
        assert_eq!(tree.theme_count(99), 0);
        assert_eq!(tree.part_count(1, 1), 2);
        assert_eq!(tree.part_count(1, 99), 0);
    }

    #[test]
    fn test_unit_total_parts() {
        let tree = sample_curriculum();
        assert_eq!(tree.units[0].total_parts(), 5);
    }
}
