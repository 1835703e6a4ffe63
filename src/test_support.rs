//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::content::{
    Curriculum, DialogueLine, Part, PartBody, Passage, Section, SectionBody, Sentence, Theme,
    Unit, VocabEntry,
};
use crate::core::state::App;

fn sentence(id: u32, english: &str, chinese: &str, audio: Option<&str>) -> Sentence {
    Sentence {
        id,
        english: english.to_string(),
        chinese: chinese.to_string(),
        audio: audio.map(str::to_string),
    }
}

fn vocab(english: &str, chinese: &str, audio: Option<&str>) -> VocabEntry {
    VocabEntry {
        english: english.to_string(),
        chinese: chinese.to_string(),
        audio: audio.map(str::to_string),
    }
}

fn line(speaker: &str, text: &str, translation: &str) -> DialogueLine {
    DialogueLine {
        speaker: speaker.to_string(),
        text: text.to_string(),
        translation: translation.to_string(),
        audio: None,
    }
}

/// Two units covering every part type:
///
/// - Unit 1 (2 themes, 5 parts): numbered, dialogue (+ supplementary
///   vocab), article, numbered, vocabulary.
/// - Unit 2 (1 theme, 1 part): conversation-sections with dialogue,
///   numbered and unrecognized sub-sections.
pub fn sample_curriculum() -> Curriculum {
    Curriculum {
        units: vec![
            Unit {
                id: 1,
                title: "Everyday Greetings".to_string(),
                subtitle: Some("Saying hello and goodbye".to_string()),
                themes: vec![
                    Theme {
                        id: 1,
                        title: "First Meetings".to_string(),
                        parts: vec![
                            Part {
                                id: 1,
                                title: "Key Sentences".to_string(),
                                body: PartBody::Numbered {
                                    sentences: vec![
                                        sentence(1, "Hello", "你好", None),
                                        sentence(2, "How are you?", "你好吗？", Some("audio/u1t1p1s2.mp3")),
                                    ],
                                },
                                vocabulary: vec![],
                            },
                            Part {
                                id: 2,
                                title: "A Short Exchange".to_string(),
                                body: PartBody::Dialogue {
                                    content: vec![
                                        line("A", "Good morning!", "早上好！"),
                                        line("B", "Morning! Nice to meet you.", "早！很高兴认识你。"),
                                    ],
                                },
                                vocabulary: vec![vocab("morning", "早上", Some("audio/morning.mp3"))],
                            },
                        ],
                    },
                    Theme {
                        id: 2,
                        title: "Introductions".to_string(),
                        parts: vec![
                            Part {
                                id: 1,
                                title: "About Myself".to_string(),
                                body: PartBody::Article {
                                    content: Passage {
                                        english: "My name is Li Hua. I am a student.".to_string(),
                                        chinese: "我叫李华。我是学生。".to_string(),
                                        audio: None,
                                    },
                                },
                                vocabulary: vec![],
                            },
                            Part {
                                id: 2,
                                title: "Practice Sentences".to_string(),
                                body: PartBody::Numbered {
                                    sentences: vec![sentence(1, "What is your name?", "你叫什么名字？", None)],
                                },
                                vocabulary: vec![],
                            },
                            Part {
                                id: 3,
                                title: "Word List".to_string(),
                                body: PartBody::Vocabulary,
                                vocabulary: vec![
                                    vocab("name", "名字", Some("audio/name.mp3")),
                                    vocab("student", "学生", None),
                                ],
                            },
                        ],
                    },
                ],
            },
            Unit {
                id: 2,
                title: "At the Restaurant".to_string(),
                subtitle: None,
                themes: vec![Theme {
                    id: 1,
                    title: "Ordering Food".to_string(),
                    parts: vec![Part {
                        id: 1,
                        title: "Conversations".to_string(),
                        body: PartBody::ConversationSections {
                            sections: vec![
                                Section {
                                    title: "Getting a Table".to_string(),
                                    body: SectionBody::Dialogue {
                                        content: vec![line("Waiter", "A table for two?", "两位吗？")],
                                    },
                                },
                                Section {
                                    title: "Useful Phrases".to_string(),
                                    body: SectionBody::Numbered {
                                        sentences: vec![sentence(1, "The bill, please.", "请结账。", None)],
                                    },
                                },
                                Section {
                                    title: "Listening Quiz".to_string(),
                                    body: SectionBody::Unknown,
                                },
                            ],
                        },
                        vocabulary: vec![],
                    }],
                }],
            },
        ],
    }
}

/// The two-unit tree from the smallest end-to-end scenario: unit 1 /
/// theme 1 / part 1 is `numbered` with the single sentence "Hello".
pub fn minimal_curriculum() -> Curriculum {
    Curriculum {
        units: vec![
            Unit {
                id: 1,
                title: "Unit One".to_string(),
                subtitle: None,
                themes: vec![Theme {
                    id: 1,
                    title: "Theme One".to_string(),
                    parts: vec![Part {
                        id: 1,
                        title: "Part One".to_string(),
                        body: PartBody::Numbered {
                            sentences: vec![sentence(1, "Hello", "你好", None)],
                        },
                        vocabulary: vec![],
                    }],
                }],
            },
            Unit {
                id: 2,
                title: "Unit Two".to_string(),
                subtitle: None,
                themes: vec![Theme {
                    id: 1,
                    title: "Theme One".to_string(),
                    parts: vec![],
                }],
            },
        ],
    }
}

/// Creates a test App over the sample curriculum.
pub fn test_app() -> App {
    App::new(sample_curriculum(), "mpv".to_string())
}
