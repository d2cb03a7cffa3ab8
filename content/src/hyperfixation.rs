//! Hyperfixations: tracked personal interests with status and milestones.
//!
//! DESIGN
//! ======
//! Progress is derived on every call from the milestone list. There is no
//! stored percentage to drift out of sync with the authored milestones.

use serde::Serialize;
use time::Date;
use time::macros::date;

use crate::Collection;
use crate::query::Record;
use crate::text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Current,
    Paused,
    Past,
}

impl Status {
    /// Display order of the list page sections.
    pub const ORDER: [Self; 3] = [Self::Current, Self::Paused, Self::Past];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Paused => "paused",
            Self::Past => "past",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "🔥 Current",
            Self::Paused => "⏸️ Paused",
            Self::Past => "✅ Completed",
        }
    }

    /// Heading of the list page section holding this status.
    #[must_use]
    pub fn section_heading(self) -> &'static str {
        match self {
            Self::Current => "Currently Obsessed",
            Self::Paused => "On Hold",
            Self::Past => "Completed Adventures",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Link,
    Book,
    Video,
    Course,
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Book => "book",
            Self::Video => "video",
            Self::Course => "course",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Link => "🔗",
            Self::Book => "📖",
            Self::Video => "🎬",
            Self::Course => "🎓",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub title: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

/// Completed/total milestone counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn from_milestones(milestones: &[Milestone]) -> Self {
        Self { completed: milestones.iter().filter(|m| m.completed).count(), total: milestones.len() }
    }

    /// Whole percentage, rounded half up. An empty milestone list reports 0.
    #[must_use]
    pub fn percent(self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (200 * self.completed + self.total) / (2 * self.total)
    }

    /// Exact completed fraction in `[0, 1]`, used for bar widths.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hyperfixation {
    pub id: &'static str,
    pub title: &'static str,
    pub status: Status,
    pub start_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    pub description: &'static str,
    pub content: &'static str,
    pub resources: &'static [Resource],
    pub milestones: &'static [Milestone],
    pub tags: &'static [&'static str],
    pub emoji: &'static str,
}

impl Hyperfixation {
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_milestones(self.milestones)
    }

    /// Long-form content split into display paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        text::paragraphs(self.content)
    }
}

impl Record for Hyperfixation {
    const COLLECTION: Collection = Collection::Hyperfixations;

    fn id(&self) -> &str {
        self.id
    }
}

/// Entries with the given status, in authored order.
#[must_use]
pub fn with_status(items: &[Hyperfixation], status: Status) -> Vec<&Hyperfixation> {
    items.iter().filter(|h| h.status == status).collect()
}

pub static HYPERFIXATIONS: &[Hyperfixation] = &[
    Hyperfixation {
        id: "japanese-language",
        title: "Japanese Language",
        status: Status::Current,
        start_date: date!(2023 - 06 - 01),
        end_date: None,
        emoji: "🇯🇵",
        description: "Deep diving into Japanese language learning, from kanji to conversation.",
        content: "My journey into Japanese started with anime and manga, but it quickly became something more profound. The writing system alone - with its three scripts (hiragana, katakana, kanji) - is a fascinating puzzle.

Currently focusing on:
- JLPT N3 preparation
- Reading native materials (manga, light novels)
- Pitch accent and natural pronunciation
- Kanji etymology and radicals

The language reveals so much about the culture - concepts like 空気を読む (reading the air) or 木漏れ日 (sunlight filtering through leaves) show a different way of perceiving the world.",
        resources: &[
            Resource { kind: ResourceKind::Course, title: "WaniKani", url: "https://www.wanikani.com" },
            Resource { kind: ResourceKind::Book, title: "Genki Textbook Series", url: "https://genki3.japantimes.co.jp/en/" },
            Resource {
                kind: ResourceKind::Video,
                title: "Japanese Ammo with Misa",
                url: "https://www.youtube.com/c/JapaneseAmmowithMisa",
            },
        ],
        milestones: &[
            Milestone { title: "Learn Hiragana & Katakana", completed: true, date: Some(date!(2023 - 07 - 15)) },
            Milestone { title: "Complete Genki I", completed: true, date: Some(date!(2023 - 12 - 01)) },
            Milestone { title: "Learn 500 Kanji", completed: true, date: Some(date!(2024 - 03 - 15)) },
            Milestone { title: "Pass JLPT N4", completed: true, date: Some(date!(2024 - 07 - 01)) },
            Milestone { title: "Learn 1000 Kanji", completed: false, date: None },
            Milestone { title: "Pass JLPT N3", completed: false, date: None },
        ],
        tags: &["language", "japanese", "kanji", "jlpt"],
    },
    Hyperfixation {
        id: "generative-art",
        title: "Generative Art",
        status: Status::Current,
        start_date: date!(2024 - 01 - 15),
        end_date: None,
        emoji: "🎨",
        description: "Creating algorithmic art through code, exploring the intersection of mathematics and aesthetics.",
        content: "Generative art sits at the perfect intersection of my interests - it's mathematics made visual, logic transformed into beauty.

Exploring:
- Noise functions (Perlin, Simplex)
- Cellular automata
- L-systems and fractals
- Particle systems
- Shader programming

There's something magical about defining rules and letting emergence happen. The art creates itself, guided by algorithms.",
        resources: &[
            Resource { kind: ResourceKind::Book, title: "The Nature of Code", url: "https://natureofcode.com/" },
            Resource { kind: ResourceKind::Link, title: "Generative Artistry", url: "https://generativeartistry.com/" },
            Resource {
                kind: ResourceKind::Course,
                title: "Creative Coding with p5.js",
                url: "https://www.kadenze.com/courses/introduction-to-programming-for-the-visual-arts-with-p5-js",
            },
        ],
        milestones: &[
            Milestone { title: "Learn p5.js basics", completed: true, date: Some(date!(2024 - 02 - 01)) },
            Milestone { title: "Create 10 sketches", completed: true, date: Some(date!(2024 - 04 - 15)) },
            Milestone { title: "Learn GLSL shaders", completed: false, date: None },
            Milestone { title: "Create interactive installation", completed: false, date: None },
        ],
        tags: &["art", "code", "creative-coding", "algorithms"],
    },
    Hyperfixation {
        id: "proof-theory",
        title: "Mathematical Proof Theory",
        status: Status::Paused,
        start_date: date!(2023 - 09 - 01),
        end_date: Some(date!(2024 - 02 - 15)),
        emoji: "📐",
        description: "Studying the foundations of mathematical reasoning and formal proof systems.",
        content: "What does it mean to prove something? This question led me down a rabbit hole of logic, set theory, and metamathematics.

Topics explored:
- Propositional and predicate logic
- Natural deduction systems
- Gödel's incompleteness theorems
- Type theory basics

Paused to focus on Japanese, but planning to return to explore proof assistants like Lean or Coq.",
        resources: &[
            Resource {
                kind: ResourceKind::Book,
                title: "How to Prove It",
                url: "https://www.cambridge.org/highereducation/books/how-to-prove-it/6D2965D625C6836CD4A785A2C843B3DA",
            },
            Resource {
                kind: ResourceKind::Course,
                title: "Introduction to Logic",
                url: "https://www.coursera.org/learn/logic-introduction",
            },
        ],
        milestones: &[
            Milestone { title: "Complete propositional logic", completed: true, date: None },
            Milestone { title: "Understand Gödel's theorems", completed: true, date: None },
            Milestone { title: "Learn Lean/Coq", completed: false, date: None },
        ],
        tags: &["math", "logic", "foundations"],
    },
    Hyperfixation {
        id: "mechanical-keyboards",
        title: "Mechanical Keyboards",
        status: Status::Past,
        start_date: date!(2022 - 03 - 01),
        end_date: Some(date!(2023 - 05 - 15)),
        emoji: "⌨️",
        description: "The rabbit hole of custom mechanical keyboards, switches, and keycaps.",
        content: "What started as \"I need a better keyboard\" turned into soldering switches, designing layouts, and learning about group buys.

Built:
- 65% Alice-layout board
- 40% ortholinear daily driver
- Custom macropad

Learned about switch types, keycap profiles, plate materials, and the wonderful chaos of the community.",
        resources: &[
            Resource {
                kind: ResourceKind::Link,
                title: "r/MechanicalKeyboards",
                url: "https://reddit.com/r/MechanicalKeyboards",
            },
            Resource { kind: ResourceKind::Link, title: "QMK Firmware", url: "https://qmk.fm/" },
        ],
        milestones: &[
            Milestone { title: "Build first keyboard", completed: true, date: None },
            Milestone { title: "Try 10+ switch types", completed: true, date: None },
            Milestone { title: "Design custom PCB", completed: false, date: None },
        ],
        tags: &["hardware", "diy", "keyboards"],
    },
];

#[cfg(test)]
#[path = "hyperfixation_test.rs"]
mod hyperfixation_test;
