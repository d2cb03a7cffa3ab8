//! Tables behind the `/japanese` page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JlptStatus {
    Completed,
    Current,
    Future,
}

impl JlptStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Future => "future",
        }
    }

    /// Caption under the level, if the status has one.
    #[must_use]
    pub fn caption(self) -> Option<&'static str> {
        match self {
            Self::Completed => Some("✓ Passed"),
            Self::Current => Some("Current Goal"),
            Self::Future => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JlptLevel {
    pub level: &'static str,
    pub status: JlptStatus,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FavoriteWord {
    pub word: &'static str,
    pub reading: &'static str,
    pub meaning: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LearningResource {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceGroup {
    pub category: &'static str,
    pub items: &'static [LearningResource],
}

/// Hyperfixation the page's call-to-action links to.
pub const HYPERFIXATION_ID: &str = "japanese-language";

pub static JLPT_LEVELS: &[JlptLevel] = &[
    JlptLevel { level: "N5", status: JlptStatus::Completed, description: "Basic vocabulary and grammar" },
    JlptLevel { level: "N4", status: JlptStatus::Completed, description: "Elementary level" },
    JlptLevel { level: "N3", status: JlptStatus::Current, description: "Intermediate level" },
    JlptLevel { level: "N2", status: JlptStatus::Future, description: "Upper intermediate" },
    JlptLevel { level: "N1", status: JlptStatus::Future, description: "Advanced level" },
];

pub static RESOURCE_GROUPS: &[ResourceGroup] = &[
    ResourceGroup {
        category: "Kanji",
        items: &[
            LearningResource { name: "WaniKani", url: "https://www.wanikani.com", description: "SRS-based kanji learning" },
            LearningResource { name: "Kanji Koohii", url: "https://kanji.koohii.com", description: "RTK with stories" },
        ],
    },
    ResourceGroup {
        category: "Grammar",
        items: &[
            LearningResource {
                name: "Cure Dolly",
                url: "https://www.youtube.com/c/CureDolly",
                description: "Organic Japanese approach",
            },
            LearningResource { name: "Tae Kim", url: "https://guidetojapanese.org", description: "Free grammar guide" },
        ],
    },
    ResourceGroup {
        category: "Practice",
        items: &[
            LearningResource { name: "Anki", url: "https://apps.ankiweb.net", description: "Spaced repetition flashcards" },
            LearningResource { name: "Bunpro", url: "https://bunpro.jp", description: "Grammar SRS system" },
        ],
    },
    ResourceGroup {
        category: "Immersion",
        items: &[
            LearningResource {
                name: "Satori Reader",
                url: "https://www.satorireader.com",
                description: "Graded reading practice",
            },
            LearningResource {
                name: "Comprehensible Japanese",
                url: "https://www.youtube.com/c/ComprehensibleJapanese",
                description: "Input-based learning",
            },
        ],
    },
];

pub static FAVORITE_WORDS: &[FavoriteWord] = &[
    FavoriteWord {
        word: "木漏れ日",
        reading: "こもれび",
        meaning: "Sunlight filtering through leaves",
        note: "A word that captures a moment of natural beauty",
    },
    FavoriteWord {
        word: "侘び寂び",
        reading: "わびさび",
        meaning: "The beauty of imperfection and transience",
        note: "An aesthetic philosophy I deeply resonate with",
    },
    FavoriteWord {
        word: "生きがい",
        reading: "いきがい",
        meaning: "Reason for living, purpose",
        note: "What drives you to get up in the morning",
    },
    FavoriteWord {
        word: "懐かしい",
        reading: "なつかしい",
        meaning: "Nostalgic, fondly remembered",
        note: "That bittersweet feeling of happy memories",
    },
    FavoriteWord {
        word: "切ない",
        reading: "せつない",
        meaning: "A painful longing, heartache",
        note: "When something is beautiful but sad",
    },
];
