//! Curated videos with personal commentary.

use serde::Serialize;
use time::Date;
use time::macros::date;

use crate::Collection;
use crate::query::{Categorized, Record};

const EMBED_BASE: &str = "https://www.youtube.com/embed";
const WATCH_BASE: &str = "https://youtube.com/watch";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VideoTimestamp {
    /// `m:ss` or `mm:ss` offset into the video.
    pub time: &'static str,
    pub label: &'static str,
}

impl VideoTimestamp {
    /// Value of the `t` query parameter: `2:30` becomes `2m30s`.
    #[must_use]
    pub fn offset_param(&self) -> String {
        format!("{}s", self.time.replacen(':', "m", 1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub id: &'static str,
    pub youtube_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub commentary: &'static str,
    pub category: &'static [&'static str],
    #[serde(skip_serializing_if = "no_timestamps")]
    pub timestamps: &'static [VideoTimestamp],
    pub date_added: Date,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_timestamps(timestamps: &&[VideoTimestamp]) -> bool {
    timestamps.is_empty()
}

impl VideoEntry {
    /// Iframe source; only requested once the viewer asks for the video.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE}/{}?autoplay=1", self.youtube_id)
    }

    #[must_use]
    pub fn watch_url_at(&self, timestamp: &VideoTimestamp) -> String {
        format!("{WATCH_BASE}?v={}&t={}", self.youtube_id, timestamp.offset_param())
    }
}

impl Record for VideoEntry {
    const COLLECTION: Collection = Collection::Videos;

    fn id(&self) -> &str {
        self.id
    }
}

impl Categorized for VideoEntry {
    fn categories(&self) -> &[&'static str] {
        self.category
    }
}

pub static VIDEOS: &[VideoEntry] = &[
    VideoEntry {
        id: "veritasium-prime-numbers",
        youtube_id: "Y-sEH0RsHFQ",
        title: "Why Do Prime Numbers Make These Patterns?",
        description: "Veritasium explores the beautiful patterns that emerge when you plot prime numbers in specific ways.",
        commentary: "This video perfectly captures why I love math - there are patterns hiding everywhere, waiting to be discovered. The polar plot of primes is genuinely mind-blowing.",
        category: &["math", "science"],
        timestamps: &[
            VideoTimestamp { time: "2:30", label: "Ulam Spiral" },
            VideoTimestamp { time: "8:15", label: "Polar Coordinates" },
            VideoTimestamp { time: "12:40", label: "Modular Arithmetic" },
        ],
        date_added: date!(2024 - 05 - 15),
    },
    VideoEntry {
        id: "3blue1brown-euler",
        youtube_id: "mvmuCPvRoWQ",
        title: "e^(iπ) in 3.14 minutes",
        description: "3Blue1Brown explains Euler's identity in an intuitive visual way.",
        commentary: "Grant Sanderson's ability to make abstract math visual and intuitive is unmatched. This video made Euler's identity click for me in a way textbooks never could.",
        category: &["math"],
        timestamps: &[],
        date_added: date!(2024 - 04 - 20),
    },
    VideoEntry {
        id: "cure-dolly-japanese",
        youtube_id: "EuP7I8-OD9U",
        title: "Japanese From Scratch: Unlocking the Language",
        description: "Cure Dolly's revolutionary approach to understanding Japanese grammar organically.",
        commentary: "This series completely changed how I understand Japanese. Instead of memorizing arbitrary rules, you learn the actual logic behind the language. Essential viewing for any Japanese learner.",
        category: &["japanese", "language"],
        timestamps: &[
            VideoTimestamp { time: "1:00", label: "The は/が distinction" },
            VideoTimestamp { time: "5:30", label: "Core sentence structure" },
        ],
        date_added: date!(2024 - 03 - 10),
    },
    VideoEntry {
        id: "coding-train-perlin",
        youtube_id: "Qf4dIN99e2w",
        title: "Perlin Noise Flow Field",
        description: "The Coding Train creates beautiful particle flow fields using Perlin noise.",
        commentary: "Daniel Shiffman's enthusiasm is infectious. This tutorial sparked my interest in generative art and led me down a wonderful creative rabbit hole.",
        category: &["art", "code"],
        timestamps: &[],
        date_added: date!(2024 - 02 - 25),
    },
    VideoEntry {
        id: "numberphile-godel",
        youtube_id: "O4ndIDcDSGc",
        title: "Gödel's Incompleteness Theorem",
        description: "Numberphile explains the theorem that shook the foundations of mathematics.",
        commentary: "The idea that any consistent formal system is necessarily incomplete is both humbling and fascinating. This video makes Gödel's revolutionary work accessible.",
        category: &["math", "logic"],
        timestamps: &[
            VideoTimestamp { time: "3:20", label: "Gödel Numbering" },
            VideoTimestamp { time: "8:45", label: "Self-Reference" },
            VideoTimestamp { time: "12:00", label: "Implications" },
        ],
        date_added: date!(2024 - 01 - 15),
    },
];

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;
