//! Art gallery records.

use serde::Serialize;
use time::Date;
use time::macros::date;

use crate::Collection;
use crate::query::{Categorized, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub id: &'static str,
    pub title: &'static str,
    pub medium: &'static str,
    pub date_created: Date,
    pub description: &'static str,
    pub image_url: &'static str,
    pub thumbnail_url: &'static str,
    pub category: &'static [&'static str],
    pub tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<&'static str>,
}

impl Record for Artwork {
    const COLLECTION: Collection = Collection::Artworks;

    fn id(&self) -> &str {
        self.id
    }
}

impl Categorized for Artwork {
    fn categories(&self) -> &[&'static str] {
        self.category
    }
}

pub static ARTWORKS: &[Artwork] = &[
    Artwork {
        id: "neural-garden",
        title: "Neural Garden",
        medium: "Generative Art (p5.js)",
        date_created: date!(2024 - 06 - 15),
        description: "A procedurally generated garden using L-systems and Perlin noise. Each refresh creates a unique botanical composition.",
        image_url: "/images/art/neural-garden.jpg",
        thumbnail_url: "/images/art/neural-garden-thumb.jpg",
        category: &["generative", "digital"],
        tags: &["code", "nature", "algorithms", "p5js"],
        dimensions: Some("1920x1080"),
    },
    Artwork {
        id: "flow-field-study",
        title: "Flow Field Study #3",
        medium: "Generative Art (Processing)",
        date_created: date!(2024 - 05 - 20),
        description: "Particles following a Perlin noise flow field, with color gradients based on velocity and direction.",
        image_url: "/images/art/flow-field-3.jpg",
        thumbnail_url: "/images/art/flow-field-3-thumb.jpg",
        category: &["generative", "digital"],
        tags: &["particles", "noise", "flow-field"],
        dimensions: None,
    },
    Artwork {
        id: "kanji-decomposition",
        title: "木漏れ日 (Komorebi)",
        medium: "Digital Illustration",
        date_created: date!(2024 - 04 - 10),
        description: "Visual representation of the Japanese word for sunlight filtering through leaves. A piece exploring the intersection of language and visual art.",
        image_url: "/images/art/komorebi.jpg",
        thumbnail_url: "/images/art/komorebi-thumb.jpg",
        category: &["digital", "japanese"],
        tags: &["japanese", "nature", "light"],
        dimensions: None,
    },
    Artwork {
        id: "fractal-tree-winter",
        title: "Fractal Winter",
        medium: "Generative Art (JavaScript)",
        date_created: date!(2024 - 02 - 28),
        description: "Recursive tree structures with a winter color palette. Each branch follows the golden ratio in its subdivisions.",
        image_url: "/images/art/fractal-winter.jpg",
        thumbnail_url: "/images/art/fractal-winter-thumb.jpg",
        category: &["generative", "digital"],
        tags: &["fractals", "recursion", "trees", "math"],
        dimensions: None,
    },
    Artwork {
        id: "ink-mountains",
        title: "Ink Mountains",
        medium: "Traditional (Sumi Ink)",
        date_created: date!(2024 - 01 - 15),
        description: "Traditional Japanese sumi-e inspired mountain landscape. Exploring negative space and the beauty of simplicity.",
        image_url: "/images/art/ink-mountains.jpg",
        thumbnail_url: "/images/art/ink-mountains-thumb.jpg",
        category: &["traditional", "japanese"],
        tags: &["sumi-e", "mountains", "minimalist"],
        dimensions: Some("12x16 inches"),
    },
    Artwork {
        id: "cellular-automata-city",
        title: "Emergent City",
        medium: "Generative Art",
        date_created: date!(2023 - 11 - 20),
        description: "A cityscape generated using cellular automata rules. The buildings and structures emerge from simple local rules.",
        image_url: "/images/art/emergent-city.jpg",
        thumbnail_url: "/images/art/emergent-city-thumb.jpg",
        category: &["generative", "digital"],
        tags: &["cellular-automata", "architecture", "emergence"],
        dimensions: None,
    },
];
