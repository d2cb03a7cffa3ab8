//! Authored Venn diagrams for the interactive `/venn` page.
//!
//! DESIGN
//! ======
//! Intersections are authored data, not geometry. The circle positions and
//! the central hit area are fixed pixel coordinates, and the item list shown
//! for `jp-art` or `all` is whatever was written here, regardless of how the
//! circles actually overlap on screen.

use serde::Serialize;

use crate::Collection;
use crate::query::Record;

/// Key of the intersection shared by all three circles.
pub const ALL_KEY: &str = "all";

/// Fallback swatch for an intersection member that names no circle.
const UNKNOWN_COLOR: &str = "#fff";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VennCircle {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VennIntersection {
    pub key: &'static str,
    pub label: &'static str,
    pub circle_ids: &'static [&'static str],
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VennDiagram {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub circles: [VennCircle; 3],
    pub intersections: &'static [VennIntersection],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Circle,
    Intersection,
}

/// What the details panel shows for a selected section key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    pub key: &'static str,
    pub kind: SectionKind,
    pub label: &'static str,
    /// One swatch for a circle, one per member circle for an intersection.
    pub colors: Vec<&'static str>,
    pub items: &'static [&'static str],
}

impl VennDiagram {
    #[must_use]
    pub fn circle(&self, id: &str) -> Option<&VennCircle> {
        self.circles.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn intersection(&self, key: &str) -> Option<&VennIntersection> {
        self.intersections.iter().find(|i| i.key == key)
    }

    /// Resolve a section key. Circle ids win over intersection keys.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<SectionView> {
        if let Some(circle) = self.circle(key) {
            return Some(SectionView {
                key: circle.id,
                kind: SectionKind::Circle,
                label: circle.label,
                colors: vec![circle.color],
                items: circle.items,
            });
        }
        let intersection = self.intersection(key)?;
        Some(SectionView {
            key: intersection.key,
            kind: SectionKind::Intersection,
            label: intersection.label,
            colors: self.member_colors(intersection),
            items: intersection.items,
        })
    }

    /// Colors of an intersection's member circles, in member order.
    #[must_use]
    pub fn member_colors(&self, intersection: &VennIntersection) -> Vec<&'static str> {
        intersection
            .circle_ids
            .iter()
            .map(|id| self.circle(id).map_or(UNKNOWN_COLOR, |c| c.color))
            .collect()
    }

    /// Every selectable key: circles first, then intersections.
    pub fn section_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.circles
            .iter()
            .map(|c| c.id)
            .chain(self.intersections.iter().map(|i| i.key))
    }
}

impl Record for VennDiagram {
    const COLLECTION: Collection = Collection::Venn;

    fn id(&self) -> &str {
        self.id
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// SVG viewBox of the `/venn` diagram.
pub const VIEW_BOX: &str = "0 0 500 450";
pub const CIRCLE_RADIUS: i32 = 110;

/// Centers for circle 0 (top left), 1 (top right), 2 (bottom center).
pub const CIRCLE_CENTERS: [(i32, i32); 3] = [(200, 170), (300, 170), (250, 280)];

/// Clickable area mapped to [`ALL_KEY`], plus its glyph.
pub const CENTER_HIT: (i32, i32, i32) = (250, 210, 30);

/// Label anchor for the circle at `index`, pushed away from the overlap.
#[must_use]
pub fn label_anchor(index: usize) -> (i32, i32) {
    let (cx, cy) = CIRCLE_CENTERS[index % CIRCLE_CENTERS.len()];
    match index {
        0 => (cx - 50, cy - 70),
        1 => (cx + 50, cy - 70),
        _ => (cx, cy + 70),
    }
}

// =============================================================================
// DATA
// =============================================================================

pub static VENN_DIAGRAMS: &[VennDiagram] = &[
    VennDiagram {
        id: "interests",
        title: "My Core Interests",
        description: "How Japanese, Art, and Math intersect in my life",
        circles: [
            VennCircle {
                id: "japanese",
                label: "Japanese",
                color: "#ef4444",
                items: &["Language study", "Anime/Manga", "Cultural traditions", "J-POP/J-Rock"],
            },
            VennCircle {
                id: "art",
                label: "Art",
                color: "#3b82f6",
                items: &["Digital illustration", "Photography", "Web design", "Traditional drawing"],
            },
            VennCircle {
                id: "math",
                label: "Math",
                color: "#22c55e",
                items: &["Number theory", "Topology", "Logic puzzles", "Proof writing"],
            },
        ],
        intersections: &[
            VennIntersection {
                key: "jp-art",
                label: "Japanese + Art",
                circle_ids: &["japanese", "art"],
                items: &["Sumi-e painting", "Anime art style", "Kanji calligraphy", "Ukiyo-e appreciation"],
            },
            VennIntersection {
                key: "jp-math",
                label: "Japanese + Math",
                circle_ids: &["japanese", "math"],
                items: &["Japanese counting systems", "Soroban (abacus)", "Mathematical kanji"],
            },
            VennIntersection {
                key: "art-math",
                label: "Art + Math",
                circle_ids: &["art", "math"],
                items: &["Generative art", "Fractals", "Golden ratio", "Geometric patterns", "Creative coding"],
            },
            VennIntersection {
                key: ALL_KEY,
                label: "All Three",
                circle_ids: &["japanese", "art", "math"],
                items: &["Tessellation patterns in Japanese art", "Algorithmic haiku generation"],
            },
        ],
    },
    VennDiagram {
        id: "skills",
        title: "Creative Skills",
        description: "Where code, design, and math combine",
        circles: [
            VennCircle {
                id: "code",
                label: "Code",
                color: "#8b5cf6",
                items: &["TypeScript/React", "Python", "Creative coding", "Shader programming"],
            },
            VennCircle {
                id: "design",
                label: "Design",
                color: "#ec4899",
                items: &["UI/UX", "Typography", "Color theory", "Motion design"],
            },
            VennCircle {
                id: "math",
                label: "Math",
                color: "#22c55e",
                items: &["Algorithms", "Linear algebra", "Statistics", "Discrete math"],
            },
        ],
        intersections: &[
            VennIntersection {
                key: "code-design",
                label: "Code + Design",
                circle_ids: &["code", "design"],
                items: &["Frontend development", "Interactive prototypes", "CSS animations"],
            },
            VennIntersection {
                key: "code-math",
                label: "Code + Math",
                circle_ids: &["code", "math"],
                items: &["Algorithm implementation", "Data structures", "Computational geometry"],
            },
            VennIntersection {
                key: "design-math",
                label: "Design + Math",
                circle_ids: &["design", "math"],
                items: &["Geometric design", "Grid systems", "Mathematical aesthetics"],
            },
            VennIntersection {
                key: ALL_KEY,
                label: "All Three",
                circle_ids: &["code", "design", "math"],
                items: &["Generative art tools", "Data visualization", "Procedural graphics"],
            },
        ],
    },
];

#[cfg(test)]
#[path = "venn_test.rs"]
mod venn_test;
