//! Landing page navigation circles.
//!
//! Unlike the `/venn` diagrams these circles are links: each one routes to a
//! section of the site.

/// Radius shared by all three landing circles.
pub const RADIUS: i32 = 140;

/// SVG viewBox of the landing diagram.
pub const VIEW_BOX: &str = "0 0 800 600";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeCircle {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub glow_color: &'static str,
    pub route: &'static str,
    pub cx: i32,
    pub cy: i32,
    pub description: &'static str,
    /// Offset of the label from the circle center.
    pub label_offset: (i32, i32),
}

impl HomeCircle {
    #[must_use]
    pub fn label_position(&self) -> (i32, i32) {
        (self.cx + self.label_offset.0, self.cy + self.label_offset.1)
    }
}

pub static HOME_CIRCLES: &[HomeCircle] = &[
    HomeCircle {
        id: "japanese",
        label: "日本語",
        color: "#ef4444",
        glow_color: "rgba(239, 68, 68, 0.5)",
        route: "/japanese",
        cx: 300,
        cy: 220,
        description: "Language & Culture",
        label_offset: (-60, -20),
    },
    HomeCircle {
        id: "art",
        label: "Art",
        color: "#3b82f6",
        glow_color: "rgba(59, 130, 246, 0.5)",
        route: "/art",
        cx: 500,
        cy: 220,
        description: "Creative Expression",
        label_offset: (60, -20),
    },
    HomeCircle {
        id: "math",
        label: "Math",
        color: "#22c55e",
        glow_color: "rgba(34, 197, 94, 0.5)",
        route: "/proofs",
        cx: 400,
        cy: 380,
        description: "Elegant Proofs",
        label_offset: (0, 80),
    },
];

/// Quick links shown in the landing page corner.
pub static QUICK_LINKS: &[(&str, &str)] =
    &[("/hyperfixations", "Hyperfixations"), ("/venn", "Venn"), ("/youtube", "YouTube")];

#[must_use]
pub fn find_circle(id: &str) -> Option<&'static HomeCircle> {
    HOME_CIRCLES.iter().find(|c| c.id == id)
}
