//! Literal content tables and the pure queries the site renders from.
//!
//! This crate is UI-framework agnostic: the Leptos client renders from it and
//! the server exposes it as read-only JSON. Every record is `'static` data
//! compiled into the binary; nothing here allocates a record or mutates one.

pub mod artwork;
pub mod dates;
pub mod home;
pub mod hyperfixation;
pub mod japanese;
pub mod proof;
pub mod query;
pub mod text;
pub mod venn;
pub mod video;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use artwork::{ARTWORKS, Artwork};
pub use hyperfixation::{HYPERFIXATIONS, Hyperfixation, Milestone, Progress, Resource, ResourceKind, Status};
pub use proof::{Difficulty, PROOFS, Proof};
pub use query::{ALL_CATEGORY, Categorized, Record, category_options, filter_by_category, find_by_id};
pub use venn::{SectionKind, SectionView, VENN_DIAGRAMS, VennCircle, VennDiagram, VennIntersection};
pub use video::{VIDEOS, VideoEntry, VideoTimestamp};

/// Error returned by content lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// No record in `collection` carries the requested id.
    #[error("no {collection} record with id '{id}'")]
    NotFound { collection: Collection, id: String },
    /// The collection name does not match any content table.
    #[error("unknown content collection: {0}")]
    UnknownCollection(String),
}

/// The content tables addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Artworks,
    Proofs,
    Hyperfixations,
    Videos,
    Venn,
}

impl Collection {
    pub const ALL: [Self; 5] = [Self::Artworks, Self::Proofs, Self::Hyperfixations, Self::Videos, Self::Venn];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artworks => "artworks",
            Self::Proofs => "proofs",
            Self::Hyperfixations => "hyperfixations",
            Self::Videos => "videos",
            Self::Venn => "venn",
        }
    }

    /// Number of records in the collection's table.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::Artworks => ARTWORKS.len(),
            Self::Proofs => PROOFS.len(),
            Self::Hyperfixations => HYPERFIXATIONS.len(),
            Self::Videos => VIDEOS.len(),
            Self::Venn => VENN_DIAGRAMS.len(),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ContentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == raw)
            .ok_or_else(|| ContentError::UnknownCollection(raw.to_owned()))
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
