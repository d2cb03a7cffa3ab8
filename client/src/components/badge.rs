//! Pill-shaped labels for tags, difficulty and status.

use content::{Difficulty, Status};
use leptos::prelude::*;

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

/// Color scheme of a [`Badge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Japanese,
    Art,
    Math,
    Difficulty(Difficulty),
    Status(Status),
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "tag tag--default",
            Self::Japanese => "tag tag-japanese",
            Self::Art => "tag tag-art",
            Self::Math => "tag tag-math",
            Self::Difficulty(Difficulty::Beginner) => "tag difficulty-beginner",
            Self::Difficulty(Difficulty::Intermediate) => "tag difficulty-intermediate",
            Self::Difficulty(Difficulty::Advanced) => "tag difficulty-advanced",
            Self::Status(Status::Current) => "tag status-current",
            Self::Status(Status::Paused) => "tag status-paused",
            Self::Status(Status::Past) => "tag status-past",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=variant.class()>{children()}</span> }
}

/// 🌱 / 🌿 / 🌳 difficulty label.
#[component]
pub fn DifficultyBadge(level: Difficulty) -> impl IntoView {
    view! { <Badge variant=BadgeVariant::Difficulty(level)>{level.label()}</Badge> }
}

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! { <Badge variant=BadgeVariant::Status(status)>{status.label()}</Badge> }
}

/// One default badge per tag, keeping at most `limit` when given.
#[component]
pub fn TagList(
    tags: &'static [&'static str],
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let shown = limit.map_or(tags.len(), |n| n.min(tags.len()));
    view! {
        <div class="tag-list">
            {tags[..shown].iter().map(move |tag| view! { <Badge variant=variant>{*tag}</Badge> }).collect_view()}
        </div>
    }
}
