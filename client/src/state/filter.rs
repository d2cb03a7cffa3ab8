//! Category filter selection shared by the Art, Proofs and YouTube pages.

use content::query::{ALL_CATEGORY, Categorized, category_options, filter_by_category};
use content::text::capitalize;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter bar options for one collection plus the active choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    options: Vec<&'static str>,
    selected: &'static str,
}

impl CategoryFilter {
    /// Options derived from `items`, starting on `"All"`.
    pub fn new<T: Categorized>(items: &[T]) -> Self {
        Self { options: category_options(items), selected: ALL_CATEGORY }
    }

    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected == option
    }

    /// Switch to `option`. Values outside the option list are ignored.
    pub fn select(&mut self, option: &str) {
        if let Some(found) = self.options.iter().find(|o| **o == option) {
            self.selected = *found;
        }
    }

    /// The visible subset of `items` under the current selection.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_by_category(items, self.selected)
    }

    /// The "no results" message shows exactly when nothing in `items` passes.
    pub fn shows_empty_state<T: Categorized>(&self, items: &[T]) -> bool {
        self.apply(items).is_empty()
    }
}

/// Button text for a filter option: `generative` shows as `Generative`.
pub fn option_label(option: &str) -> String {
    capitalize(option)
}
