//! Category filtering and id lookup shared by every collection page.
//!
//! DESIGN
//! ======
//! Filtering is a linear scan over a `'static` slice. The selection `"All"`
//! is not a category; it short-circuits to the full table in authored order.

use crate::{Collection, ContentError};

/// The pseudo-category that selects every record.
pub const ALL_CATEGORY: &str = "All";

/// A record addressable by a unique id within its collection.
pub trait Record {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

/// A record tagged with one or more categories.
pub trait Categorized {
    fn categories(&self) -> &[&'static str];
}

/// `"All"` followed by every distinct category in first-seen order.
#[must_use]
pub fn category_options<T: Categorized>(items: &[T]) -> Vec<&'static str> {
    let mut options = vec![ALL_CATEGORY];
    for category in items.iter().flat_map(Categorized::categories) {
        if !options.contains(category) {
            options.push(category);
        }
    }
    options
}

/// Records whose category list contains `selected`, or all records for `"All"`.
#[must_use]
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    if selected == ALL_CATEGORY {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.categories().contains(&selected))
        .collect()
}

/// Locate a record by id.
///
/// # Errors
///
/// Returns [`ContentError::NotFound`] when no record carries `id`.
pub fn find_by_id<'a, T: Record>(items: &'a [T], id: &str) -> Result<&'a T, ContentError> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| ContentError::NotFound { collection: T::COLLECTION, id: id.to_owned() })
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
