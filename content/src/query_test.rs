use super::*;
use crate::{ARTWORKS, Artwork, PROOFS, VIDEOS, VideoEntry};

// =============================================================================
// category_options
// =============================================================================

#[test]
fn category_options_start_with_all_then_first_seen_order() {
    assert_eq!(category_options(ARTWORKS), vec!["All", "generative", "digital", "japanese", "traditional"]);
    assert_eq!(
        category_options(VIDEOS),
        vec!["All", "math", "science", "japanese", "language", "art", "code", "logic"]
    );
}

#[test]
fn category_options_of_empty_collection_is_just_all() {
    let empty: &[Artwork] = &[];
    assert_eq!(category_options(empty), vec![ALL_CATEGORY]);
}

// =============================================================================
// filter_by_category
// =============================================================================

#[test]
fn filter_all_returns_full_collection_in_order() {
    let filtered = filter_by_category(ARTWORKS, ALL_CATEGORY);
    assert_eq!(filtered.len(), ARTWORKS.len());
    for (got, want) in filtered.iter().zip(ARTWORKS) {
        assert_eq!(got.id, want.id);
    }
}

#[test]
fn filter_by_each_category_returns_exactly_matching_items() {
    fn check<T: Categorized + Record>(items: &[T]) {
        for category in category_options(items).into_iter().skip(1) {
            let filtered = filter_by_category(items, category);
            assert!(!filtered.is_empty(), "derived category {category} selects nothing");
            assert!(filtered.iter().all(|item| item.categories().contains(&category)));
            let expected = items.iter().filter(|item| item.categories().contains(&category)).count();
            assert_eq!(filtered.len(), expected);
        }
    }
    check(ARTWORKS);
    check(PROOFS);
    check(VIDEOS);
}

#[test]
fn filter_by_traditional_selects_ink_mountains_only() {
    let ids: Vec<_> = filter_by_category(ARTWORKS, "traditional").iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["ink-mountains"]);
}

#[test]
fn filter_by_unknown_category_is_empty() {
    assert!(filter_by_category(VIDEOS, "cooking").is_empty());
}

#[test]
fn filter_is_case_sensitive() {
    assert!(filter_by_category(VIDEOS, "Math").is_empty());
}

// =============================================================================
// find_by_id
// =============================================================================

#[test]
fn find_by_id_returns_matching_record() {
    let video: &VideoEntry = find_by_id(VIDEOS, "numberphile-godel").unwrap();
    assert_eq!(video.youtube_id, "O4ndIDcDSGc");
}

#[test]
fn find_by_id_reports_collection_on_miss() {
    let err = find_by_id(PROOFS, "riemann-hypothesis").expect_err("should miss");
    assert_eq!(err, ContentError::NotFound { collection: Collection::Proofs, id: "riemann-hypothesis".to_owned() });
}

#[test]
fn find_by_id_misses_on_empty_id() {
    assert!(find_by_id(ARTWORKS, "").is_err());
}
