use super::*;
use content::{ARTWORKS, PROOFS, VIDEOS};

#[test]
fn starts_on_all_with_full_table() {
    let filter = CategoryFilter::new(ARTWORKS);
    assert_eq!(filter.selected(), "All");
    assert!(filter.is_selected("All"));
    assert_eq!(filter.apply(ARTWORKS).len(), ARTWORKS.len());
}

#[test]
fn selecting_a_category_narrows_the_view() {
    let mut filter = CategoryFilter::new(VIDEOS);
    filter.select("japanese");
    let ids: Vec<_> = filter.apply(VIDEOS).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec!["cure-dolly-japanese"]);
}

#[test]
fn unknown_option_keeps_current_selection() {
    let mut filter = CategoryFilter::new(ARTWORKS);
    filter.select("digital");
    filter.select("sculpture");
    assert_eq!(filter.selected(), "digital");
}

#[test]
fn back_to_all_restores_order() {
    let mut filter = CategoryFilter::new(PROOFS);
    filter.select("logic");
    assert_eq!(filter.apply(PROOFS).len(), 1);
    filter.select("All");
    let ids: Vec<_> = filter.apply(PROOFS).iter().map(|p| p.id).collect();
    let expected: Vec<_> = PROOFS.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn proof_options_follow_first_seen_order() {
    let filter = CategoryFilter::new(PROOFS);
    assert_eq!(
        filter.options(),
        &["All", "number-theory", "set-theory", "algebra", "topology", "computer-science", "logic"]
    );
}

#[test]
fn option_labels_capitalize() {
    assert_eq!(option_label("All"), "All");
    assert_eq!(option_label("number-theory"), "Number-theory");
}

// =============================================================================
// shows_empty_state
// =============================================================================

struct Tagged(&'static [&'static str]);

impl Categorized for Tagged {
    fn categories(&self) -> &[&'static str] {
        self.0
    }
}

#[test]
fn empty_state_hidden_while_anything_matches() {
    let mut filter = CategoryFilter::new(VIDEOS);
    assert!(!filter.shows_empty_state(VIDEOS));
    filter.select("logic");
    assert!(!filter.shows_empty_state(VIDEOS));
}

#[test]
fn empty_state_shown_when_selection_matches_nothing() {
    let items = [Tagged(&["ink"]), Tagged(&["oil", "ink"])];
    let mut filter = CategoryFilter::new(&items);
    filter.select("oil");

    let remaining = [Tagged(&["ink"])];
    assert!(filter.apply(&remaining).is_empty());
    assert!(filter.shows_empty_state(&remaining));
}

#[test]
fn empty_state_shown_for_an_empty_table_even_on_all() {
    let items: [Tagged; 0] = [];
    let filter = CategoryFilter::new(&items);
    assert!(filter.shows_empty_state(&items));
}
