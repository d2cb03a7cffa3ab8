use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/proofs", "/proofs"));
    assert!(is_active("/", "/"));
}

#[test]
fn nested_path_is_active() {
    assert!(is_active("/proofs/sqrt2-irrational", "/proofs"));
    assert!(is_active("/hyperfixations/generative-art", "/hyperfixations"));
}

#[test]
fn home_only_matches_itself() {
    assert!(!is_active("/proofs", "/"));
    assert!(!is_active("/art", "/"));
}

#[test]
fn sibling_paths_are_inactive() {
    assert!(!is_active("/art", "/proofs"));
    assert!(!is_active("/venn", "/youtube"));
}

#[test]
fn chrome_hidden_only_on_landing() {
    assert!(!shows_chrome("/"));
    assert!(shows_chrome("/venn"));
    assert!(shows_chrome("/missing"));
}

#[test]
fn desktop_links_skip_home() {
    let labels: Vec<_> = NAV_ITEMS[1..].iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Proofs", "Hyperfixations", "Venn", "Art", "YouTube", "日本語"]);
}
