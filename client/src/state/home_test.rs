use super::*;

#[test]
fn click_starts_navigation_once() {
    let mut nav = HomeNav::default();
    assert_eq!(nav.begin_navigation("math"), Some("/proofs"));
    assert!(nav.is_leaving());
    assert_eq!(nav.begin_navigation("art"), None);
    assert_eq!(nav.target(), Some("/proofs"));
}

#[test]
fn unknown_circle_does_not_fade() {
    let mut nav = HomeNav::default();
    assert_eq!(nav.begin_navigation("music"), None);
    assert!(!nav.is_leaving());
}

#[test]
fn hover_resolves_circle_details() {
    let mut nav = HomeNav::default();
    nav.hover("japanese");
    let circle = nav.hovered_circle().unwrap();
    assert_eq!(circle.label, "日本語");
    assert_eq!(circle.description, "Language & Culture");
    assert!(nav.is_hovered("japanese"));
    nav.leave();
    assert!(nav.hovered_circle().is_none());
}

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
}
