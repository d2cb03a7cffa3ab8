use super::*;
use content::home::HOME_CIRCLES;
use content::venn::VENN_DIAGRAMS;

#[test]
fn ids_and_refs() {
    assert_eq!(glow_filter_id("art"), "glow-art");
    assert_eq!(gradient_id("math"), "grad-math");
    assert_eq!(url_ref("glow"), "url(#glow)");
}

#[test]
fn home_defs_has_one_glow_per_circle() {
    let defs = home_defs(HOME_CIRCLES);
    assert_eq!(defs.matches("<filter ").count(), HOME_CIRCLES.len() + 1);
    assert!(defs.contains(r#"id="glow-japanese""#));
    assert!(defs.contains(r##"flood-color="#3b82f6""##));
    assert!(defs.contains(r#"id="center-blur""#));
}

#[test]
fn venn_defs_tracks_diagram_colors() {
    let skills = &VENN_DIAGRAMS[1];
    let defs = venn_defs(skills);
    assert_eq!(defs.matches("<radialGradient ").count(), 3);
    assert!(defs.contains(r#"id="grad-code""#));
    assert!(defs.contains(r##"stop-color="#ec4899""##));
    assert!(defs.ends_with("</filter>"));
}
