use super::*;
use crate::find_by_id;

fn interests() -> &'static VennDiagram {
    find_by_id(VENN_DIAGRAMS, "interests").unwrap()
}

#[test]
fn circle_section_shows_exactly_its_items() {
    let diagram = interests();
    for circle in &diagram.circles {
        let section = diagram.section(circle.id).unwrap();
        assert_eq!(section.kind, SectionKind::Circle);
        assert_eq!(section.label, circle.label);
        assert_eq!(section.items, circle.items);
        assert_eq!(section.colors, vec![circle.color]);
    }
}

#[test]
fn all_section_shows_triple_intersection() {
    let diagram = interests();
    let section = diagram.section(ALL_KEY).unwrap();
    assert_eq!(section.kind, SectionKind::Intersection);
    assert_eq!(section.label, "All Three");
    assert_eq!(section.items, &["Tessellation patterns in Japanese art", "Algorithmic haiku generation"]);
    assert_eq!(section.colors, vec!["#ef4444", "#3b82f6", "#22c55e"]);
}

#[test]
fn pairwise_intersection_uses_member_colors() {
    let skills = find_by_id(VENN_DIAGRAMS, "skills").unwrap();
    let section = skills.section("design-math").unwrap();
    assert_eq!(section.colors, vec!["#ec4899", "#22c55e"]);
    assert_eq!(section.items.len(), 3);
}

#[test]
fn unknown_key_resolves_to_nothing() {
    assert!(interests().section("code").is_none());
    assert!(interests().section("").is_none());
}

#[test]
fn unknown_member_falls_back_to_white() {
    let intersection = VennIntersection { key: "odd", label: "Odd", circle_ids: &["art", "music"], items: &[] };
    assert_eq!(interests().member_colors(&intersection), vec!["#3b82f6", "#fff"]);
}

#[test]
fn section_keys_list_circles_then_intersections() {
    let keys: Vec<_> = interests().section_keys().collect();
    assert_eq!(keys, vec!["japanese", "art", "math", "jp-art", "jp-math", "art-math", "all"]);
}

#[test]
fn label_anchors_push_away_from_center() {
    assert_eq!(label_anchor(0), (150, 100));
    assert_eq!(label_anchor(1), (350, 100));
    assert_eq!(label_anchor(2), (250, 350));
}
