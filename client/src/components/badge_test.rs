use super::*;

#[test]
fn default_variant_is_default_class() {
    assert_eq!(BadgeVariant::default().class(), "tag tag--default");
}

#[test]
fn difficulty_and_status_classes() {
    assert_eq!(BadgeVariant::Difficulty(Difficulty::Advanced).class(), "tag difficulty-advanced");
    assert_eq!(BadgeVariant::Status(Status::Paused).class(), "tag status-paused");
}

#[test]
fn topic_classes() {
    assert_eq!(BadgeVariant::Japanese.class(), "tag tag-japanese");
    assert_eq!(BadgeVariant::Art.class(), "tag tag-art");
    assert_eq!(BadgeVariant::Math.class(), "tag tag-math");
}
