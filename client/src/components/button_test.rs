use super::*;

#[test]
fn defaults_to_primary_medium() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default()), "btn btn--primary btn--md");
}

#[test]
fn secondary_large() {
    assert_eq!(button_class(ButtonVariant::Secondary, ButtonSize::Lg), "btn btn--secondary btn--lg");
}

#[test]
fn ghost_small() {
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Sm), "btn btn--ghost btn--sm");
}
