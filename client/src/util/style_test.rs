use super::*;

#[test]
fn first_item_starts_at_base() {
    assert_eq!(stagger_delay(0, 0.0), "animation-delay: 0.00s");
    assert_eq!(stagger_delay(0, 0.4), "animation-delay: 0.40s");
}

#[test]
fn items_step_by_a_tenth() {
    assert_eq!(stagger_delay(3, 0.0), "animation-delay: 0.30s");
    assert_eq!(stagger_delay(2, 0.2), "animation-delay: 0.40s");
}
