use super::*;

#[test]
fn layout_is_deterministic() {
    assert_eq!(particles(), particles());
}

#[test]
fn produces_fixed_count() {
    assert_eq!(particles().len(), PARTICLE_COUNT);
}

#[test]
fn values_stay_in_range() {
    for p in particles() {
        assert!((2.0..8.0).contains(&p.size));
        assert!((0.1..0.4).contains(&p.alpha));
        assert!((0.0..100.0).contains(&p.left));
        assert!((0.0..100.0).contains(&p.top));
        assert!((0.0..6.0).contains(&p.delay));
        assert!((4.0..8.0).contains(&p.duration));
        assert!(p.rgb == VIOLET || p.rgb == BLUE);
    }
}

#[test]
fn style_formats_two_decimals() {
    let p = Particle {
        size: 3.0,
        rgb: BLUE,
        alpha: 0.25,
        left: 10.0,
        top: 50.5,
        delay: 1.0,
        duration: 4.5,
    };
    assert_eq!(
        p.style(),
        "width: 3.00px; height: 3.00px; background: rgba(59, 130, 246, 0.25); \
         left: 10.00%; top: 50.50%; animation-delay: 1.00s; animation-duration: 4.50s;"
    );
}
