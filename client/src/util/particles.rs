//! Decorative floating particles behind the landing diagram.
//!
//! DESIGN
//! ======
//! Layout comes from a fixed-seed `SmallRng`, so the server render and the
//! hydrated browser render produce identical markup.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

pub const PARTICLE_COUNT: usize = 20;
const SEED: u64 = 0x6b61_7a75_6b69;

const VIOLET: (u8, u8, u8) = (139, 92, 246);
const BLUE: (u8, u8, u8) = (59, 130, 246);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Diameter in px, `[2, 8)`.
    pub size: f64,
    pub rgb: (u8, u8, u8),
    /// `[0.1, 0.4)`.
    pub alpha: f64,
    /// Percent offsets into the container.
    pub left: f64,
    pub top: f64,
    /// Seconds, `[0, 6)`.
    pub delay: f64,
    /// Seconds, `[4, 8)`.
    pub duration: f64,
}

impl Particle {
    /// Inline style for the particle `<div>`.
    pub fn style(&self) -> String {
        let (r, g, b) = self.rgb;
        format!(
            "width: {size:.2}px; height: {size:.2}px; background: rgba({r}, {g}, {b}, {alpha:.2}); \
             left: {left:.2}%; top: {top:.2}%; animation-delay: {delay:.2}s; animation-duration: {duration:.2}s;",
            size = self.size,
            alpha = self.alpha,
            left = self.left,
            top = self.top,
            delay = self.delay,
            duration = self.duration,
        )
    }
}

/// The landing page particle field.
pub fn particles() -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            size: rng.random_range(2.0..8.0),
            rgb: if rng.random_bool(0.5) { VIOLET } else { BLUE },
            alpha: rng.random_range(0.1..0.4),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..6.0),
            duration: rng.random_range(4.0..8.0),
        })
        .collect()
}
