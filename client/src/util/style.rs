//! Inline style fragments.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Entrance animation delay for the `index`th item of a grid, 0.1 s apart,
/// starting at `base` seconds.
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay(index: usize, base: f64) -> String {
    format!("animation-delay: {:.2}s", base + index as f64 * 0.1)
}
