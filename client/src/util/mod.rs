//! Rendering helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules produce strings (HTML, SVG markup, inline styles) from the
//! content tables. They hold no reactive state and run identically on the
//! server and in the browser.

pub mod markdown;
pub mod meta;
pub mod particles;
pub mod style;
pub mod svg;
