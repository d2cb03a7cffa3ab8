//! SVG `<defs>` markup for the two Venn diagrams.
//!
//! Filter primitives and gradients are emitted as a markup string and
//! injected with `inner_html`; only the shapes that carry event handlers are
//! built as view nodes.

use content::VennDiagram;
use content::home::HomeCircle;

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

/// Filter id applied to a hovered landing circle.
pub fn glow_filter_id(circle_id: &str) -> String {
    format!("glow-{circle_id}")
}

/// Gradient id filling a `/venn` circle.
pub fn gradient_id(circle_id: &str) -> String {
    format!("grad-{circle_id}")
}

/// `url(#id)` reference for `fill`/`filter` attributes.
pub fn url_ref(id: &str) -> String {
    format!("url(#{id})")
}

/// Colored glow per landing circle plus the blur under the name overlay.
pub fn home_defs(circles: &[HomeCircle]) -> String {
    let mut out = String::new();
    for circle in circles {
        out.push_str(&format!(
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="15" result="blur"/><feFlood flood-color="{color}" flood-opacity="0.6"/><feComposite in2="blur" operator="in"/><feMerge><feMergeNode/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
            id = glow_filter_id(circle.id),
            color = circle.color,
        ));
    }
    out.push_str(
        r#"<filter id="center-blur" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="8"/></filter>"#,
    );
    out
}

/// Radial gradient per circle plus the shared selection glow.
pub fn venn_defs(diagram: &VennDiagram) -> String {
    let mut out = String::new();
    for circle in &diagram.circles {
        out.push_str(&format!(
            r#"<radialGradient id="{id}" cx="30%" cy="30%"><stop offset="0%" stop-color="{color}" stop-opacity="0.8"/><stop offset="100%" stop-color="{color}" stop-opacity="0.4"/></radialGradient>"#,
            id = gradient_id(circle.id),
            color = circle.color,
        ));
    }
    out.push_str(
        r#"<filter id="glow" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="10" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
    );
    out
}
