//! One navigation circle of the landing diagram.

use content::home::{HomeCircle, RADIUS};
use leptos::prelude::*;

use crate::state::home::is_activation_key;
use crate::util::svg::{glow_filter_id, url_ref};

/// Inline style for the filled disc; hover brightens and scales it.
pub fn disc_style(circle: &HomeCircle, hovered: bool) -> String {
    let (opacity, scale) = if hovered { ("0.85", "1.02") } else { ("0.55", "1") };
    format!(
        "mix-blend-mode: screen; transition: all 0.3s ease; opacity: {opacity}; transform: scale({scale}); transform-origin: {}px {}px;",
        circle.cx, circle.cy
    )
}

#[component]
pub fn HomeVennCircle(
    circle: &'static HomeCircle,
    hovered: Signal<bool>,
    on_hover: Callback<()>,
    on_leave: Callback<()>,
    on_activate: Callback<()>,
) -> impl IntoView {
    let (label_x, label_y) = circle.label_position();

    view! {
        <g
            class="home-circle"
            role="button"
            tabindex="0"
            aria-label=format!("Navigate to {} section", circle.label)
            on:mouseenter=move |_| on_hover.run(())
            on:mouseleave=move |_| on_leave.run(())
            on:focus=move |_| on_hover.run(())
            on:blur=move |_| on_leave.run(())
            on:click=move |_| on_activate.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    on_activate.run(());
                }
            }
        >
            <circle
                cx=circle.cx
                cy=circle.cy
                r=RADIUS
                fill=circle.color
                filter=move || hovered.get().then(|| url_ref(&glow_filter_id(circle.id)))
                style=move || disc_style(circle, hovered.get())
            ></circle>
            <circle
                cx=circle.cx
                cy=circle.cy
                r=RADIUS
                fill="none"
                stroke=move || if hovered.get() { "rgba(255,255,255,0.4)" } else { "rgba(255,255,255,0.15)" }
                stroke-width=move || if hovered.get() { "2" } else { "1" }
                class="home-circle__ring"
            ></circle>
            <text
                x=label_x
                y=label_y
                text-anchor="middle"
                dominant-baseline="middle"
                class="home-circle__label"
                class:home-circle__label--hovered=move || hovered.get()
            >
                {circle.label}
            </text>
            <circle cx=circle.cx cy=circle.cy r={RADIUS + 5} class="home-circle__focus-ring"></circle>
        </g>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::home::find_circle;

    #[test]
    fn disc_style_reflects_hover() {
        let art = find_circle("art").unwrap();
        let idle = disc_style(art, false);
        assert!(idle.contains("opacity: 0.55"));
        assert!(idle.contains("transform-origin: 500px 220px"));
        assert!(disc_style(art, true).contains("scale(1.02)"));
    }
}
