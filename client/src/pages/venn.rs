//! `/venn`: interactive three-circle diagrams with a details panel.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `RwSignal<VennSelection>`. Shapes, the section list and
//! the diagram switcher all write through its transition methods; every
//! highlight and the details panel are derived reads of the same signal.

use content::venn::{ALL_KEY, CENTER_HIT, CIRCLE_CENTERS, CIRCLE_RADIUS, VIEW_BOX, label_anchor};
use content::{SectionView, VENN_DIAGRAMS, VennCircle};
use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::page_meta::PageMeta;
use crate::components::section_header::PageHeader;
use crate::state::venn::VennSelection;
use crate::util::meta::page_title;
use crate::util::svg::{gradient_id, url_ref, venn_defs};

const SELECTION_GLOW: &str = "glow";

#[component]
pub fn VennPage() -> impl IntoView {
    let Some(first) = VENN_DIAGRAMS.first() else {
        return view! { <main class="page-container"></main> }.into_any();
    };
    let state = RwSignal::new(VennSelection::new(first));

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.update(VennSelection::clear);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <PageMeta
            title=page_title("Venn Diagrams")
            description="Interactive Venn diagrams exploring where interests and skills overlap."
        />
        <main class="page-container">
            <PageHeader glyph="◯" title="Venn Diagrams">
                "Exploring the overlaps between my interests. Hover and click on different "
                "sections to discover what lives at each intersection."
            </PageHeader>

            <DiagramSwitcher state=state/>

            <div class="venn-current">
                <h2>{move || state.with(|s| s.diagram().title)}</h2>
                <p>{move || state.with(|s| s.diagram().description)}</p>
            </div>

            <div class="venn-layout">
                <div class="venn-canvas glass">
                    <VennSvg state=state/>
                </div>
                <div class="venn-side">
                    <DetailsPanel state=state/>
                    <SectionList state=state/>
                </div>
            </div>
        </main>
    }
    .into_any()
}

#[component]
fn DiagramSwitcher(state: RwSignal<VennSelection>) -> impl IntoView {
    view! {
        <div class="venn-switcher" role="tablist">
            {VENN_DIAGRAMS
                .iter()
                .map(|diagram| {
                    let id = diagram.id;
                    view! {
                        <button
                            class="venn-switcher__option"
                            class:venn-switcher__option--active=move || state.with(|s| s.diagram().id == id)
                            role="tab"
                            on:click=move |_| state.update(|s| s.select_diagram(id))
                        >
                            {diagram.title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn VennSvg(state: RwSignal<VennSelection>) -> impl IntoView {
    let (hit_x, hit_y, hit_r) = CENTER_HIT;

    view! {
        <svg class="venn-svg" viewBox=VIEW_BOX role="img" aria-label="Venn diagram">
            <defs inner_html=move || state.with(|s| venn_defs(s.diagram()))></defs>
            {move || {
                let diagram = state.with(|s| s.diagram());
                diagram
                    .circles
                    .iter()
                    .enumerate()
                    .map(|(index, circle)| view! { <VennShape state=state circle=circle index=index/> })
                    .collect_view()
            }}
            <circle
                class="venn-svg__center"
                cx=hit_x
                cy=hit_y
                r=hit_r
                fill="transparent"
                class:venn-svg__center--active=move || state.with(|s| s.is_emphasized(ALL_KEY))
                on:mouseenter=move |_| state.update(|s| s.hover(ALL_KEY))
                on:mouseleave=move |_| state.update(VennSelection::leave)
                on:click=move |_| state.update(|s| s.toggle(ALL_KEY))
            ></circle>
            <text class="venn-svg__glyph" x="250" y="215" text-anchor="middle">"✦"</text>
            <text class="venn-svg__hint" x="250" y="420" text-anchor="middle">"Click a section to explore"</text>
        </svg>
    }
}

#[component]
fn VennShape(state: RwSignal<VennSelection>, circle: &'static VennCircle, index: usize) -> impl IntoView {
    let id = circle.id;
    let (cx, cy) = CIRCLE_CENTERS[index % CIRCLE_CENTERS.len()];
    let (lx, ly) = label_anchor(index);
    let emphasized = move || state.with(|s| s.is_emphasized(id));
    let selected = move || state.with(|s| s.is_selected(id));

    view! {
        <g class="venn-svg__shape">
            <circle
                cx=cx
                cy=cy
                r=CIRCLE_RADIUS
                fill=url_ref(&gradient_id(id))
                stroke=circle.color
                stroke-width=move || if emphasized() { "3" } else { "1" }
                opacity=move || if emphasized() { "0.9" } else { "0.6" }
                filter=move || selected().then(|| url_ref(SELECTION_GLOW))
                on:mouseenter=move |_| state.update(|s| s.hover(id))
                on:mouseleave=move |_| state.update(VennSelection::leave)
                on:click=move |_| state.update(|s| s.toggle(id))
            ></circle>
            <text class="venn-svg__label" x=lx y=ly text-anchor="middle" fill=circle.color>
                {circle.label}
            </text>
        </g>
    }
}

#[component]
fn DetailsPanel(state: RwSignal<VennSelection>) -> impl IntoView {
    move || match state.with(VennSelection::selected_section) {
        Some(section) => view! { <SectionDetails section=section/> }.into_any(),
        None => view! {
            <div class="venn-prompt glass">
                <p>"Click on any circle or intersection to see what's inside!"</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn SectionDetails(section: SectionView) -> impl IntoView {
    view! {
        <Card hover=false class="venn-details animate-fade-in">
            <CardHeader>
                <div class="venn-details__title">
                    <div class="venn-details__swatches">
                        {section
                            .colors
                            .iter()
                            .map(|color| {
                                view! { <span class="venn-swatch" style=format!("background-color: {color}")></span> }
                            })
                            .collect_view()}
                    </div>
                    <CardTitle>{section.label}</CardTitle>
                </div>
            </CardHeader>
            <CardContent>
                <ul class="venn-details__items">
                    {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </CardContent>
        </Card>
    }
}

#[component]
fn SectionList(state: RwSignal<VennSelection>) -> impl IntoView {
    view! {
        <div class="venn-sections glass">
            <h3>"All Sections"</h3>
            <ul>
                {move || {
                    let diagram = state.with(|s| s.diagram());
                    diagram
                        .section_keys()
                        .filter_map(|key| diagram.section(key))
                        .map(|section| view! { <SectionRow state=state section=section/> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn SectionRow(state: RwSignal<VennSelection>, section: SectionView) -> impl IntoView {
    let key = section.key;
    let count = format!("{} items", section.items.len());

    view! {
        <li>
            <button
                class="venn-sections__row"
                class:venn-sections__row--active=move || state.with(|s| s.is_selected(key))
                on:click=move |_| state.update(|s| s.select(key))
            >
                <span class="venn-sections__swatches">
                    {section
                        .colors
                        .iter()
                        .map(|color| {
                            view! { <span class="venn-swatch venn-swatch--small" style=format!("background-color: {color}")></span> }
                        })
                        .collect_view()}
                </span>
                <span class="venn-sections__label">{section.label}</span>
                <span class="venn-sections__count">{count}</span>
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::svg::glow_filter_id;

    #[test]
    fn selection_glow_matches_the_emitted_filter() {
        let diagram = VENN_DIAGRAMS.first().unwrap();
        assert!(venn_defs(diagram).contains(&format!(r#"id="{SELECTION_GLOW}""#)));
        assert_ne!(glow_filter_id("x"), SELECTION_GLOW);
    }
}
