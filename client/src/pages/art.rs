//! Art gallery with category filter and lightbox.

use content::{ARTWORKS, Artwork};
use leptos::prelude::*;

use crate::components::artwork_lightbox::ArtworkLightbox;
use crate::components::category_filter::{CategoryFilterBar, EmptyState};
use crate::components::page_meta::PageMeta;
use crate::components::section_header::PageHeader;
use crate::state::filter::CategoryFilter;
use crate::util::meta::page_title;
use crate::util::style::stagger_delay;

#[component]
pub fn ArtPage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::new(ARTWORKS));
    let selected = RwSignal::new(None::<&'static Artwork>);
    let visible = Memo::new(move |_| filter.with(|f| f.apply(ARTWORKS)));

    view! {
        <PageMeta
            title=page_title("Art Gallery")
            description="A collection of creative works spanning generative art, digital illustrations, and traditional media."
        />
        <main class="page-container">
            <PageHeader glyph="🎨" title="Art Gallery">
                "A collection of creative works spanning generative art, digital illustrations, "
                "and traditional media. Each piece tells a story."
            </PageHeader>

            <CategoryFilterBar filter=filter accent="art"/>

            <div class="gallery-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, artwork)| view! { <GalleryItem artwork=artwork index=index selected=selected/> })
                        .collect_view()
                }}
            </div>

            <Show when=move || filter.with(|f| f.shows_empty_state(ARTWORKS))>
                <EmptyState message="No artworks found in this category."/>
            </Show>
        </main>
        <ArtworkLightbox selected=selected/>
    }
}

#[component]
fn GalleryItem(
    artwork: &'static Artwork,
    index: usize,
    selected: RwSignal<Option<&'static Artwork>>,
) -> impl IntoView {
    let open = move || selected.set(Some(artwork));

    view! {
        <div
            class="gallery-item animate-fade-in-up"
            style=stagger_delay(index, 0.0)
            role="button"
            tabindex="0"
            aria-label=format!("View {}", artwork.title)
            on:click=move |_| open()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <div class="gallery-item__placeholder">
                <span aria-hidden="true">"🎨"</span>
            </div>
            <div class="gallery-overlay">
                <div>
                    <h3>{artwork.title}</h3>
                    <p>{artwork.medium}</p>
                </div>
            </div>
        </div>
    }
}
