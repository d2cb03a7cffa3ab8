//! Modal showing one artwork's full record.
//!
//! Closes on backdrop click, the close button, or Escape. Clicks inside the
//! panel stop propagation so they never reach the backdrop.

use content::Artwork;
use content::dates::month_year;
use leptos::prelude::*;

use crate::components::badge::{BadgeVariant, TagList};

#[component]
pub fn ArtworkLightbox(selected: RwSignal<Option<&'static Artwork>>) -> impl IntoView {
    let close = move || selected.set(None);

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            ev.prevent_default();
            selected.set(None);
        }
    });
    on_cleanup(move || escape.remove());

    move || {
        selected.get().map(|artwork| {
            view! {
                <div
                    class="lightbox"
                    on:click=move |_| close()
                    role="dialog"
                    aria-modal="true"
                    aria-label=format!("{} details", artwork.title)
                >
                    <div class="lightbox__panel glass" on:click=move |ev| ev.stop_propagation()>
                        <div class="lightbox__image">
                            <span class="lightbox__glyph" aria-hidden="true">"🎨"</span>
                        </div>
                        <div class="lightbox__details">
                            <div class="lightbox__header">
                                <div>
                                    <h2>{artwork.title}</h2>
                                    <p class="lightbox__medium">{artwork.medium}</p>
                                </div>
                                <button class="lightbox__close" on:click=move |_| close() aria-label="Close">
                                    "✕"
                                </button>
                            </div>
                            <p class="lightbox__description">{artwork.description}</p>
                            <div class="lightbox__meta">
                                <TagList tags=artwork.tags variant=BadgeVariant::Art/>
                                <span class="lightbox__date">{month_year(artwork.date_created)}</span>
                            </div>
                            {artwork
                                .dimensions
                                .map(|d| view! { <p class="lightbox__dimensions">{format!("Dimensions: {d}")}</p> })}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
