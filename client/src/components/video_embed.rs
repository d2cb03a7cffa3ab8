//! Click-to-load YouTube player.
//!
//! The iframe is not in the markup until the viewer asks for it, so a page of
//! video cards makes no request to YouTube on load.

use content::VideoEntry;
use leptos::prelude::*;

const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn VideoEmbed(video: &'static VideoEntry) -> impl IntoView {
    let loaded = RwSignal::new(false);

    view! {
        <Show
            when=move || loaded.get()
            fallback=move || {
                view! {
                    <button
                        class="video-placeholder"
                        on:click=move |_| loaded.set(true)
                        aria-label=format!("Load video: {}", video.title)
                    >
                        <span class="video-placeholder__play">"▶"</span>
                        <span class="video-placeholder__hint">"Click to load video"</span>
                    </button>
                }
            }
        >
            <div class="video-container">
                <iframe src=video.embed_url() title=video.title allow=IFRAME_ALLOW allowfullscreen=true></iframe>
            </div>
        </Show>
    }
}
