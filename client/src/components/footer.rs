//! Site footer: brand, page links, social links, copyright.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::navbar::shows_chrome;
use crate::util::meta::SITE_NAME;

const PAGE_LINKS: &[(&str, &str)] = &[
    ("/proofs", "Proofs"),
    ("/hyperfixations", "Hyperfixations"),
    ("/venn", "Venn"),
    ("/art", "Art"),
    ("/youtube", "YouTube"),
    ("/japanese", "Japanese"),
];

/// Label, URL and glyph.
const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "GH"),
    ("Twitter", "https://twitter.com", "X"),
    ("YouTube", "https://youtube.com", "▶"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let pathname = use_location().pathname;
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <Show when=move || shows_chrome(&pathname.get())>
            <footer class="footer">
                <div class="footer__grid">
                    <div>
                        <a href="/" class="brand">
                            <span class="brand__mark">"K"</span>
                            <span class="brand__name">{SITE_NAME}</span>
                        </a>
                        <p class="footer__blurb">
                            "Exploring the beautiful intersections of Japanese, Art, and Mathematics."
                        </p>
                    </div>
                    <div>
                        <h3 class="footer__heading">"Pages"</h3>
                        <ul class="footer__links">
                            {PAGE_LINKS
                                .iter()
                                .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer__heading">"Connect"</h3>
                        <div class="footer__social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, href, glyph)| {
                                    view! {
                                        <a
                                            href=*href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="footer__social-link"
                                            aria-label=*label
                                        >
                                            {*glyph}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="footer__bottom">
                    <p>{format!("© {year} {SITE_NAME}. All rights reserved.")}</p>
                    <p>"Built with Rust, Leptos & Axum"</p>
                </div>
            </footer>
        </Show>
    }
}
