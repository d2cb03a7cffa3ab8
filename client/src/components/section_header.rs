//! Centered page header: glyph, title, blurb.

use leptos::prelude::*;

#[component]
pub fn PageHeader(glyph: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <header class="section-header animate-fade-in">
            <div class="section-header__title">
                <span class="section-header__glyph" aria-hidden="true">{glyph}</span>
                <h1>{title}</h1>
            </div>
            <p>{children()}</p>
        </header>
    }
}

/// `h2` with a tinted glyph tile, used for sections inside a page.
#[component]
pub fn SectionTitle(glyph: &'static str, #[prop(optional)] tint: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="section-title">
            <span class=format!("section-title__glyph {tint}") aria-hidden="true">{glyph}</span>
            {title}
        </h2>
    }
}
