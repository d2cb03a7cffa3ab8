//! `Home / Section / Title` trail on detail pages.

use leptos::prelude::*;

#[component]
pub fn Breadcrumb(section_href: &'static str, section_label: &'static str, current: &'static str) -> impl IntoView {
    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <ol>
                <li><a href="/">"Home"</a></li>
                <li aria-hidden="true">"/"</li>
                <li><a href=section_href>{section_label}</a></li>
                <li aria-hidden="true">"/"</li>
                <li class="breadcrumb__current" aria-current="page">{current}</li>
            </ol>
        </nav>
    }
}
