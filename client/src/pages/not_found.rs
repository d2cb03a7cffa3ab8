//! 404 page, also rendered by detail routes whose id matches nothing.

use leptos::prelude::*;

use crate::components::button::{ButtonLink, ButtonVariant};
use crate::components::page_meta::PageMeta;
use crate::util::meta::page_title;

#[component]
pub fn NotFoundPage(#[prop(default = "Page Not Found")] title: &'static str) -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <PageMeta title=page_title(title) description="The page you're looking for doesn't exist or has been moved."/>
        <main class="not-found">
            <div class="not-found__inner animate-fade-in">
                <div class="not-found__code">"404"</div>
                <h1>{title}</h1>
                <p>
                    "The page you're looking for doesn't exist or has been moved. "
                    "Let's get you back on track."
                </p>
                <div class="not-found__actions">
                    <ButtonLink href="/" variant=ButtonVariant::Primary>"← Back to Home"</ButtonLink>
                    <ButtonLink href="/proofs" variant=ButtonVariant::Secondary>"Explore Proofs"</ButtonLink>
                </div>
                <p class="not-found__aside">
                    "Fun fact: 404 is the HTTP status code for \"Not Found\", and it reads the same backwards."
                </p>
            </div>
        </main>
    }
}
