//! Bordered panel and its header/body/footer slots.

use leptos::prelude::*;

/// Panel with an optional hover lift.
#[component]
pub fn Card(
    #[prop(default = true)] hover: bool,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {class}") class:card--hover=hover style=style>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("card__header {class}")>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <h3 class=format!("card__title {class}")>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <p class=format!("card__description {class}")>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("card__content {class}")>{children()}</div> }
}

#[component]
pub fn CardFooter(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("card__footer {class}")>{children()}</div> }
}
