//! Link styled as a button.
//!
//! Every call site in the site navigates somewhere, so the primitive renders
//! an `<a>`; the router intercepts same-origin hrefs.

use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Full class list for a variant/size pair.
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Ghost => "btn--ghost",
    };
    let size = match size {
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Md => "btn--md",
        ButtonSize::Lg => "btn--lg",
    };
    format!("btn {variant} {size}")
}

#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <a class=button_class(variant, size) href=href>
            {children()}
        </a>
    }
}
