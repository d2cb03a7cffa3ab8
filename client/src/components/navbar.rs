//! Top navigation bar with a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` around every route. The landing page draws its own
//! navigation (the Venn circles), so the bar hides itself on `/`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::meta::SITE_NAME;

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Home", icon: "⌂" },
    NavItem { href: "/proofs", label: "Proofs", icon: "∑" },
    NavItem { href: "/hyperfixations", label: "Hyperfixations", icon: "🔥" },
    NavItem { href: "/venn", label: "Venn", icon: "◯" },
    NavItem { href: "/art", label: "Art", icon: "🎨" },
    NavItem { href: "/youtube", label: "YouTube", icon: "▶" },
    NavItem { href: "/japanese", label: "日本語", icon: "文" },
];

/// A link is active on its own path and, except for `/`, on any path below it.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || (href != "/" && pathname.starts_with(href))
}

/// Navbar and footer are drawn everywhere except the landing page.
pub fn shows_chrome(pathname: &str) -> bool {
    pathname != "/"
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Any route change closes the mobile menu.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let link = move |item: &'static NavItem, class: &'static str| {
        view! {
            <a
                href=item.href
                class=class
                class:nav-link--active=move || is_active(&pathname.get(), item.href)
                on:click=move |_| menu_open.set(false)
            >
                <span class="nav-link__icon">{item.icon}</span>
                {item.label}
            </a>
        }
    };

    view! {
        <Show when=move || shows_chrome(&pathname.get())>
            <nav class="navbar glass" aria-label="Main navigation">
                <div class="navbar__inner">
                    <a href="/" class="brand">
                        <span class="brand__mark">"K"</span>
                        <span class="brand__name">{SITE_NAME}</span>
                    </a>
                    <div class="navbar__links">
                        {NAV_ITEMS[1..].iter().map(|item| link(item, "nav-link")).collect_view()}
                    </div>
                    <button
                        class="navbar__toggle"
                        class:navbar__toggle--open=move || menu_open.get()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
                <div class="navbar__mobile glass" class:navbar__mobile--open=move || menu_open.get()>
                    {NAV_ITEMS.iter().map(|item| link(item, "nav-link nav-link--mobile")).collect_view()}
                </div>
            </nav>
        </Show>
    }
}
