//! Landing page: the navigation Venn diagram.
//!
//! SYSTEM CONTEXT
//! ==============
//! Full-screen route with no navbar. Clicking a circle fades the diagram out
//! and navigates after `NAVIGATE_DELAY_MS`; on the server the timer does not
//! exist and nothing is scheduled.

use content::home::{HOME_CIRCLES, QUICK_LINKS, VIEW_BOX};
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::home_circle::HomeVennCircle;
use crate::components::page_meta::PageMeta;
#[cfg(feature = "hydrate")]
use crate::state::home::NAVIGATE_DELAY_MS;
use crate::state::home::HomeNav;
use crate::util::meta::{SITE_DESCRIPTION, SITE_NAME, SITE_TITLE};
use crate::util::particles::particles;
use crate::util::svg::home_defs;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = RwSignal::new(HomeNav::default());

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        Effect::new(move || {
            let Some(route) = nav.with(HomeNav::target) else {
                return;
            };
            let navigate = navigate.clone();
            gloo_timers::callback::Timeout::new(NAVIGATE_DELAY_MS, move || {
                navigate(route, NavigateOptions::default());
            })
            .forget();
        });
    }

    let circles = HOME_CIRCLES
        .iter()
        .map(|circle| {
            view! {
                <HomeVennCircle
                    circle=circle
                    hovered=Signal::derive(move || nav.with(|n| n.is_hovered(circle.id)))
                    on_hover=Callback::new(move |()| nav.update(|n| n.hover(circle.id)))
                    on_leave=Callback::new(move |()| nav.update(HomeNav::leave))
                    on_activate=Callback::new(move |()| {
                        nav.update(|n| {
                            n.begin_navigation(circle.id);
                        });
                    })
                />
            }
        })
        .collect_view();

    view! {
        <PageMeta title=SITE_TITLE description=SITE_DESCRIPTION/>
        <div class="home">
            <div class="home__particles" aria-hidden="true">
                {particles().into_iter().map(|p| view! { <div class="particle animate-float" style=p.style()></div> }).collect_view()}
            </div>

            <svg
                viewBox=VIEW_BOX
                class="home__diagram"
                class:home__diagram--leaving=move || nav.with(HomeNav::is_leaving)
                role="img"
                aria-label="Interactive Venn diagram showing three areas: Japanese, Art, and Math"
            >
                <defs inner_html=home_defs(HOME_CIRCLES)></defs>
                {circles}
                <g class="home__center" pointer-events="none">
                    <circle cx="400" cy="280" r="50" fill="rgba(15, 23, 42, 0.6)" filter="url(#center-blur)" class="animate-pulse-glow"></circle>
                </g>
            </svg>

            <div class="home__name">
                <div class="home__name-card glass">
                    <h1 class="animate-fade-in">{SITE_NAME}</h1>
                    <p>"Click a circle to explore"</p>
                </div>
            </div>

            {move || {
                nav.with(HomeNav::hovered_circle)
                    .map(|circle| {
                        view! {
                            <div class="home__info animate-fade-in">
                                <div class="glass">
                                    <p class="home__info-label">{circle.label}</p>
                                    <p class="home__info-description">{circle.description}</p>
                                </div>
                            </div>
                        }
                    })
            }}

            <nav class="home__quick-links" aria-label="Quick navigation">
                {QUICK_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a href=*href class="glass">{*label}</a> })
                    .collect_view()}
            </nav>
        </div>
    }
}
