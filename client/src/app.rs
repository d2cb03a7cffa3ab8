//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    art::ArtPage, home::HomePage, hyperfixation_detail::HyperfixationDetailPage, hyperfixations::HyperfixationsPage,
    japanese::JapanesePage, not_found::NotFoundPage, proof_detail::ProofDetailPage, proofs::ProofsPage,
    venn::VennPage, youtube::YoutubePage,
};
use crate::util::meta::SITE_TITLE;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Navbar and footer wrap every route; both hide themselves on `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/kazukigirand.css"/>
        <Title text=SITE_TITLE/>

        <Router>
            <Navbar/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("art") view=ArtPage/>
                <Route path=StaticSegment("proofs") view=ProofsPage/>
                <Route path=(StaticSegment("proofs"), ParamSegment("id")) view=ProofDetailPage/>
                <Route path=StaticSegment("hyperfixations") view=HyperfixationsPage/>
                <Route path=(StaticSegment("hyperfixations"), ParamSegment("id")) view=HyperfixationDetailPage/>
                <Route path=StaticSegment("youtube") view=YoutubePage/>
                <Route path=StaticSegment("japanese") view=JapanesePage/>
                <Route path=StaticSegment("venn") view=VennPage/>
            </Routes>
            <Footer/>
        </Router>
    }
}
