//! `/proofs/:id`: one proof, its statement, body and commentary.

use content::dates::long_date;
use content::{PROOFS, Proof, find_by_id};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::badge::{Badge, BadgeVariant, DifficultyBadge};
use crate::components::breadcrumb::Breadcrumb;
use crate::components::button::{ButtonLink, ButtonVariant};
use crate::components::page_meta::PageMeta;
use crate::components::section_header::SectionTitle;
use crate::pages::not_found::NotFoundPage;
use crate::util::markdown::render_markdown_html;
use crate::util::meta::page_title;

#[component]
pub fn ProofDetailPage() -> impl IntoView {
    let params = use_params_map();
    let proof = move || params.read().get("id").and_then(|id| find_by_id(PROOFS, &id).ok());

    move || match proof() {
        Some(proof) => view! { <ProofArticle proof=proof/> }.into_any(),
        None => view! { <NotFoundPage title="Proof Not Found"/> }.into_any(),
    }
}

#[component]
fn ProofArticle(proof: &'static Proof) -> impl IntoView {
    view! {
        <PageMeta title=page_title(proof.title) description=proof.theorem/>
        <main class="page-container page-container--narrow">
            <Breadcrumb section_href="/proofs" section_label="Proofs" current=proof.title/>

            <header class="detail-header animate-fade-in">
                <div class="detail-header__meta">
                    <DifficultyBadge level=proof.difficulty/>
                    <span class="detail-header__date">{format!("Added {}", long_date(proof.date_added))}</span>
                </div>
                <h1>{proof.title}</h1>
                <div class="theorem-box">
                    <p class="theorem-box__label">"Theorem:"</p>
                    <p class="theorem-box__statement">{proof.theorem}</p>
                </div>
            </header>

            <section class="detail-section glass">
                <SectionTitle glyph="📜" title="The Proof"/>
                <div class="prose" inner_html=render_markdown_html(proof.proof)></div>
            </section>

            <section class="detail-section glass">
                <SectionTitle glyph="💭" title="Why I Love This Proof"/>
                <p class="detail-section__commentary">{proof.commentary}</p>
            </section>

            <div class="tag-list tag-list--detail">
                {proof
                    .category
                    .iter()
                    .map(|cat| view! { <Badge variant=BadgeVariant::Math>{*cat}</Badge> })
                    .collect_view()}
                {proof.tags.iter().map(|tag| view! { <Badge>{*tag}</Badge> }).collect_view()}
            </div>

            <div class="detail-back">
                <ButtonLink href="/proofs" variant=ButtonVariant::Secondary>"← Back to Proofs"</ButtonLink>
            </div>
        </main>
    }
}
