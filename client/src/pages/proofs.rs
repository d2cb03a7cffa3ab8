//! Favorite proofs list with category filter.

use content::dates::short_month_year;
use content::{PROOFS, Proof};
use leptos::prelude::*;

use crate::components::badge::{DifficultyBadge, TagList};
use crate::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::category_filter::{CategoryFilterBar, EmptyState};
use crate::components::page_meta::PageMeta;
use crate::components::section_header::PageHeader;
use crate::state::filter::CategoryFilter;
use crate::util::meta::page_title;
use crate::util::style::stagger_delay;

#[component]
pub fn ProofsPage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::new(PROOFS));
    let visible = Memo::new(move |_| filter.with(|f| f.apply(PROOFS)));

    view! {
        <PageMeta
            title=page_title("Favorite Proofs")
            description="A collection of elegant mathematical proofs that showcase the beauty and creativity of mathematics."
        />
        <main class="page-container">
            <PageHeader glyph="∑" title="Favorite Proofs">
                "A collection of elegant mathematical proofs that showcase the beauty, "
                "creativity, and sometimes surprising simplicity of rigorous reasoning."
            </PageHeader>

            <CategoryFilterBar filter=filter accent="math"/>

            <div class="card-grid card-grid--two">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, proof)| view! { <ProofCard proof=proof index=index/> })
                        .collect_view()
                }}
            </div>

            <Show when=move || filter.with(|f| f.shows_empty_state(PROOFS))>
                <EmptyState message="No proofs found in this category."/>
            </Show>

            <section class="cta glass">
                <h2>"Love mathematical proofs?"</h2>
                <p>
                    "These are just a few of my favorites. Mathematics is full of beautiful arguments "
                    "that reveal deep truths about the universe. Each proof tells a story."
                </p>
            </section>
        </main>
    }
}

#[component]
fn ProofCard(proof: &'static Proof, index: usize) -> impl IntoView {
    view! {
        <a href=format!("/proofs/{}", proof.id) class="card-link">
            <Card class="card--full animate-fade-in-up" style=stagger_delay(index, 0.0)>
                <CardHeader>
                    <div class="card__title-row">
                        <CardTitle>{proof.title}</CardTitle>
                        <DifficultyBadge level=proof.difficulty/>
                    </div>
                    <CardDescription class="card__theorem">{format!("\"{}\"", proof.theorem)}</CardDescription>
                </CardHeader>
                <CardContent>
                    <p class="line-clamp-3">{proof.commentary}</p>
                </CardContent>
                <CardFooter class="card__footer--split">
                    <TagList tags=proof.tags limit=3/>
                    <span class="card__date">{short_month_year(proof.date_added)}</span>
                </CardFooter>
            </Card>
        </a>
    }
}
