//! `/hyperfixations/:id`: deep dive, milestones and resources for one entry.

use content::dates::{month_year, short_month_year};
use content::{HYPERFIXATIONS, Hyperfixation, Milestone, Resource, find_by_id};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::badge::{StatusBadge, TagList};
use crate::components::breadcrumb::Breadcrumb;
use crate::components::button::{ButtonLink, ButtonVariant};
use crate::components::page_meta::PageMeta;
use crate::components::progress_bar::ProgressPanel;
use crate::components::section_header::SectionTitle;
use crate::pages::not_found::NotFoundPage;
use crate::util::meta::hyperfixation_title;

/// `Started June 2023`, with `→ Ended ...` appended once an end date exists.
fn span_caption(item: &Hyperfixation) -> String {
    let started = format!("Started {}", month_year(item.start_date));
    match item.end_date {
        Some(end) => format!("{started} → Ended {}", month_year(end)),
        None => started,
    }
}

#[component]
pub fn HyperfixationDetailPage() -> impl IntoView {
    let params = use_params_map();
    let item = move || params.read().get("id").and_then(|id| find_by_id(HYPERFIXATIONS, &id).ok());

    move || match item() {
        Some(item) => view! { <HyperfixationArticle item=item/> }.into_any(),
        None => view! { <NotFoundPage title="Not Found"/> }.into_any(),
    }
}

#[component]
fn HyperfixationArticle(item: &'static Hyperfixation) -> impl IntoView {
    view! {
        <PageMeta title=hyperfixation_title(item.title) description=item.description/>
        <main class="page-container page-container--narrow">
            <Breadcrumb section_href="/hyperfixations" section_label="Hyperfixations" current=item.title/>

            <header class="detail-header animate-fade-in">
                <div class="detail-header__meta">
                    <StatusBadge status=item.status/>
                    <span class="detail-header__date">{span_caption(item)}</span>
                </div>
                <div class="detail-header__title-row">
                    <span class="detail-header__emoji" aria-hidden="true">{item.emoji}</span>
                    <h1>{item.title}</h1>
                </div>
                <p class="detail-header__lede">{item.description}</p>
            </header>

            <ProgressPanel progress=item.progress()/>

            <section class="detail-section glass">
                <SectionTitle glyph="📝" title="Deep Dive"/>
                <div class="prose">
                    {item.paragraphs().map(|para| view! { <p>{para}</p> }).collect_view()}
                </div>
            </section>

            <section class="detail-section glass">
                <SectionTitle glyph="🎯" title="Milestones"/>
                <ol class="milestones">
                    {item
                        .milestones
                        .iter()
                        .enumerate()
                        .map(|(index, milestone)| view! { <MilestoneRow milestone=milestone index=index/> })
                        .collect_view()}
                </ol>
            </section>

            <Show when=move || !item.resources.is_empty()>
                <section class="detail-section glass">
                    <SectionTitle glyph="📚" title="Resources"/>
                    <ul class="resources">
                        {item.resources.iter().map(|resource| view! { <ResourceRow resource=resource/> }).collect_view()}
                    </ul>
                </section>
            </Show>

            <TagList tags=item.tags/>

            <div class="detail-back">
                <ButtonLink href="/hyperfixations" variant=ButtonVariant::Secondary>
                    "← Back to Hyperfixations"
                </ButtonLink>
            </div>
        </main>
    }
}

#[component]
fn MilestoneRow(milestone: &'static Milestone, index: usize) -> impl IntoView {
    let marker = if milestone.completed { "✓".to_owned() } else { (index + 1).to_string() };

    view! {
        <li class="milestone" class:milestone--done=milestone.completed>
            <span class="milestone__marker">{marker}</span>
            <span class="milestone__title">{milestone.title}</span>
            {milestone.date.map(|date| view! { <span class="milestone__date">{short_month_year(date)}</span> })}
        </li>
    }
}

#[component]
fn ResourceRow(resource: &'static Resource) -> impl IntoView {
    view! {
        <li>
            <a class="resource" href=resource.url target="_blank" rel="noopener noreferrer">
                <span class="resource__emoji" aria-hidden="true">{resource.kind.emoji()}</span>
                <span class="resource__title">{resource.title}</span>
                <span class="resource__kind">{resource.kind.as_str()}</span>
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_entries_have_no_end() {
        let item = find_by_id(HYPERFIXATIONS, "japanese-language").unwrap();
        assert_eq!(span_caption(item), "Started June 2023");
    }

    #[test]
    fn ended_entries_show_both_dates() {
        let item = find_by_id(HYPERFIXATIONS, "proof-theory").unwrap();
        assert_eq!(span_caption(item), "Started September 2023 → Ended February 2024");
    }
}
