//! Hyperfixations grouped into current, paused and past sections.

use content::dates::{month_year, short_month_year};
use content::hyperfixation::with_status;
use content::{HYPERFIXATIONS, Hyperfixation, Status};
use leptos::prelude::*;

use crate::components::badge::{StatusBadge, TagList};
use crate::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::page_meta::PageMeta;
use crate::components::progress_bar::MilestoneBar;
use crate::components::section_header::{PageHeader, SectionTitle};
use crate::util::meta::page_title;
use crate::util::style::stagger_delay;

fn section_glyph(status: Status) -> &'static str {
    match status {
        Status::Current => "🔥",
        Status::Paused => "⏸️",
        Status::Past => "✅",
    }
}

/// Date line under a card title. Past entries show their full span; paused
/// entries show none.
fn date_caption(item: &Hyperfixation) -> Option<String> {
    match (item.status, item.end_date) {
        (Status::Paused, _) => None,
        (Status::Past, Some(end)) => {
            Some(format!("{} → {}", short_month_year(item.start_date), short_month_year(end)))
        }
        _ => Some(format!("Started {}", month_year(item.start_date))),
    }
}

#[component]
pub fn HyperfixationsPage() -> impl IntoView {
    view! {
        <PageMeta
            title=page_title("Hyperfixations")
            description="Deep dives into topics that captivate my attention."
        />
        <main class="page-container">
            <PageHeader glyph="🔥" title="Hyperfixations">
                "Deep dives into topics that captivate my attention. Some become lifelong "
                "interests, others are intense but brief adventures."
            </PageHeader>

            {Status::ORDER
                .into_iter()
                .filter_map(|status| {
                    let items = with_status(HYPERFIXATIONS, status);
                    (!items.is_empty()).then(|| view! { <StatusSection status=status items=items/> })
                })
                .collect_view()}
        </main>
    }
}

#[component]
fn StatusSection(status: Status, items: Vec<&'static Hyperfixation>) -> impl IntoView {
    view! {
        <section class=format!("status-section status-section--{}", status.as_str())>
            <SectionTitle glyph=section_glyph(status) title=status.section_heading()/>
            <div class="card-grid card-grid--two">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| view! { <HyperfixationCard item=item index=index/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HyperfixationCard(item: &'static Hyperfixation, index: usize) -> impl IntoView {
    let show_progress = item.status == Status::Current;

    view! {
        <a href=format!("/hyperfixations/{}", item.id) class="card-link">
            <Card class="card--full animate-fade-in-up" style=stagger_delay(index, 0.0)>
                <CardHeader>
                    <div class="card__title-row">
                        <div class="card__title-group">
                            <span class="card__emoji" aria-hidden="true">{item.emoji}</span>
                            <div>
                                <CardTitle>{item.title}</CardTitle>
                                {date_caption(item).map(|caption| view! { <span class="card__date">{caption}</span> })}
                            </div>
                        </div>
                        <StatusBadge status=item.status/>
                    </div>
                    <CardDescription>{item.description}</CardDescription>
                </CardHeader>
                <Show when=move || show_progress>
                    <CardContent>
                        <MilestoneBar progress=item.progress()/>
                    </CardContent>
                </Show>
                <CardFooter>
                    <TagList tags=item.tags limit=3/>
                </CardFooter>
            </Card>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::find_by_id;

    #[test]
    fn past_entries_show_their_span() {
        let item = find_by_id(HYPERFIXATIONS, "mechanical-keyboards").unwrap();
        assert_eq!(date_caption(item).as_deref(), Some("Mar 2022 → May 2023"));
    }

    #[test]
    fn current_entries_show_the_start() {
        let item = find_by_id(HYPERFIXATIONS, "generative-art").unwrap();
        assert_eq!(date_caption(item).as_deref(), Some("Started January 2024"));
    }

    #[test]
    fn paused_entries_show_no_date_line() {
        let item = find_by_id(HYPERFIXATIONS, "proof-theory").unwrap();
        assert_eq!(item.status, Status::Paused);
        assert_eq!(date_caption(item), None);
    }

    #[test]
    fn every_status_has_a_glyph() {
        for status in Status::ORDER {
            assert!(!section_glyph(status).is_empty());
        }
    }
}
