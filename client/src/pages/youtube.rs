//! `/youtube`: curated videos with commentary and key moments.

use content::{VIDEOS, VideoEntry};
use leptos::prelude::*;

use crate::components::badge::{BadgeVariant, TagList};
use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::category_filter::{CategoryFilterBar, EmptyState};
use crate::components::page_meta::PageMeta;
use crate::components::section_header::PageHeader;
use crate::components::video_embed::VideoEmbed;
use crate::state::filter::CategoryFilter;
use crate::util::meta::page_title;
use crate::util::style::stagger_delay;

#[component]
pub fn YoutubePage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::new(VIDEOS));
    let visible = Memo::new(move |_| filter.with(|f| f.apply(VIDEOS)));

    view! {
        <PageMeta
            title=page_title("YouTube Favorites")
            description="Videos that taught me something, changed how I think, or sparked a new interest."
        />
        <main class="page-container">
            <PageHeader glyph="▶" title="YouTube Favorites">
                "Videos that taught me something, changed how I think, or sparked a new "
                "interest. Each one comes with a note on why it stuck with me."
            </PageHeader>

            <CategoryFilterBar filter=filter accent="japanese"/>

            <div class="video-list">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, video)| view! { <VideoCard video=video index=index/> })
                        .collect_view()
                }}
            </div>

            <Show when=move || filter.with(|f| f.shows_empty_state(VIDEOS))>
                <EmptyState message="No videos found in this category."/>
            </Show>
        </main>
    }
}

#[component]
fn VideoCard(video: &'static VideoEntry, index: usize) -> impl IntoView {
    view! {
        <Card hover=false class="video-card animate-fade-in-up" style=stagger_delay(index, 0.0)>
            <VideoEmbed video=video/>
            <CardHeader>
                <CardTitle>{video.title}</CardTitle>
                <CardDescription>{video.description}</CardDescription>
            </CardHeader>
            <CardContent>
                <blockquote class="video-card__commentary">{format!("\"{}\"", video.commentary)}</blockquote>
                <Show when=move || !video.timestamps.is_empty()>
                    <div class="video-card__moments">
                        <h4>"Key Moments"</h4>
                        <ul>
                            {video
                                .timestamps
                                .iter()
                                .map(|ts| {
                                    view! {
                                        <li>
                                            <a href=video.watch_url_at(ts) target="_blank" rel="noopener noreferrer">
                                                {format!("{} - {}", ts.time, ts.label)}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>
                <TagList tags=video.category variant=BadgeVariant::Japanese/>
            </CardContent>
        </Card>
    }
}
