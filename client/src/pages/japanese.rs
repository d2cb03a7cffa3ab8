//! `/japanese`: JLPT ladder, favorite words and learning resources.

use content::japanese::{FAVORITE_WORDS, FavoriteWord, JLPT_LEVELS, JlptLevel, RESOURCE_GROUPS, ResourceGroup};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::page_meta::PageMeta;
use crate::components::section_header::{PageHeader, SectionTitle};
use crate::util::meta::page_title;
use crate::util::style::stagger_delay;

/// Detail route of `content::japanese::HYPERFIXATION_ID`.
const HYPERFIXATION_HREF: &str = "/hyperfixations/japanese-language";

#[component]
pub fn JapanesePage() -> impl IntoView {
    view! {
        <PageMeta
            title=page_title("日本語 Japanese")
            description="My journey into Japanese: JLPT progress, favorite words and learning resources."
        />
        <main class="page-container">
            <PageHeader glyph="🇯🇵" title="日本語">
                "My journey into Japanese - a language that reveals a different way of seeing "
                "and experiencing the world."
            </PageHeader>

            <section class="japanese-section">
                <SectionTitle glyph="📊" title="JLPT Progress"/>
                <div class="jlpt-ladder">
                    {JLPT_LEVELS.iter().map(|level| view! { <JlptStep level=level/> }).collect_view()}
                </div>
            </section>

            <section class="japanese-section">
                <SectionTitle glyph="✨" title="Words I Love"/>
                <p class="japanese-section__intro">
                    "Some Japanese words capture feelings and concepts that don't have direct English "
                    "translations. These are a few that resonate with me."
                </p>
                <div class="card-grid card-grid--three">
                    {FAVORITE_WORDS
                        .iter()
                        .enumerate()
                        .map(|(index, word)| view! { <WordCard word=word index=index/> })
                        .collect_view()}
                </div>
            </section>

            <section class="japanese-section">
                <SectionTitle glyph="📚" title="Learning Resources"/>
                <div class="card-grid card-grid--four">
                    {RESOURCE_GROUPS.iter().map(|group| view! { <ResourceGroupCard group=group/> }).collect_view()}
                </div>
            </section>

            <section class="cta glass">
                <h2>"Want to learn more?"</h2>
                <p>"Follow the whole journey, milestones included, on the hyperfixation page."</p>
                <ButtonLink href=HYPERFIXATION_HREF variant=ButtonVariant::Primary size=ButtonSize::Lg>
                    "View Japanese Hyperfixation →"
                </ButtonLink>
            </section>
        </main>
    }
}

#[component]
fn JlptStep(level: &'static JlptLevel) -> impl IntoView {
    view! {
        <div class=format!("jlpt-step jlpt-step--{}", level.status.as_str())>
            <div class="jlpt-step__level">{level.level}</div>
            <div class="jlpt-step__description">{level.description}</div>
            {level.status.caption().map(|caption| view! { <div class="jlpt-step__caption">{caption}</div> })}
        </div>
    }
}

#[component]
fn WordCard(word: &'static FavoriteWord, index: usize) -> impl IntoView {
    view! {
        <Card class="word-card animate-fade-in-up" style=stagger_delay(index, 0.0)>
            <CardContent>
                <div class="word-card__word" lang="ja">{word.word}</div>
                <div class="word-card__reading" lang="ja">{word.reading}</div>
                <div class="word-card__meaning">{word.meaning}</div>
                <p class="word-card__note">{word.note}</p>
            </CardContent>
        </Card>
    }
}

#[component]
fn ResourceGroupCard(group: &'static ResourceGroup) -> impl IntoView {
    view! {
        <Card hover=false>
            <CardHeader>
                <CardTitle>
                    <Badge variant=BadgeVariant::Japanese>{group.category}</Badge>
                </CardTitle>
            </CardHeader>
            <CardContent>
                <ul class="resource-group">
                    {group
                        .items
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=item.url target="_blank" rel="noopener noreferrer">{item.name}</a>
                                    <span class="resource-group__description">{item.description}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::japanese::HYPERFIXATION_ID;

    #[test]
    fn call_to_action_targets_the_japanese_hyperfixation() {
        assert_eq!(HYPERFIXATION_HREF, format!("/hyperfixations/{HYPERFIXATION_ID}"));
        assert!(content::find_by_id(content::HYPERFIXATIONS, HYPERFIXATION_ID).is_ok());
    }
}
