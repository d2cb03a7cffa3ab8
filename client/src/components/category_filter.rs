//! Row of category buttons driving a [`CategoryFilter`].

use leptos::prelude::*;

use crate::state::filter::{CategoryFilter, option_label};

/// Filter bar. `accent` names the CSS modifier used for the active button.
#[component]
pub fn CategoryFilterBar(filter: RwSignal<CategoryFilter>, accent: &'static str) -> impl IntoView {
    let options = filter.with_untracked(|f| f.options().to_vec());

    view! {
        <div class="filter-bar" role="toolbar" aria-label="Filter by category">
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class=format!("filter-bar__option filter-bar__option--{accent}")
                            class:filter-bar__option--active=move || filter.with(|f| f.is_selected(option))
                            aria-pressed=move || filter.with(|f| f.is_selected(option)).to_string()
                            on:click=move |_| filter.update(|f| f.select(option))
                        >
                            {option_label(option)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Message shown in place of an empty grid.
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
        </div>
    }
}
