//! Milestone progress bar.

use content::Progress;
use leptos::prelude::*;

/// CSS width of the filled part, from the exact fraction.
pub fn fill_width(progress: Progress) -> String {
    format!("width: {:.2}%", progress.fraction() * 100.0)
}

/// Compact bar with a `completed/total` caption, used on list cards.
#[component]
pub fn MilestoneBar(progress: Progress) -> impl IntoView {
    view! {
        <div class="progress progress--compact">
            <div class="progress__caption">
                <span>"Milestones"</span>
                <span class="progress__count">{format!("{}/{}", progress.completed, progress.total)}</span>
            </div>
            <div class="progress__track">
                <div class="progress__fill" style=fill_width(progress)></div>
            </div>
        </div>
    }
}

/// Detail page panel: rounded percent, bar, and a sentence.
#[component]
pub fn ProgressPanel(progress: Progress) -> impl IntoView {
    view! {
        <div class="progress progress--panel glass">
            <div class="progress__caption">
                <h3>"Progress"</h3>
                <span class="progress__percent">{format!("{}%", progress.percent())}</span>
            </div>
            <div class="progress__track progress__track--thick">
                <div class="progress__fill progress__fill--gradient" style=fill_width(progress)></div>
            </div>
            <p class="progress__summary">
                {format!("{} of {} milestones completed", progress.completed, progress.total)}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_uses_exact_fraction() {
        assert_eq!(fill_width(Progress { completed: 4, total: 6 }), "width: 66.67%");
        assert_eq!(fill_width(Progress { completed: 0, total: 0 }), "width: 0.00%");
        assert_eq!(fill_width(Progress { completed: 3, total: 3 }), "width: 100.00%");
    }
}
