//! Landing page navigation state.

use content::home::{HomeCircle, find_circle};

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Delay between a circle click and the route change; the diagram fades out
/// meanwhile.
pub const NAVIGATE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HomeNav {
    hovered: Option<&'static str>,
    /// Route chosen by a click; set at most once per page visit.
    target: Option<&'static str>,
}

impl HomeNav {
    pub fn hover(&mut self, id: &'static str) {
        self.hovered = Some(id);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered == Some(id)
    }

    /// Circle under the pointer, for the info card.
    pub fn hovered_circle(&self) -> Option<&'static HomeCircle> {
        self.hovered.and_then(find_circle)
    }

    /// True once a navigation has started and the diagram is fading out.
    pub fn is_leaving(&self) -> bool {
        self.target.is_some()
    }

    /// Route the page is leaving toward.
    pub fn target(&self) -> Option<&'static str> {
        self.target
    }

    /// Start leaving toward `id`'s route. Returns the route to open after
    /// [`NAVIGATE_DELAY_MS`], or `None` when a navigation is already pending
    /// or the id names no circle.
    pub fn begin_navigation(&mut self, id: &str) -> Option<&'static str> {
        if self.target.is_some() {
            return None;
        }
        let circle = find_circle(id)?;
        self.target = Some(circle.route);
        self.target
    }
}

/// Keys that activate a focused circle.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
