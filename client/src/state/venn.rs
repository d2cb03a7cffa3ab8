//! Selection model for the interactive `/venn` page.
//!
//! DESIGN
//! ======
//! Hover and selection are tracked separately. Hover only drives highlight
//! styling; the details panel reads the selection alone, so what it shows
//! depends on the last selected key and never on the path of clicks that led
//! there.

use content::VennDiagram;
use content::venn::{SectionView, VENN_DIAGRAMS};

#[cfg(test)]
#[path = "venn_test.rs"]
mod venn_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VennSelection {
    diagram: &'static VennDiagram,
    hovered: Option<&'static str>,
    selected: Option<&'static str>,
}

impl VennSelection {
    pub fn new(diagram: &'static VennDiagram) -> Self {
        Self { diagram, hovered: None, selected: None }
    }

    pub fn diagram(&self) -> &'static VennDiagram {
        self.diagram
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    /// Switch to the diagram with `id`, dropping hover and selection.
    /// Unknown ids leave the state untouched.
    pub fn select_diagram(&mut self, id: &str) {
        if let Some(diagram) = VENN_DIAGRAMS.iter().find(|d| d.id == id) {
            self.diagram = diagram;
            self.hovered = None;
            self.selected = None;
        }
    }

    /// Shape click: select `key`, or clear it when it is already selected.
    pub fn toggle(&mut self, key: &'static str) {
        if self.selected == Some(key) {
            self.selected = None;
        } else if self.diagram.section(key).is_some() {
            self.selected = Some(key);
        }
    }

    /// Section list click: always selects.
    pub fn select(&mut self, key: &'static str) {
        if self.diagram.section(key).is_some() {
            self.selected = Some(key);
        }
    }

    pub fn hover(&mut self, key: &'static str) {
        self.hovered = Some(key);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected == Some(key)
    }

    /// Hovered or selected: the shape renders emphasized.
    pub fn is_emphasized(&self, key: &str) -> bool {
        self.hovered == Some(key) || self.is_selected(key)
    }

    /// What the details panel shows, if anything is selected.
    pub fn selected_section(&self) -> Option<SectionView> {
        self.selected.and_then(|key| self.diagram.section(key))
    }
}
