//! Document title and description strings.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

pub const SITE_NAME: &str = "Kazuki Girand";
pub const SITE_TITLE: &str = "Kazuki Girand | Japanese • Art • Math";
pub const SITE_DESCRIPTION: &str = "Personal portfolio showcasing the beautiful intersections of Japanese, Art, and Mathematics. Explore mathematical proofs, creative works, and hyperfixations.";

/// `Favorite Proofs` becomes `Favorite Proofs | Kazuki Girand`.
pub fn page_title(name: &str) -> String {
    format!("{name} | {SITE_NAME}")
}

/// Title for a hyperfixation detail page.
pub fn hyperfixation_title(name: &str) -> String {
    page_title(&format!("{name} | Hyperfixations"))
}
