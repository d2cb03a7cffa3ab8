//! Small text helpers for authored prose.

/// Split authored text on blank lines. Empty paragraphs are dropped.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

/// Upper-case the first character: `generative` becomes `Generative`.
#[must_use]
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
