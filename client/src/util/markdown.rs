//! Markdown rendering for proof bodies.
//!
//! TRADE-OFFS
//! ==========
//! Proof text is authored with hard line breaks that carry meaning (one
//! equation per line), so soft breaks render as `<br />`. Raw HTML in the
//! source is dropped rather than escaped.

use pulldown_cmark::{Event, Options, Parser, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render markdown to an HTML fragment suitable for `inner_html`.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
