use super::*;
use content::{PROOFS, find_by_id};

#[test]
fn bold_renders_as_strong() {
    let html = render_markdown_html("**Contradiction!**");
    assert_eq!(html, "<p><strong>Contradiction!</strong></p>\n");
}

#[test]
fn blank_lines_separate_paragraphs() {
    let html = render_markdown_html("one\n\ntwo");
    assert_eq!(html, "<p>one</p>\n<p>two</p>\n");
}

#[test]
fn single_newlines_become_line_breaks() {
    let html = render_markdown_html("4k² = 2q²\n2k² = q²");
    assert_eq!(html, "<p>4k² = 2q²<br />\n2k² = q²</p>\n");
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("safe <script>alert(1)</script> text");
    assert!(!html.contains("<script>"));
    assert!(html.contains("safe"));
}

#[test]
fn shipped_proof_renders_heading_in_bold() {
    let proof = find_by_id(PROOFS, "sqrt2-irrational").unwrap();
    let html = render_markdown_html(proof.proof);
    assert!(html.starts_with("<p><strong>Proof by contradiction:</strong></p>"));
    assert!(html.contains("∎"));
}
