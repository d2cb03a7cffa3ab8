use super::*;

#[test]
fn paragraphs_split_on_blank_lines() {
    let text = "First line\nstill first\n\nSecond\n\n\nThird";
    let got: Vec<_> = paragraphs(text).collect();
    assert_eq!(got, vec!["First line\nstill first", "Second", "Third"]);
}

#[test]
fn paragraphs_of_empty_text_is_empty() {
    assert_eq!(paragraphs("").count(), 0);
}

#[test]
fn capitalize_first_character() {
    assert_eq!(capitalize("generative"), "Generative");
    assert_eq!(capitalize("All"), "All");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("ärger"), "Ärger");
}
