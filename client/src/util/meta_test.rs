use super::*;

#[test]
fn page_title_appends_site_name() {
    assert_eq!(page_title("Favorite Proofs"), "Favorite Proofs | Kazuki Girand");
}

#[test]
fn hyperfixation_title_names_section() {
    assert_eq!(
        hyperfixation_title("Generative Art"),
        "Generative Art | Hyperfixations | Kazuki Girand"
    );
}
