use super::*;

fn path(collection: &str) -> Path<String> {
    Path(collection.to_owned())
}

fn record_path(collection: &str, id: &str) -> Path<(String, String)> {
    Path((collection.to_owned(), id.to_owned()))
}

// =============================================================================
// content_error_to_status
// =============================================================================

#[test]
fn content_error_to_status_maps_not_found() {
    let err = ContentError::NotFound { collection: Collection::Proofs, id: "nope".into() };
    assert_eq!(content_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn content_error_to_status_maps_unknown_collection() {
    let err = ContentError::UnknownCollection("boards".into());
    assert_eq!(content_error_to_status(&err), StatusCode::NOT_FOUND);
}

// =============================================================================
// list_collection
// =============================================================================

#[tokio::test]
async fn list_collection_returns_every_record_in_order() {
    let Json(value) = list_collection(path("proofs")).await.unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), PROOFS.len());
    assert_eq!(items[0]["id"], PROOFS[0].id);
}

#[tokio::test]
async fn list_collection_covers_every_table() {
    for collection in Collection::ALL {
        let Json(value) = list_collection(path(collection.as_str())).await.unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(collection.len()), "{collection}");
    }
}

#[tokio::test]
async fn list_collection_rejects_unknown_names() {
    let err = list_collection(path("boards")).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

// =============================================================================
// get_record
// =============================================================================

#[tokio::test]
async fn get_record_returns_one_hyperfixation() {
    let Json(value) = get_record(record_path("hyperfixations", "japanese-language")).await.unwrap();
    assert_eq!(value["title"], "Japanese Language");
    assert_eq!(value["status"], "current");
    assert_eq!(value["milestones"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn get_record_returns_a_venn_diagram() {
    let Json(value) = get_record(record_path("venn", "skills")).await.unwrap();
    assert_eq!(value["circles"][0]["id"], "code");
}

#[tokio::test]
async fn get_record_misses_are_not_found() {
    let err = get_record(record_path("videos", "missing")).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_record_unknown_collection_is_not_found() {
    let err = get_record(record_path("boards", "neural-garden")).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
