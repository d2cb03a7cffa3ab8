//! `GET /api/{collection}` and `GET /api/{collection}/{id}`.
//!
//! Every table is `'static`, so handlers take no state: they parse the
//! collection name, serialize, and map content errors to status codes.

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use content::{
    ARTWORKS, Collection, ContentError, HYPERFIXATIONS, PROOFS, Record, VENN_DIAGRAMS, VIDEOS, find_by_id,
};
use serde::Serialize;
use serde_json::Value;

/// Map a content lookup error to an HTTP status.
pub(crate) fn content_error_to_status(err: &ContentError) -> StatusCode {
    match err {
        ContentError::NotFound { .. } | ContentError::UnknownCollection(_) => StatusCode::NOT_FOUND,
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, StatusCode> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(error = %e, "content serialization failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn lookup<T: Record + Serialize>(items: &[T], id: &str) -> Result<Value, StatusCode> {
    let record = find_by_id(items, id).map_err(|e| {
        tracing::debug!(error = %e, "content lookup miss");
        content_error_to_status(&e)
    })?;
    to_json(record)
}

fn parse_collection(raw: &str) -> Result<Collection, StatusCode> {
    raw.parse::<Collection>().map_err(|e| {
        tracing::debug!(error = %e, "unknown collection");
        content_error_to_status(&e)
    })
}

/// `GET /api/:collection`: every record, in authored order.
pub async fn list_collection(Path(collection): Path<String>) -> Result<Json<Value>, StatusCode> {
    let value = match parse_collection(&collection)? {
        Collection::Artworks => to_json(ARTWORKS)?,
        Collection::Proofs => to_json(PROOFS)?,
        Collection::Hyperfixations => to_json(HYPERFIXATIONS)?,
        Collection::Videos => to_json(VIDEOS)?,
        Collection::Venn => to_json(VENN_DIAGRAMS)?,
    };
    Ok(Json(value))
}

/// `GET /api/:collection/:id`: one record.
pub async fn get_record(Path((collection, id)): Path<(String, String)>) -> Result<Json<Value>, StatusCode> {
    let value = match parse_collection(&collection)? {
        Collection::Artworks => lookup(ARTWORKS, &id)?,
        Collection::Proofs => lookup(PROOFS, &id)?,
        Collection::Hyperfixations => lookup(HYPERFIXATIONS, &id)?,
        Collection::Videos => lookup(VIDEOS, &id)?,
        Collection::Venn => lookup(VENN_DIAGRAMS, &id)?,
    };
    Ok(Json(value))
}

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;
