//! Document store adapters: id-keyed CRUD and equality-filtered queries
//! over untyped JSON records.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, PgDocumentStore};

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Collections the service persists. Fixed at compile time; the names are
/// interpolated into DDL and queries and must stay valid identifiers.
pub const COLLECTIONS: &[&str] = &["cars", "drivers", "vehicles"];

/// Async document store. One instance is constructed at startup and
/// injected into every handler through [`crate::state::AppState`].
///
/// Update and delete operations return `None` when no record matched the
/// id, so callers can surface the miss instead of silently succeeding.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new document, assigning it a fresh id. Returns the stored
    /// document, id included.
    async fn insert(&self, collection: &str, doc: Value) -> Result<Value, AppError>;

    /// All documents of a collection in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, AppError>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, AppError>;

    /// Documents whose top-level `field` equals `value` exactly (string
    /// equality), in insertion order. No match is an empty vec, not an error.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Value>, AppError>;

    /// Overwrite the document at `id` with `doc` (the stored id is kept).
    async fn replace_by_id(
        &self,
        collection: &str,
        id: Uuid,
        doc: Value,
    ) -> Result<Option<Value>, AppError>;

    /// Overlay the fields of `patch` onto the document at `id`; fields not
    /// present in `patch` are left unchanged.
    async fn merge_by_id(
        &self,
        collection: &str,
        id: Uuid,
        patch: Value,
    ) -> Result<Option<Value>, AppError>;

    /// Remove and return the document at `id`.
    async fn delete_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, AppError>;

    /// Cheap connectivity probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Set the document's `id` field, rejecting non-object documents.
pub(crate) fn with_id(doc: Value, id: Uuid) -> Result<Value, AppError> {
    match doc {
        Value::Object(mut map) => {
            map.insert("id".into(), Value::String(id.to_string()));
            Ok(Value::Object(map))
        }
        _ => Err(AppError::BadRequest("document must be a JSON object".into())),
    }
}
