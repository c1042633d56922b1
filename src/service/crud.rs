//! Generic CRUD execution against the document store. Handlers call these
//! with a concrete [`Resource`] type; encoding/decoding between the typed
//! models and the store's JSON records happens here.

use crate::error::AppError;
use crate::models::Resource;
use crate::store::DocumentStore;
use serde_json::Value;
use uuid::Uuid;

pub struct CrudService;

impl CrudService {
    /// Persist a new record from the full payload. Returns the stored
    /// record with its assigned id.
    pub async fn create<R: Resource>(
        store: &dyn DocumentStore,
        body: &R::Create,
    ) -> Result<R, AppError> {
        let doc = serde_json::to_value(body)?;
        let stored = store.insert(R::COLLECTION, doc).await?;
        decode(stored)
    }

    /// All records of the collection in insertion order; an empty
    /// collection yields an empty vec.
    pub async fn list<R: Resource>(store: &dyn DocumentStore) -> Result<Vec<R>, AppError> {
        let docs = store.find_all(R::COLLECTION).await?;
        docs.into_iter().map(decode).collect()
    }

    /// Fetch one record by id; an absent id is a `NotFound`.
    pub async fn read<R: Resource>(store: &dyn DocumentStore, id: Uuid) -> Result<R, AppError> {
        let doc = store
            .find_by_id(R::COLLECTION, id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        decode(doc)
    }

    /// Records whose `field` equals `value` exactly. No match is a valid
    /// state and yields an empty vec, never a `NotFound`.
    pub async fn find_by_field<R: Resource>(
        store: &dyn DocumentStore,
        field: &str,
        value: &str,
    ) -> Result<Vec<R>, AppError> {
        let docs = store.find_by_field(R::COLLECTION, field, value).await?;
        docs.into_iter().map(decode).collect()
    }

    /// Overwrite the record at `id` with the full payload. Zero records
    /// affected means the id does not exist: `NotFound`, not a silent 200.
    pub async fn replace<R: Resource>(
        store: &dyn DocumentStore,
        id: Uuid,
        body: &R::Create,
    ) -> Result<R, AppError> {
        let doc = serde_json::to_value(body)?;
        let stored = store
            .replace_by_id(R::COLLECTION, id, doc)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        decode(stored)
    }

    /// Overlay the supplied subset of fields onto the record at `id`;
    /// omitted fields keep their stored values. Same `NotFound` rule as
    /// [`Self::replace`].
    pub async fn merge<R: Resource>(
        store: &dyn DocumentStore,
        id: Uuid,
        patch: &R::Patch,
    ) -> Result<R, AppError> {
        let patch = serde_json::to_value(patch)?;
        let stored = store
            .merge_by_id(R::COLLECTION, id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        decode(stored)
    }

    /// Remove the record at `id` and return it. Deleting an absent id is a
    /// `NotFound`, so a repeated delete cannot report a second success.
    pub async fn delete<R: Resource>(store: &dyn DocumentStore, id: Uuid) -> Result<R, AppError> {
        let doc = store
            .delete_by_id(R::COLLECTION, id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        decode(doc)
    }
}

fn decode<R: Resource>(doc: Value) -> Result<R, AppError> {
    Ok(serde_json::from_value(doc)?)
}
