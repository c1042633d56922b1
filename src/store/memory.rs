//! In-memory store: each collection is an insertion-ordered vec behind an
//! RwLock. Backs `STORE=memory` runs and the integration tests. The lock
//! is never held across an await.

use super::{with_id, DocumentStore, COLLECTIONS};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

pub struct MemoryStore {
    collections: RwLock<HashMap<&'static str, Vec<(Uuid, Value)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let mut collections = HashMap::new();
        for name in COLLECTIONS {
            collections.insert(*name, Vec::new());
        }
        Self {
            collections: RwLock::new(collections),
        }
    }

    fn read(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<&'static str, Vec<(Uuid, Value)>>> {
        self.collections.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<&'static str, Vec<(Uuid, Value)>>> {
        self.collections.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_collection(collection: &str) -> AppError {
    AppError::BadRequest(format!("unknown collection '{}'", collection))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, doc: Value) -> Result<Value, AppError> {
        let id = Uuid::new_v4();
        let doc = with_id(doc, id)?;
        let mut guard = self.write();
        let records = guard
            .get_mut(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        records.push((id, doc.clone()));
        Ok(doc)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        let guard = self.read();
        let records = guard
            .get(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        Ok(records.iter().map(|(_, doc)| doc.clone()).collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, AppError> {
        let guard = self.read();
        let records = guard
            .get(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        Ok(records
            .iter()
            .find(|(record_id, _)| *record_id == id)
            .map(|(_, doc)| doc.clone()))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Value>, AppError> {
        let guard = self.read();
        let records = guard
            .get(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        Ok(records
            .iter()
            .filter(|(_, doc)| doc.get(field).and_then(Value::as_str) == Some(value))
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn replace_by_id(
        &self,
        collection: &str,
        id: Uuid,
        doc: Value,
    ) -> Result<Option<Value>, AppError> {
        let doc = with_id(doc, id)?;
        let mut guard = self.write();
        let records = guard
            .get_mut(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        match records.iter_mut().find(|(record_id, _)| *record_id == id) {
            Some((_, stored)) => {
                *stored = doc.clone();
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }

    async fn merge_by_id(
        &self,
        collection: &str,
        id: Uuid,
        patch: Value,
    ) -> Result<Option<Value>, AppError> {
        let patch = match patch {
            Value::Object(map) => map,
            _ => return Err(AppError::BadRequest("patch must be a JSON object".into())),
        };
        let mut guard = self.write();
        let records = guard
            .get_mut(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        match records.iter_mut().find(|(record_id, _)| *record_id == id) {
            Some((_, stored)) => {
                if let Value::Object(fields) = stored {
                    for (key, value) in patch {
                        fields.insert(key, value);
                    }
                }
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, AppError> {
        let mut guard = self.write();
        let records = guard
            .get_mut(collection)
            .ok_or_else(|| unknown_collection(collection))?;
        match records.iter().position(|(record_id, _)| *record_id == id) {
            Some(index) => Ok(Some(records.remove(index).1)),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id_of(doc: &Value) -> Uuid {
        doc.get("id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("stored doc has a uuid id")
    }

    #[tokio::test]
    async fn insert_assigns_id_and_preserves_fields() {
        let store = MemoryStore::new();
        let doc = store
            .insert("cars", json!({"make": "Honda", "year": 2018}))
            .await
            .unwrap();
        assert_eq!(doc["make"], "Honda");
        assert_eq!(doc["year"], 2018);
        let id = id_of(&doc);
        let found = store.find_by_id("cars", id).await.unwrap();
        assert_eq!(found, Some(doc));
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let store = MemoryStore::new();
        for n in 0..3 {
            store.insert("drivers", json!({"rating": n})).await.unwrap();
        }
        let all = store.find_all("drivers").await.unwrap();
        let ratings: Vec<i64> = all.iter().map(|d| d["rating"].as_i64().unwrap()).collect();
        assert_eq!(ratings, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn merge_overlays_only_supplied_fields() {
        let store = MemoryStore::new();
        let doc = store
            .insert("cars", json!({"make": "Honda", "status": "standard"}))
            .await
            .unwrap();
        let id = id_of(&doc);
        let merged = store
            .merge_by_id("cars", id, json!({"status": "active"}))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(merged["make"], "Honda");
        assert_eq!(merged["status"], "active");
        assert_eq!(id_of(&merged), id);
    }

    #[tokio::test]
    async fn replace_keeps_the_stored_id() {
        let store = MemoryStore::new();
        let doc = store.insert("cars", json!({"make": "Honda"})).await.unwrap();
        let id = id_of(&doc);
        let replaced = store
            .replace_by_id("cars", id, json!({"make": "Toyota"}))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced["make"], "Toyota");
        assert_eq!(id_of(&replaced), id);
    }

    #[tokio::test]
    async fn update_and_delete_miss_return_none() {
        let store = MemoryStore::new();
        let absent = Uuid::new_v4();
        assert!(store
            .replace_by_id("cars", absent, json!({}))
            .await
            .unwrap()
            .is_none());
        assert!(store
            .merge_by_id("cars", absent, json!({}))
            .await
            .unwrap()
            .is_none());
        assert!(store.delete_by_id("cars", absent).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_and_returns_the_doc() {
        let store = MemoryStore::new();
        let doc = store.insert("vehicles", json!({"brand": "Honda"})).await.unwrap();
        let id = id_of(&doc);
        let removed = store.delete_by_id("vehicles", id).await.unwrap();
        assert_eq!(removed, Some(doc));
        assert!(store.find_by_id("vehicles", id).await.unwrap().is_none());
        assert!(store.delete_by_id("vehicles", id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_field_matches_exact_strings() {
        let store = MemoryStore::new();
        store
            .insert("cars", json!({"driverId": "d1", "make": "Honda"}))
            .await
            .unwrap();
        store
            .insert("cars", json!({"driverId": "d2", "make": "Toyota"}))
            .await
            .unwrap();
        store
            .insert("cars", json!({"driverId": "d1", "make": "Ford"}))
            .await
            .unwrap();
        let matched = store.find_by_field("cars", "driverId", "d1").await.unwrap();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|c| c["driverId"] == "d1"));
        let none = store.find_by_field("cars", "driverId", "d9").await.unwrap();
        assert!(none.is_empty());
    }
}
