//! PostgreSQL store: one table per collection, documents as JSONB keyed
//! by a UUID column. `created_at` preserves insertion order for listings.

use super::{with_id, DocumentStore, COLLECTIONS};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use uuid::Uuid;

pub struct PgDocumentStore {
    pool: PgPool,
    schema: String,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, schema: String) -> Self {
        Self { pool, schema }
    }

    /// Schema-qualified table name, e.g. "fleet.cars".
    fn qualified(&self, collection: &str) -> String {
        format!("{}.{}", self.schema, collection)
    }

    /// Create the schema and one table per collection if missing. Call
    /// once at startup, before serving requests.
    pub async fn ensure_collections(&self) -> Result<(), AppError> {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", self.schema))
            .execute(&self.pool)
            .await?;
        for collection in COLLECTIONS {
            let ddl = format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    id UUID PRIMARY KEY,
                    doc JSONB NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )
                "#,
                self.qualified(collection)
            );
            sqlx::query(&ddl).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, doc: Value) -> Result<Value, AppError> {
        let id = Uuid::new_v4();
        let doc = with_id(doc, id)?;
        let sql = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2) RETURNING doc",
            self.qualified(collection)
        );
        tracing::debug!(sql = %sql, %id, "insert");
        let row: (Value,) = sqlx::query_as(&sql)
            .bind(id)
            .bind(&doc)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        let sql = format!(
            "SELECT doc FROM {} ORDER BY created_at, id",
            self.qualified(collection)
        );
        tracing::debug!(sql = %sql, "find_all");
        let rows: Vec<(Value,)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, AppError> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", self.qualified(collection));
        tracing::debug!(sql = %sql, %id, "find_by_id");
        let row: Option<(Value,)> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(|r| r.0))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Value>, AppError> {
        let sql = format!(
            "SELECT doc FROM {} WHERE doc->>$1 = $2 ORDER BY created_at, id",
            self.qualified(collection)
        );
        tracing::debug!(sql = %sql, field, value, "find_by_field");
        let rows: Vec<(Value,)> = sqlx::query_as(&sql)
            .bind(field)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn replace_by_id(
        &self,
        collection: &str,
        id: Uuid,
        doc: Value,
    ) -> Result<Option<Value>, AppError> {
        let doc = with_id(doc, id)?;
        let sql = format!(
            "UPDATE {} SET doc = $2 WHERE id = $1 RETURNING doc",
            self.qualified(collection)
        );
        tracing::debug!(sql = %sql, %id, "replace_by_id");
        let row: Option<(Value,)> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&doc)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.0))
    }

    async fn merge_by_id(
        &self,
        collection: &str,
        id: Uuid,
        patch: Value,
    ) -> Result<Option<Value>, AppError> {
        let sql = format!(
            "UPDATE {} SET doc = doc || $2 WHERE id = $1 RETURNING doc",
            self.qualified(collection)
        );
        tracing::debug!(sql = %sql, %id, "merge_by_id");
        let row: Option<(Value,)> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&patch)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.0))
    }

    async fn delete_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING doc",
            self.qualified(collection)
        );
        tracing::debug!(sql = %sql, %id, "delete_by_id");
        let row: Option<(Value,)> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(|r| r.0))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not.
/// Connects to the default `postgres` database to run CREATE DATABASE.
/// Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
