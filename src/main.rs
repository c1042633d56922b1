//! Fleet API server: builds the store adapter from the environment,
//! ensures the backing collections exist, and mounts common, docs, and
//! resource routes.

use axum::Router;
use fleet_api::{
    api_routes, common_routes_with_ready, docs_routes, ensure_database_exists, AppConfig,
    AppState, DocumentStore, MemoryStore, PgDocumentStore, StoreBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fleet_api=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let store: Arc<dyn DocumentStore> = match config.backend {
        StoreBackend::Memory => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database_url)
                .await?;
            let store = PgDocumentStore::new(pool, config.schema.clone());
            store.ensure_collections().await?;
            Arc::new(store)
        }
    };
    let state = AppState::new(store);

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .nest("/api", api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
