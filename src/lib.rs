//! Fleet API: REST CRUD service for cars, drivers, and vehicles over a
//! JSON document store.

pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreBackend};
pub use docs::ApiDoc;
pub use error::AppError;
pub use models::{Car, Driver, Resource, Vehicle};
pub use routes::{api_routes, common_routes, common_routes_with_ready, docs_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{ensure_database_exists, DocumentStore, MemoryStore, PgDocumentStore};
