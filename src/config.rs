//! Process configuration from environment.

/// Which store adapter backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Listen address, e.g. "0.0.0.0:9000".
    pub bind_addr: String,
    /// PostgreSQL schema holding the collection tables.
    pub schema: String,
    pub backend: StoreBackend,
}

impl AppConfig {
    /// Read configuration from the environment, with defaults for local
    /// development. `STORE=memory` selects the in-process store.
    pub fn from_env() -> Self {
        let backend = match std::env::var("STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            _ => StoreBackend::Postgres,
        };
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/fleet".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".into()),
            schema: std::env::var("FLEET_SCHEMA").unwrap_or_else(|_| "fleet".into()),
            backend,
        }
    }
}
