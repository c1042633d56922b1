//! Router assembly.

pub mod common;
pub mod entity;

pub use common::{common_routes, common_routes_with_ready};
pub use entity::api_routes;

use crate::docs::ApiDoc;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves the generated OpenAPI document: GET /api-docs/openapi.json.
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
