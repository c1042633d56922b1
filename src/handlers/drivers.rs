//! Driver CRUD handlers.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::extract::ApiJson;
use crate::models::{Driver, DriverPatch, NewDriver};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// Create a driver
#[utoipa::path(
    post,
    path = "/api/drivers",
    request_body = NewDriver,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 400, description = "Missing or mistyped field", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "drivers",
    security(("app_id" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewDriver>,
) -> Result<(StatusCode, Json<Driver>), AppError> {
    let driver = CrudService::create::<Driver>(state.store.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

/// List all drivers
#[utoipa::path(
    get,
    path = "/api/drivers",
    responses(
        (status = 200, description = "All drivers", body = [Driver]),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "drivers",
    security(("app_id" = []))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let drivers = CrudService::list::<Driver>(state.store.as_ref()).await?;
    Ok(Json(drivers))
}

/// Fetch a driver by id
#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    params(("id" = String, Path, description = "The driver id")),
    responses(
        (status = 200, description = "The driver", body = Driver),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No driver with this id", body = ErrorBody),
    ),
    tag = "drivers",
    security(("app_id" = []))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Driver>, AppError> {
    let id = parse_id(&id)?;
    let driver = CrudService::read::<Driver>(state.store.as_ref(), id).await?;
    Ok(Json(driver))
}

/// Replace a driver
#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    params(("id" = String, Path, description = "The driver id")),
    request_body = NewDriver,
    responses(
        (status = 200, description = "Driver replaced", body = Driver),
        (status = 400, description = "Malformed id or invalid body", body = ErrorBody),
        (status = 404, description = "No driver with this id", body = ErrorBody),
    ),
    tag = "drivers",
    security(("app_id" = []))
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewDriver>,
) -> Result<Json<Driver>, AppError> {
    let id = parse_id(&id)?;
    let driver = CrudService::replace::<Driver>(state.store.as_ref(), id, &body).await?;
    Ok(Json(driver))
}

/// Update some fields of a driver
#[utoipa::path(
    patch,
    path = "/api/drivers/{id}",
    params(("id" = String, Path, description = "The driver id")),
    request_body = DriverPatch,
    responses(
        (status = 200, description = "Driver updated", body = Driver),
        (status = 400, description = "Malformed id or invalid body", body = ErrorBody),
        (status = 404, description = "No driver with this id", body = ErrorBody),
    ),
    tag = "drivers",
    security(("app_id" = []))
)]
pub async fn merge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<DriverPatch>,
) -> Result<Json<Driver>, AppError> {
    let id = parse_id(&id)?;
    let driver = CrudService::merge::<Driver>(state.store.as_ref(), id, &patch).await?;
    Ok(Json(driver))
}

/// Delete a driver
#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    params(("id" = String, Path, description = "The driver id")),
    responses(
        (status = 200, description = "The removed driver", body = Driver),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No driver with this id", body = ErrorBody),
    ),
    tag = "drivers",
    security(("app_id" = []))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Driver>, AppError> {
    let id = parse_id(&id)?;
    let driver = CrudService::delete::<Driver>(state.store.as_ref(), id).await?;
    Ok(Json(driver))
}
