//! Vehicle CRUD handlers.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::extract::ApiJson;
use crate::models::{NewVehicle, Vehicle, VehiclePatch};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/api/vehicles",
    request_body = NewVehicle,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Missing or mistyped field", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "vehicles",
    security(("app_id" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewVehicle>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    let vehicle = CrudService::create::<Vehicle>(state.store.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// List all vehicles
#[utoipa::path(
    get,
    path = "/api/vehicles",
    responses(
        (status = 200, description = "All vehicles", body = [Vehicle]),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "vehicles",
    security(("app_id" = []))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let vehicles = CrudService::list::<Vehicle>(state.store.as_ref()).await?;
    Ok(Json(vehicles))
}

/// Fetch a vehicle by id
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    params(("id" = String, Path, description = "The vehicle id")),
    responses(
        (status = 200, description = "The vehicle", body = Vehicle),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No vehicle with this id", body = ErrorBody),
    ),
    tag = "vehicles",
    security(("app_id" = []))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let id = parse_id(&id)?;
    let vehicle = CrudService::read::<Vehicle>(state.store.as_ref(), id).await?;
    Ok(Json(vehicle))
}

/// Replace a vehicle
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    params(("id" = String, Path, description = "The vehicle id")),
    request_body = NewVehicle,
    responses(
        (status = 200, description = "Vehicle replaced", body = Vehicle),
        (status = 400, description = "Malformed id or invalid body", body = ErrorBody),
        (status = 404, description = "No vehicle with this id", body = ErrorBody),
    ),
    tag = "vehicles",
    security(("app_id" = []))
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewVehicle>,
) -> Result<Json<Vehicle>, AppError> {
    let id = parse_id(&id)?;
    let vehicle = CrudService::replace::<Vehicle>(state.store.as_ref(), id, &body).await?;
    Ok(Json(vehicle))
}

/// Update some fields of a vehicle
#[utoipa::path(
    patch,
    path = "/api/vehicles/{id}",
    params(("id" = String, Path, description = "The vehicle id")),
    request_body = VehiclePatch,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 400, description = "Malformed id or invalid body", body = ErrorBody),
        (status = 404, description = "No vehicle with this id", body = ErrorBody),
    ),
    tag = "vehicles",
    security(("app_id" = []))
)]
pub async fn merge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<VehiclePatch>,
) -> Result<Json<Vehicle>, AppError> {
    let id = parse_id(&id)?;
    let vehicle = CrudService::merge::<Vehicle>(state.store.as_ref(), id, &patch).await?;
    Ok(Json(vehicle))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    params(("id" = String, Path, description = "The vehicle id")),
    responses(
        (status = 200, description = "The removed vehicle", body = Vehicle),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No vehicle with this id", body = ErrorBody),
    ),
    tag = "vehicles",
    security(("app_id" = []))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let id = parse_id(&id)?;
    let vehicle = CrudService::delete::<Vehicle>(state.store.as_ref(), id).await?;
    Ok(Json(vehicle))
}
