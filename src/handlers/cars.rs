//! Car CRUD handlers.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::extract::ApiJson;
use crate::models::{Car, CarPatch, NewCar};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// Create a car
#[utoipa::path(
    post,
    path = "/api/cars",
    request_body = NewCar,
    responses(
        (status = 201, description = "Car created", body = Car),
        (status = 400, description = "Missing or mistyped field", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewCar>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = CrudService::create::<Car>(state.store.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// List all cars
#[utoipa::path(
    get,
    path = "/api/cars",
    responses(
        (status = 200, description = "All cars", body = [Car]),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = CrudService::list::<Car>(state.store.as_ref()).await?;
    Ok(Json(cars))
}

/// Fetch a car by id
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    params(("id" = String, Path, description = "The car id")),
    responses(
        (status = 200, description = "The car", body = Car),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No car with this id", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let id = parse_id(&id)?;
    let car = CrudService::read::<Car>(state.store.as_ref(), id).await?;
    Ok(Json(car))
}

/// List a driver's cars
///
/// A driver with no cars is a valid state: the response is an empty array
/// with status 200, not a 404.
#[utoipa::path(
    get,
    path = "/api/cars/findByDriverId/{driverId}",
    params(("driverId" = String, Path, description = "The driver id")),
    responses(
        (status = 200, description = "Cars registered to the driver, possibly none", body = [Car]),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn find_by_driver(
    State(state): State<AppState>,
    Path(driver_id): Path<String>,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars =
        CrudService::find_by_field::<Car>(state.store.as_ref(), "driverId", &driver_id).await?;
    Ok(Json(cars))
}

/// Replace a car
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    params(("id" = String, Path, description = "The car id")),
    request_body = NewCar,
    responses(
        (status = 200, description = "Car replaced", body = Car),
        (status = 400, description = "Malformed id or invalid body", body = ErrorBody),
        (status = 404, description = "No car with this id", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewCar>,
) -> Result<Json<Car>, AppError> {
    let id = parse_id(&id)?;
    let car = CrudService::replace::<Car>(state.store.as_ref(), id, &body).await?;
    Ok(Json(car))
}

/// Update some fields of a car
#[utoipa::path(
    patch,
    path = "/api/cars/{id}",
    params(("id" = String, Path, description = "The car id")),
    request_body = CarPatch,
    responses(
        (status = 200, description = "Car updated", body = Car),
        (status = 400, description = "Malformed id or invalid body", body = ErrorBody),
        (status = 404, description = "No car with this id", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn merge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<CarPatch>,
) -> Result<Json<Car>, AppError> {
    let id = parse_id(&id)?;
    let car = CrudService::merge::<Car>(state.store.as_ref(), id, &patch).await?;
    Ok(Json(car))
}

/// Delete a car
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    params(("id" = String, Path, description = "The car id")),
    responses(
        (status = 200, description = "The removed car", body = Car),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No car with this id", body = ErrorBody),
    ),
    tag = "cars",
    security(("app_id" = []))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let id = parse_id(&id)?;
    let car = CrudService::delete::<Car>(state.store.as_ref(), id).await?;
    Ok(Json(car))
}
