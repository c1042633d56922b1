//! Resource CRUD routes. Mounted under /api by the caller, so the full
//! paths are /api/cars, /api/drivers, /api/vehicles.

use crate::handlers::{cars, drivers, vehicles};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/cars", get(cars::list).post(cars::create))
        .route("/cars/findByDriverId/:driver_id", get(cars::find_by_driver))
        .route(
            "/cars/:id",
            get(cars::read)
                .put(cars::replace)
                .patch(cars::merge)
                .delete(cars::delete),
        )
        .route("/drivers", get(drivers::list).post(drivers::create))
        .route(
            "/drivers/:id",
            get(drivers::read)
                .put(drivers::replace)
                .patch(drivers::merge)
                .delete(drivers::delete),
        )
        .route("/vehicles", get(vehicles::list).post(vehicles::create))
        .route(
            "/vehicles/:id",
            get(vehicles::read)
                .put(vehicles::replace)
                .patch(vehicles::merge)
                .delete(vehicles::delete),
        )
        .with_state(state)
}
