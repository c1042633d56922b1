//! OpenAPI description assembled from the handler annotations.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ErrorBody, ErrorDetail};
use crate::models::{
    Car, CarPatch, Driver, DriverPatch, NewCar, NewDriver, NewVehicle, Vehicle, VehiclePatch,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet API",
        description = "CRUD service for cars, drivers, and vehicles."
    ),
    paths(
        crate::handlers::cars::create,
        crate::handlers::cars::list,
        crate::handlers::cars::read,
        crate::handlers::cars::find_by_driver,
        crate::handlers::cars::replace,
        crate::handlers::cars::merge,
        crate::handlers::cars::delete,
        crate::handlers::drivers::create,
        crate::handlers::drivers::list,
        crate::handlers::drivers::read,
        crate::handlers::drivers::replace,
        crate::handlers::drivers::merge,
        crate::handlers::drivers::delete,
        crate::handlers::vehicles::create,
        crate::handlers::vehicles::list,
        crate::handlers::vehicles::read,
        crate::handlers::vehicles::replace,
        crate::handlers::vehicles::merge,
        crate::handlers::vehicles::delete,
    ),
    components(schemas(
        Car,
        NewCar,
        CarPatch,
        Driver,
        NewDriver,
        DriverPatch,
        Vehicle,
        NewVehicle,
        VehiclePatch,
        ErrorBody,
        ErrorDetail,
    )),
    modifiers(&ApiKeyScheme),
    tags(
        (name = "cars", description = "Cars registered to drivers"),
        (name = "drivers", description = "Fleet drivers"),
        (name = "vehicles", description = "Fleet vehicles"),
    )
)]
pub struct ApiDoc;

/// Documents the `appid` header key expected by clients. The handlers do
/// not check it.
struct ApiKeyScheme;

impl Modify for ApiKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "app_id",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "appid",
                "API key to authorize requests.",
            ))),
        );
    }
}
