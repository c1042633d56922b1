//! Car records. `driverId` is a free-text reference to a driver; it is
//! never validated against the driver collection.

use super::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted car. `id` is assigned by the store on creation and is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    #[schema(example = "3f8e4a2c-5d0b-4b8e-9c3a-7f1d2e6b5a90")]
    pub driver_id: String,
    #[schema(example = "Honda")]
    pub make: String,
    #[schema(example = "Civic")]
    pub model: String,
    #[schema(example = "AX1234KA")]
    pub number: String,
    #[schema(example = 2018)]
    pub year: i32,
    #[schema(example = "standard")]
    pub status: String,
}

/// Fields accepted when creating or replacing a car. Unknown fields in the
/// request body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub driver_id: String,
    pub make: String,
    pub model: String,
    pub number: String,
    pub year: i32,
    pub status: String,
}

/// Partial update for a car; only the supplied fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CarPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Resource for Car {
    const COLLECTION: &'static str = "cars";
    type Create = NewCar;
    type Patch = CarPatch;
}
