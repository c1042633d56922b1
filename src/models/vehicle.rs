//! Vehicle records.

use super::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    #[schema(example = "standard")]
    pub category: String,
    #[schema(example = "Honda")]
    pub brand: String,
    #[schema(example = "AX1234KA")]
    pub number: String,
    #[schema(example = 2018)]
    pub production_year: i32,
    #[schema(example = "Alan Ray")]
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub category: String,
    pub brand: String,
    pub number: String,
    pub production_year: i32,
    pub owner: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VehiclePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Resource for Vehicle {
    const COLLECTION: &'static str = "vehicles";
    type Create = NewVehicle;
    type Patch = VehiclePatch;
}
