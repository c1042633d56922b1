//! Driver records. Dates are free-form strings, matching what clients
//! already send (e.g. "23.10.1996").

use super::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: Uuid,
    #[schema(example = "Alex Ray")]
    pub name: String,
    #[schema(example = "23.10.1996")]
    pub birth_date: String,
    #[schema(example = "Valentinovskaya Street, 25")]
    pub address: String,
    #[schema(example = "Kharkiv")]
    pub city: String,
    #[schema(example = 10)]
    pub rating: i32,
    #[schema(example = "active")]
    pub status: String,
    /// Date the driver was registered with the fleet, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "12.01.2022")]
    pub registration_date: Option<String>,
}

/// Fields accepted when creating or replacing a driver.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDriver {
    pub name: String,
    pub birth_date: String,
    pub address: String,
    pub city: String,
    pub rating: i32,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
}

/// Partial update for a driver.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
}

impl Resource for Driver {
    const COLLECTION: &'static str = "drivers";
    type Create = NewDriver;
    type Patch = DriverPatch;
}
