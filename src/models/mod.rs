//! Typed resource models: one record, create, and patch struct per entity.

pub mod car;
pub mod driver;
pub mod vehicle;

pub use car::{Car, CarPatch, NewCar};
pub use driver::{Driver, DriverPatch, NewDriver};
pub use vehicle::{NewVehicle, Vehicle, VehiclePatch};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A CRUD-managed entity kind: ties a record type to its collection name
/// and to the payload shapes accepted on create/replace and on merge.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection (table) name in the document store.
    const COLLECTION: &'static str;
    /// Full payload for POST and PUT; all required fields must be present.
    type Create: Serialize + DeserializeOwned + Send + Sync;
    /// Partial payload for PATCH; absent fields keep their stored values.
    type Patch: Serialize + DeserializeOwned + Send + Sync;
}
