//! HTTP handlers, one module per resource.

pub mod cars;
pub mod drivers;
pub mod vehicles;

use crate::error::AppError;
use uuid::Uuid;

/// Parse a path identifier. A malformed id is a 400, not a 404: the
/// record cannot be said to be missing when the id could never exist.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id)))
}
