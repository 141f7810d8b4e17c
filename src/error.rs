use crate::facility::{FacilityKind, FacilityName};
use thiserror::Error;

/// Hard failures: the caller has to correct its input before retrying.
#[derive(Debug, Error)]
pub enum ApronError {
    #[error("{field} is required")]
    InvalidInput { field: &'static str },

    #[error("invalid timestamp {0:?}, expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp(String),

    #[error("facility {0} is listed more than once")]
    DuplicateFacility(FacilityName),

    #[error("could not read layout: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed layout: {0}")]
    Json(#[from] serde_json::Error),
}

/// Soft failures. An operation that returns one of these left every
/// registry and the arrival log untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denied {
    #[error("registry has no facilities")]
    EmptyRegistry,

    #[error("no aircraft given")]
    MissingAircraft,

    #[error("no {0}s available")]
    NoneAvailable(FacilityKind),

    #[error("unknown facility {0}")]
    UnknownFacility(FacilityName),

    #[error("no aircraft have arrived")]
    NoArrivals,

    #[error("no aircraft waiting for assignment")]
    NoneWaiting,
}
