use std::result;

/// Invalid caller input. Lookups which find nothing are not errors, they
/// return `None` or an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("Longitude must be between -180 and 180 degrees, got {0}")]
    InvalidLongitude(f64),

    #[error("Radius must be greater than 0, got {0}")]
    InvalidRadius(f64),
}

pub type Result<T> = result::Result<T, SearchError>;
