use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use serde_with;

pub mod airport;
pub mod basic_info;
pub mod codes;
pub mod coordinates;
pub mod data;
pub mod references;
pub mod region;

pub use airport::{Airport, AirportId, AirportType, UnknownAirportType};
pub use basic_info::BasicInfo;
pub use codes::Codes;
pub use coordinates::Coordinates;
pub use data::AirportData;
pub use references::{References, ScheduledService};
pub use region::Region;

/// Rows which are keyed by the airport id shared across all shards.
pub trait AirportRow {
    fn airport_id(&self) -> AirportId;
}

pub trait ExampleData {
    fn example_data() -> Self;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    pub distance_km: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_km: f64, content: T) -> Self {
        Self {
            distance_km,
            content,
        }
    }
}
