use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AirportId, AirportRow, ExampleData};

/// Position of an airport. Latitude and longitude are always present together.
/// Shard: `coordinates.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub id: AirportId,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub elevation_ft: Option<f64>,
}

impl Coordinates {
    /// `(latitude, longitude)` if both are usable numbers.
    pub fn position(&self) -> Option<(f64, f64)> {
        (self.latitude_deg.is_finite() && self.longitude_deg.is_finite())
            .then_some((self.latitude_deg, self.longitude_deg))
    }
}

impl AirportRow for Coordinates {
    fn airport_id(&self) -> AirportId {
        self.id
    }
}

impl ExampleData for Coordinates {
    fn example_data() -> Self {
        Coordinates {
            id: AirportId::new(1),
            latitude_deg: 40.0799,
            longitude_deg: 116.6031,
            elevation_ft: Some(116.0),
        }
    }
}
