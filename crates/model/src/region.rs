use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AirportId, AirportRow, ExampleData};

/// Where an airport is located administratively.
/// Shard: `region.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    pub id: AirportId,

    /// Two letter continent code (`AF`, `AN`, `AS`, `EU`, `NA`, `OC`, `SA`).
    #[serde(default)]
    pub continent: Option<String>,

    /// ISO 3166-1 alpha-2 country code, e.g. `CN`.
    pub iso_country: String,

    /// ISO 3166-2 region code, e.g. `CN-11`.
    pub iso_region: String,

    #[serde(default)]
    pub municipality: Option<String>,
}

impl AirportRow for Region {
    fn airport_id(&self) -> AirportId {
        self.id
    }
}

impl ExampleData for Region {
    fn example_data() -> Self {
        Region {
            id: AirportId::new(1),
            continent: Some("AS".to_owned()),
            iso_country: "CN".to_owned(),
            iso_region: "CN-11".to_owned(),
            municipality: Some("Beijing".to_owned()),
        }
    }
}
