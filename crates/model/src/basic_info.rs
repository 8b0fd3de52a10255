use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AirportId, AirportRow, AirportType, ExampleData};

/// Identity and display record of an airport.
/// Shard: `basic_info.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicInfo {
    /// Shared airport id, the join key across all shards.
    pub id: AirportId,

    /// Display name, already normalized by the loader (full-width characters
    /// folded to ASCII) and guaranteed to pass name validation.
    pub name: String,

    /// Kind of facility.
    #[serde(rename = "type")]
    pub airport_type: AirportType,

    /// ICAO-style identifier. Not part of every shard revision, the
    /// authoritative value lives in `Codes::ident`.
    #[serde(default)]
    pub ident: Option<String>,

    /// Three letter IATA code, if the airport has one.
    #[serde(default)]
    pub iata_code: Option<String>,
}

impl AirportRow for BasicInfo {
    fn airport_id(&self) -> AirportId {
        self.id
    }
}

impl ExampleData for BasicInfo {
    fn example_data() -> Self {
        BasicInfo {
            id: AirportId::new(1),
            name: "Beijing Capital International Airport".to_owned(),
            airport_type: AirportType::LargeAirport,
            ident: Some("ZBAA".to_owned()),
            iata_code: Some("PEK".to_owned()),
        }
    }
}
