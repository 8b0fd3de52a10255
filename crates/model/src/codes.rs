use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AirportId, AirportRow, ExampleData};

/// Codes an airport is known by.
/// Shard: `codes.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Codes {
    pub id: AirportId,

    /// GPS code, usually equal to the ICAO code where one exists.
    #[serde(default)]
    pub gps_code: Option<String>,

    /// Three letter IATA code.
    #[serde(default)]
    pub iata_code: Option<String>,

    /// Code assigned by the national aviation authority.
    #[serde(default)]
    pub local_code: Option<String>,

    /// Unique identifier of the airport in the source dataset. This is the
    /// four letter ICAO code where one exists.
    pub ident: String,
}

impl Codes {
    pub fn icao_code(&self) -> &str {
        &self.ident
    }
}

impl AirportRow for Codes {
    fn airport_id(&self) -> AirportId {
        self.id
    }
}

impl ExampleData for Codes {
    fn example_data() -> Self {
        Codes {
            id: AirportId::new(1),
            gps_code: Some("ZBAA".to_owned()),
            iata_code: Some("PEK".to_owned()),
            local_code: None,
            ident: "ZBAA".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icao_code_is_the_ident() {
        let codes = Codes::example_data();
        assert_eq!(codes.icao_code(), "ZBAA");
    }
}
