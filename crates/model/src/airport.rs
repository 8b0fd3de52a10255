use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

/// An airport as a whole. Its attributes are partitioned into the five shards
/// (`BasicInfo`, `Codes`, `Coordinates`, `Region`, `References`), which all
/// share one `AirportId`.
#[derive(Debug, Clone, Copy, JsonSchema)]
pub struct Airport;

impl HasId for Airport {
    type IdType = u32;
}

pub type AirportId = Id<Airport>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AirportType {
    SmallAirport,
    MediumAirport,
    LargeAirport,
    Heliport,
    SeaplaneBase,
    Closed,
    Balloonport,
}

impl AirportType {
    pub const ALL: [AirportType; 7] = [
        AirportType::SmallAirport,
        AirportType::MediumAirport,
        AirportType::LargeAirport,
        AirportType::Heliport,
        AirportType::SeaplaneBase,
        AirportType::Closed,
        AirportType::Balloonport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AirportType::SmallAirport => "small_airport",
            AirportType::MediumAirport => "medium_airport",
            AirportType::LargeAirport => "large_airport",
            AirportType::Heliport => "heliport",
            AirportType::SeaplaneBase => "seaplane_base",
            AirportType::Closed => "closed",
            AirportType::Balloonport => "balloonport",
        }
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown airport type '{0}'")]
pub struct UnknownAirportType(pub String);

impl FromStr for AirportType {
    type Err = UnknownAirportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AirportType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownAirportType(s.to_owned()))
    }
}
