use model::{BasicInfo, Codes, Coordinates, References, Region};
use serde::Serialize;

/// All shards of one airport joined by id. Only `basic_info` is guaranteed,
/// the other shards may be missing for an id.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AirportRecord<'a> {
    #[serde(flatten)]
    pub basic_info: &'a BasicInfo,
    pub codes: Option<&'a Codes>,
    pub coordinates: Option<&'a Coordinates>,
    pub region: Option<&'a Region>,
    pub references: Option<&'a References>,
}

impl AirportRecord<'_> {
    pub fn is_complete(&self) -> bool {
        self.codes.is_some()
            && self.coordinates.is_some()
            && self.region.is_some()
            && self.references.is_some()
    }
}
