use serde::{Deserialize, Serialize};

use crate::{BasicInfo, Codes, Coordinates, ExampleData, References, Region};

/// The five shard tables, in load order, as handed over by a loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportData {
    pub basic_info: Vec<BasicInfo>,
    pub codes: Vec<Codes>,
    pub coordinates: Vec<Coordinates>,
    pub region: Vec<Region>,
    pub references: Vec<References>,
}

impl AirportData {
    pub fn is_empty(&self) -> bool {
        self.basic_info.is_empty()
    }
}

impl ExampleData for AirportData {
    fn example_data() -> Self {
        AirportData {
            basic_info: vec![BasicInfo::example_data()],
            codes: vec![Codes::example_data()],
            coordinates: vec![Coordinates::example_data()],
            region: vec![Region::example_data()],
            references: vec![References::example_data()],
        }
    }
}
