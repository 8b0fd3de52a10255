use std::fmt::Debug;

use indexmap::{map::Entry, IndexMap};
use model::{
    AirportData, AirportId, AirportRow, BasicInfo, Codes, Coordinates, References,
    Region,
};

/// Rows of one shard in load order, indexed by airport id.
///
/// Ids are expected to be unique within a shard. Should a shard contain an id
/// twice anyway, the first row is kept so that lookups agree with a scan in
/// table order.
#[derive(Debug, Clone)]
pub struct AirportTable<V> {
    map: IndexMap<AirportId, V>,
}

impl<V> AirportTable<V>
where
    V: AirportRow + Debug,
{
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    pub fn from_rows(name: &str, rows: Vec<V>) -> Self {
        let mut table = Self {
            map: IndexMap::with_capacity(rows.len()),
        };
        for row in rows {
            if let Some(duplicate) = table.insert(row) {
                log::warn!(
                    "{}: duplicate airport id {}, keeping the first row",
                    name,
                    duplicate.airport_id()
                );
            }
        }
        table
    }

    /// Appends a row. Returns the row back if its id is already present.
    pub fn insert(&mut self, value: V) -> Option<V> {
        match self.map.entry(value.airport_id()) {
            Entry::Occupied(_) => Some(value),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }
}

impl<V> AirportTable<V> {
    pub fn get(&self, id: &AirportId) -> Option<&V> {
        self.map.get(id)
    }

    pub fn contains(&self, id: &AirportId) -> bool {
        self.map.contains_key(id)
    }

    /// Rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V> Default for AirportTable<V> {
    fn default() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }
}

/// The five shards of the airport dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct AirportDatabase {
    /// Identity and display records. Defines the order of every query result.
    pub basic_info: AirportTable<BasicInfo>,

    /// IATA, ICAO, GPS and local codes.
    pub codes: AirportTable<Codes>,

    /// Latitude, longitude and elevation.
    pub coordinates: AirportTable<Coordinates>,

    /// Continent, country, region and municipality.
    pub region: AirportTable<Region>,

    /// Links, keywords and the scheduled service flag.
    pub references: AirportTable<References>,
}

impl AirportDatabase {
    pub fn from_data(data: AirportData) -> Self {
        let database = Self {
            basic_info: AirportTable::from_rows("basic_info", data.basic_info),
            codes: AirportTable::from_rows("codes", data.codes),
            coordinates: AirportTable::from_rows("coordinates", data.coordinates),
            region: AirportTable::from_rows("region", data.region),
            references: AirportTable::from_rows("references", data.references),
        };
        log::debug!(
            "airport database built: {} airports, {} codes, {} coordinates, {} regions, {} references",
            database.basic_info.len(),
            database.codes.len(),
            database.coordinates.len(),
            database.region.len(),
            database.references.len(),
        );
        database
    }

    /// Number of airports, as defined by the `basic_info` shard.
    pub fn len(&self) -> usize {
        self.basic_info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basic_info.is_empty()
    }
}

impl From<AirportData> for AirportDatabase {
    fn from(data: AirportData) -> Self {
        Self::from_data(data)
    }
}
