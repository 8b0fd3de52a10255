use std::collections::HashSet;

use model::{AirportId, BasicInfo, WithDistance};
use utility::{
    geo::{haversine_distance, is_valid_latitude, is_valid_longitude},
    text::{equals_ignore_case, is_present},
};

use crate::{AirportDatabase, AirportFilter, AirportRecord, Result, SearchError};

/// Queries over an [`AirportDatabase`]. Borrows the tables, never copies or
/// mutates them. Results are always in `basic_info` table order unless stated
/// otherwise.
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a> {
    database: &'a AirportDatabase,
}

impl<'a> SearchService<'a> {
    pub fn new(database: &'a AirportDatabase) -> Self {
        Self { database }
    }

    /// Finds an airport by IATA code, ignoring case. Airports without an IATA
    /// code never match. If several airports share the code, the first one in
    /// the `codes` table wins.
    pub fn find_by_iata_code(&self, iata_code: &str) -> Option<&'a BasicInfo> {
        let codes = self.database.codes.iter().find(|codes| {
            codes
                .iata_code
                .as_deref()
                .is_some_and(|code| !code.is_empty() && equals_ignore_case(code, iata_code))
        })?;
        self.database.basic_info.get(&codes.id)
    }

    /// Finds an airport by ICAO code (the `ident` column), ignoring case.
    pub fn find_by_icao_code(&self, icao_code: &str) -> Option<&'a BasicInfo> {
        let codes = self.database.codes.iter().find(|codes| {
            let code = codes.icao_code();
            !code.is_empty() && equals_ignore_case(code, icao_code)
        })?;
        self.database.basic_info.get(&codes.id)
    }

    /// All airports in a country given by ISO code, ignoring case.
    pub fn find_by_country(&self, country_code: &str) -> Vec<&'a BasicInfo> {
        let ids: HashSet<AirportId> = self
            .database
            .region
            .iter()
            .filter(|region| {
                !region.iso_country.is_empty()
                    && equals_ignore_case(&region.iso_country, country_code)
            })
            .map(|region| region.id)
            .collect();
        self.in_table_order(&ids)
    }

    /// All airports matching every predicate of the filter. An empty filter
    /// returns the whole `basic_info` table.
    pub fn search_airports(&self, filter: &AirportFilter) -> Vec<&'a BasicInfo> {
        if filter.is_empty() {
            return self.database.basic_info.iter().collect();
        }
        self.database
            .basic_info
            .iter()
            .filter(|info| self.matches(info, filter))
            .collect()
    }

    fn matches(&self, info: &BasicInfo, filter: &AirportFilter) -> bool {
        if filter
            .airport_type
            .is_some_and(|airport_type| info.airport_type != airport_type)
        {
            return false;
        }

        if filter.country().is_some() || filter.continent().is_some() {
            let Some(region) = self.database.region.get(&info.id) else {
                return false;
            };
            if let Some(country) = filter.country() {
                if region.iso_country.is_empty()
                    || !equals_ignore_case(&region.iso_country, country)
                {
                    return false;
                }
            }
            if let Some(continent) = filter.continent() {
                let matches = region
                    .continent
                    .as_deref()
                    .is_some_and(|value| !value.is_empty() && equals_ignore_case(value, continent));
                if !matches {
                    return false;
                }
            }
        }

        if let Some(has_iata_code) = filter.has_iata_code {
            let Some(codes) = self.database.codes.get(&info.id) else {
                return false;
            };
            if is_present(codes.iata_code.as_deref()) != has_iata_code {
                return false;
            }
        }

        if let Some(has_scheduled_service) = filter.has_scheduled_service {
            let Some(references) = self.database.references.get(&info.id) else {
                return false;
            };
            if references.scheduled_service.is_scheduled() != has_scheduled_service {
                return false;
            }
        }

        true
    }

    /// All airports within `radius_km` (inclusive) of a point.
    ///
    /// This is a linear scan over the `coordinates` table, there is no spatial
    /// index. Fails before scanning if the center or radius is out of range.
    pub fn find_airports_in_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<&'a BasicInfo>> {
        validate_radius_query(latitude, longitude, radius_km)?;

        let ids: HashSet<AirportId> = self
            .database
            .coordinates
            .iter()
            .filter_map(|coordinates| {
                let (lat, lon) = coordinates.position()?;
                let distance = haversine_distance(latitude, longitude, lat, lon);
                (distance <= radius_km).then_some(coordinates.id)
            })
            .collect();
        Ok(self.in_table_order(&ids))
    }

    /// Like [`Self::find_airports_in_radius`], but every airport carries its
    /// distance to the center and the result is sorted nearest first.
    pub fn find_airports_in_radius_with_distance(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<WithDistance<&'a BasicInfo>>> {
        validate_radius_query(latitude, longitude, radius_km)?;

        let mut result = self
            .database
            .basic_info
            .iter()
            .filter_map(|info| {
                let (lat, lon) = self.database.coordinates.get(&info.id)?.position()?;
                let distance = haversine_distance(latitude, longitude, lat, lon);
                (distance <= radius_km).then(|| WithDistance::new(distance, info))
            })
            .collect::<Vec<_>>();
        // stable sort, equal distances stay in table order
        result.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(result)
    }

    /// Joins all shards for one airport. `None` if the id has no `basic_info`
    /// row.
    pub fn airport(&self, id: AirportId) -> Option<AirportRecord<'a>> {
        let basic_info = self.database.basic_info.get(&id)?;
        Some(AirportRecord {
            basic_info,
            codes: self.database.codes.get(&id),
            coordinates: self.database.coordinates.get(&id),
            region: self.database.region.get(&id),
            references: self.database.references.get(&id),
        })
    }

    fn in_table_order(&self, ids: &HashSet<AirportId>) -> Vec<&'a BasicInfo> {
        if ids.is_empty() {
            return Vec::new();
        }
        self.database
            .basic_info
            .iter()
            .filter(|info| ids.contains(&info.id))
            .collect()
    }
}

fn validate_radius_query(latitude: f64, longitude: f64, radius_km: f64) -> Result<()> {
    if !is_valid_latitude(latitude) {
        return Err(SearchError::InvalidLatitude(latitude));
    }
    if !is_valid_longitude(longitude) {
        return Err(SearchError::InvalidLongitude(longitude));
    }
    if radius_km.is_nan() || radius_km <= 0.0 {
        return Err(SearchError::InvalidRadius(radius_km));
    }
    Ok(())
}
