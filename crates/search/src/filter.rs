use model::AirportType;
use serde::{Deserialize, Serialize};

/// Conjunction of optional predicates for `SearchService::search_airports`.
/// Predicates which are `None` do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportFilter {
    /// Exact airport type.
    #[serde(rename = "type")]
    pub airport_type: Option<AirportType>,

    /// ISO country code, compared case-insensitively.
    pub country: Option<String>,

    /// Continent code, compared case-insensitively.
    pub continent: Option<String>,

    /// Whether a non-blank IATA code is required (`true`) or must be missing
    /// (`false`).
    pub has_iata_code: Option<bool>,

    /// Whether the airport must (`true`) or must not (`false`) have scheduled
    /// service.
    pub has_scheduled_service: Option<bool>,
}

impl AirportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, airport_type: AirportType) -> Self {
        self.airport_type = Some(airport_type);
        self
    }

    pub fn with_country<S: Into<String>>(mut self, country: S) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_continent<S: Into<String>>(mut self, continent: S) -> Self {
        self.continent = Some(continent.into());
        self
    }

    pub fn with_iata_code(mut self, has_iata_code: bool) -> Self {
        self.has_iata_code = Some(has_iata_code);
        self
    }

    pub fn with_scheduled_service(mut self, has_scheduled_service: bool) -> Self {
        self.has_scheduled_service = Some(has_scheduled_service);
        self
    }

    /// Country predicate. An empty string does not restrict the result.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|country| !country.is_empty())
    }

    /// Continent predicate. An empty string does not restrict the result.
    pub fn continent(&self) -> Option<&str> {
        self.continent
            .as_deref()
            .filter(|continent| !continent.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.airport_type.is_none()
            && self.country().is_none()
            && self.continent().is_none()
            && self.has_iata_code.is_none()
            && self.has_scheduled_service.is_none()
    }
}
