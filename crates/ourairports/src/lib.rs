//! Airport lookups over the OurAirports data set.
//!
//! [`OurAirports`] owns the loaded tables and forwards every query to a
//! [`SearchService`]. It has to be initialized once, queries issued before
//! that fail with [`AirportsError::NotInitialized`].
//!
//! ```no_run
//! # async fn run() -> Result<(), ourairports::AirportsError> {
//! let mut airports = ourairports::OurAirports::new();
//! airports.init_from_env().await?;
//! if let Some(airport) = airports.find_by_iata_code("PEK")? {
//!     println!("{}", airport.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use loader::{select_source, DataSource, FileSystemSource, LoadError, LoaderConfig};
use model::{AirportData, AirportId, BasicInfo, WithDistance};
use search::{AirportDatabase, AirportFilter, AirportRecord, SearchError, SearchService};

pub use loader;
pub use model;
pub use search;

#[derive(Debug, thiserror::Error)]
pub enum AirportsError {
    #[error("airport data is not initialized, call init first")]
    NotInitialized,
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, AirportsError>;

#[derive(Debug, Default)]
pub struct OurAirports {
    database: Option<AirportDatabase>,
}

impl OurAirports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already initialized with the given shards.
    pub fn from_data(data: AirportData) -> Self {
        Self {
            database: Some(AirportDatabase::from_data(data)),
        }
    }

    /// Loads the shards from `source`. Does nothing if already initialized.
    pub async fn init<S: DataSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        if self.is_initialized() {
            log::debug!("airports already initialized, not loading {}", source.describe());
            return Ok(());
        }
        let data = source.load().await?;
        self.set_data(data, &source.describe());
        Ok(())
    }

    /// Loads the shards from `data_dir` on the current thread.
    pub fn initialize<P: AsRef<Path>>(&mut self, data_dir: P) -> Result<()> {
        if self.is_initialized() {
            return Ok(());
        }
        let source = FileSystemSource::new(data_dir);
        let data = source.load_blocking()?;
        self.set_data(data, &source.describe());
        Ok(())
    }

    /// Loads the shards from the location configured by the environment.
    pub async fn init_from_env(&mut self) -> Result<()> {
        let config = LoaderConfig::from_env();
        let source = select_source(&config);
        self.init(source.as_ref()).await
    }

    fn set_data(&mut self, data: AirportData, origin: &str) {
        let database = AirportDatabase::from_data(data);
        log::info!("loaded {} airports from {}", database.len(), origin);
        self.database = Some(database);
    }

    pub fn is_initialized(&self) -> bool {
        self.database.is_some()
    }

    pub fn data(&self) -> Result<&AirportDatabase> {
        self.database.as_ref().ok_or(AirportsError::NotInitialized)
    }

    pub fn search(&self) -> Result<SearchService<'_>> {
        self.data().map(SearchService::new)
    }

    pub fn find_by_iata_code(&self, iata_code: &str) -> Result<Option<&BasicInfo>> {
        Ok(self.search()?.find_by_iata_code(iata_code))
    }

    pub fn find_by_icao_code(&self, icao_code: &str) -> Result<Option<&BasicInfo>> {
        Ok(self.search()?.find_by_icao_code(icao_code))
    }

    pub fn find_by_country(&self, country_code: &str) -> Result<Vec<&BasicInfo>> {
        Ok(self.search()?.find_by_country(country_code))
    }

    pub fn search_airports(&self, filter: &AirportFilter) -> Result<Vec<&BasicInfo>> {
        Ok(self.search()?.search_airports(filter))
    }

    pub fn find_airports_in_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<&BasicInfo>> {
        Ok(self
            .search()?
            .find_airports_in_radius(latitude, longitude, radius_km)?)
    }

    pub fn find_airports_in_radius_with_distance(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<WithDistance<&BasicInfo>>> {
        Ok(self
            .search()?
            .find_airports_in_radius_with_distance(latitude, longitude, radius_km)?)
    }

    pub fn airport(&self, id: AirportId) -> Result<Option<AirportRecord<'_>>> {
        Ok(self.search()?.airport(id))
    }
}
