use std::path::{Path, PathBuf};

use async_trait::async_trait;
use model::{AirportData, BasicInfo, Codes, Coordinates, References, Region};

use crate::{
    shard::{parse_shard, ShardRow},
    LoadError, LoaderConfig, Result,
};

/// Produces the five validated shard tables. Loading is all or nothing: if
/// any shard fails, no data is returned.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self) -> Result<AirportData>;

    /// Human readable location, used in log messages.
    fn describe(&self) -> String;
}

/// Decides once where the shards are loaded from: the configured data
/// directory if it exists, the CDN otherwise.
pub fn select_source(config: &LoaderConfig) -> Box<dyn DataSource> {
    if config.data_dir.is_dir() {
        log::info!("loading airports from {}", config.data_dir.display());
        Box::new(FileSystemSource::new(&config.data_dir))
    } else {
        log::info!(
            "no data directory at {}, loading airports from {}",
            config.data_dir.display(),
            config.cdn_base_url
        );
        Box::new(HttpSource::new(&config.cdn_base_url))
    }
}

/// Shards stored as `<data_dir>/<shard>.json`.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    data_dir: PathBuf,
}

impl FileSystemSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn shard_path<T: ShardRow>(&self) -> Result<PathBuf> {
        if !self.data_dir.is_dir() {
            return Err(LoadError::DataDirNotFound(self.data_dir.clone()));
        }
        let path = self.data_dir.join(T::KIND.file_name());
        if !path.is_file() {
            return Err(LoadError::ShardNotFound(path));
        }
        Ok(path)
    }

    fn read_shard_blocking<T: ShardRow>(&self) -> Result<Vec<T>> {
        let path = self.shard_path::<T>()?;
        let bytes = std::fs::read(&path)?;
        parse_shard(&bytes, &path.display().to_string())
    }

    async fn read_shard<T: ShardRow>(&self) -> Result<Vec<T>> {
        let path = self.shard_path::<T>()?;
        let bytes = tokio::fs::read(&path).await?;
        // parsing the larger shards takes a while
        tokio::task::spawn_blocking(move || parse_shard(&bytes, &path.display().to_string()))
            .await?
    }

    /// Loads all shards on the current thread, for callers without a runtime.
    pub fn load_blocking(&self) -> Result<AirportData> {
        Ok(AirportData {
            basic_info: self.read_shard_blocking::<BasicInfo>()?,
            codes: self.read_shard_blocking::<Codes>()?,
            coordinates: self.read_shard_blocking::<Coordinates>()?,
            region: self.read_shard_blocking::<Region>()?,
            references: self.read_shard_blocking::<References>()?,
        })
    }
}

#[async_trait]
impl DataSource for FileSystemSource {
    async fn load(&self) -> Result<AirportData> {
        let (basic_info, codes, coordinates, region, references) = tokio::try_join!(
            self.read_shard::<BasicInfo>(),
            self.read_shard::<Codes>(),
            self.read_shard::<Coordinates>(),
            self.read_shard::<Region>(),
            self.read_shard::<References>(),
        )?;
        Ok(AirportData {
            basic_info,
            codes,
            coordinates,
            region,
            references,
        })
    }

    fn describe(&self) -> String {
        self.data_dir.display().to_string()
    }
}

/// Shards served over HTTP as `<base_url><shard>.json`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client<S: Into<String>>(client: reqwest::Client, base_url: S) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn shard_url<T: ShardRow>(&self) -> String {
        format!("{}{}", self.base_url, T::KIND.file_name())
    }

    async fn fetch_shard<T: ShardRow>(&self) -> Result<Vec<T>> {
        let url = self.shard_url::<T>();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus { url, status });
        }
        let bytes = response.bytes().await?;
        parse_shard(&bytes, &url)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn load(&self) -> Result<AirportData> {
        let (basic_info, codes, coordinates, region, references) = tokio::try_join!(
            self.fetch_shard::<BasicInfo>(),
            self.fetch_shard::<Codes>(),
            self.fetch_shard::<Coordinates>(),
            self.fetch_shard::<Region>(),
            self.fetch_shard::<References>(),
        )?;
        Ok(AirportData {
            basic_info,
            codes,
            coordinates,
            region,
            references,
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Data which is already in memory, e.g. built by `ingest` or by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    data: AirportData,
}

impl InMemorySource {
    pub fn new(data: AirportData) -> Self {
        Self { data }
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn load(&self) -> Result<AirportData> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}
