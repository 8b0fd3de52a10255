use std::{env, path::PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/ourairports-js@latest/data/";
pub const DEFAULT_CSV_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.csv";

pub const DATA_DIR_VAR: &str = "OURAIRPORTS_DATA_DIR";
pub const CDN_URL_VAR: &str = "OURAIRPORTS_CDN_URL";
pub const CSV_URL_VAR: &str = "OURAIRPORTS_CSV_URL";

/// Where shards are read from and where the raw CSV is downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory holding the `*.json` shards.
    pub data_dir: PathBuf,

    /// Base URL the shards are served from when no local data is available.
    pub cdn_base_url: String,

    /// OurAirports `airports.csv` export, input for shard generation.
    pub csv_url: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_owned(),
            csv_url: DEFAULT_CSV_URL.to_owned(),
        }
    }
}

impl LoaderConfig {
    /// Reads `OURAIRPORTS_DATA_DIR`, `OURAIRPORTS_CDN_URL` and
    /// `OURAIRPORTS_CSV_URL`. Unset variables keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            data_dir: get(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            cdn_base_url: get(CDN_URL_VAR).unwrap_or(defaults.cdn_base_url),
            csv_url: get(CSV_URL_VAR).unwrap_or(defaults.csv_url),
        }
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
