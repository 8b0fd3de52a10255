use std::fmt;

use model::{BasicInfo, Codes, Coordinates, References, Region};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{cleaning::clean_and_validate, LoadError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShardKind {
    BasicInfo,
    Codes,
    Coordinates,
    Region,
    References,
}

impl ShardKind {
    pub const ALL: [ShardKind; 5] = [
        ShardKind::BasicInfo,
        ShardKind::Codes,
        ShardKind::Coordinates,
        ShardKind::Region,
        ShardKind::References,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShardKind::BasicInfo => "basic_info",
            ShardKind::Codes => "codes",
            ShardKind::Coordinates => "coordinates",
            ShardKind::Region => "region",
            ShardKind::References => "references",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix(".json").unwrap_or(name);
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ShardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A row type stored in one of the shards.
pub trait ShardRow: DeserializeOwned + Serialize + Send + 'static {
    const KIND: ShardKind;

    /// Normalizes a freshly parsed row. `Err` drops the row, carrying the
    /// reason.
    fn clean(self) -> std::result::Result<Self, String> {
        Ok(self)
    }
}

impl ShardRow for BasicInfo {
    const KIND: ShardKind = ShardKind::BasicInfo;

    fn clean(mut self) -> std::result::Result<Self, String> {
        self.name = clean_and_validate(&self.name)?;
        Ok(self)
    }
}

impl ShardRow for Codes {
    const KIND: ShardKind = ShardKind::Codes;
}

impl ShardRow for Coordinates {
    const KIND: ShardKind = ShardKind::Coordinates;
}

impl ShardRow for Region {
    const KIND: ShardKind = ShardKind::Region;
}

impl ShardRow for References {
    const KIND: ShardKind = ShardKind::References;
}

/// Parses a shard document. Elements that fail to parse or to clean are
/// dropped with a warning, the shard as a whole only fails if it is not a JSON
/// array or if nothing valid is left.
pub fn parse_shard<T: ShardRow>(bytes: &[u8], location: &str) -> Result<Vec<T>> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|source| LoadError::InvalidJson {
            location: location.to_owned(),
            source,
        })?;
    let Value::Array(items) = document else {
        return Err(LoadError::NotAnArray(T::KIND));
    };

    let total = items.len();
    let mut rows = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(row) => match row.clean() {
                Ok(row) => rows.push(row),
                Err(reason) => {
                    log::warn!("{}: invalid item at index {}: {}", T::KIND, index, reason)
                }
            },
            Err(why) => {
                log::warn!("{}: failed to parse item at index {}: {}", T::KIND, index, why)
            }
        }
    }

    if rows.is_empty() {
        return Err(LoadError::NoValidItems(T::KIND));
    }
    let dropped = total - rows.len();
    if dropped > 0 {
        log::warn!("{}: dropped {} of {} items", T::KIND, dropped, total);
    }
    log::info!("loaded {} from {}: {} rows", T::KIND, location, rows.len());
    Ok(rows)
}
