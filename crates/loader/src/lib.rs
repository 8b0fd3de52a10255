//! Produces the five validated airport shards for the query engine.
//!
//! Shards come from a [`DataSource`]: JSON files in a local directory, the
//! CDN, or data already in memory. Which one is used is decided once at
//! startup by [`select_source`]. The module [`ingest`] builds the shards from
//! the OurAirports CSV export in the first place, [`minify`] compacts them for
//! distribution.

pub mod cleaning;
pub mod config;
pub mod error;
pub mod ingest;
pub mod minify;
pub mod shard;
pub mod source;

pub use config::LoaderConfig;
pub use error::{LoadError, Result};
pub use shard::ShardKind;
pub use source::{select_source, DataSource, FileSystemSource, HttpSource, InMemorySource};
