//! In-memory query engine over the five airport shards.
//!
//! The shards are kept as separate ordered tables keyed by the shared airport
//! id and joined at query time. Every query is a synchronous computation over
//! immutable data, so a loaded [`AirportDatabase`] can be shared between
//! threads freely.

pub mod database;
pub mod error;
pub mod filter;
pub mod record;
pub mod service;

pub use database::{AirportDatabase, AirportTable};
pub use error::{Result, SearchError};
pub use filter::AirportFilter;
pub use record::AirportRecord;
pub use service::SearchService;
