pub mod geo;
pub mod id;
pub mod serde;
pub mod text;
