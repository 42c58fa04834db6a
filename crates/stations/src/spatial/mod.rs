//! Spatial indexing and query utilities.

pub mod index;
pub mod queries;

pub use queries::{haversine_km, path_length_km, EARTH_RADIUS_KM};
