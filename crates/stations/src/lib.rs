//! # fireguard-stations
//!
//! Fire station data and nearest-station resolution.
//!
//! ## Features
//!
//! - **Haversine geometry**: great-circle distances in kilometers
//! - **Nearest-station resolution**: closest station plus a coarse ETA
//! - **Spatial queries**: R-tree backed radius and nearest-N lookups
//! - **Configuration**: load station lists from JSON (feature `serde`)
//!
//! ## Example
//!
//! ```
//! use fireguard_stations::prelude::*;
//!
//! let stations = vec![
//!     Station::new("Pos Kemuning", Coordinate::new(-2.9812, 104.7576)),
//!     Station::new("Dinas Damkar Pusat", Coordinate::new(-2.9714, 104.7592)),
//! ];
//!
//! let incident = Coordinate::new(-2.976, 104.775);
//! let result = resolve_nearest(incident, &stations, DEFAULT_AVERAGE_SPEED_KMH).unwrap();
//! assert_eq!(result.station.name(), "Dinas Damkar Pusat");
//! assert_eq!(result.eta_minutes, 3);
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod spatial;

#[cfg(feature = "serde")]
pub mod config;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::static_provider::StaticStationRegistry;
    pub use crate::resolver::{
        resolve_nearest, NearestStationResolver, DEFAULT_AVERAGE_SPEED_KMH,
    };
    pub use crate::spatial::haversine_km;

    #[cfg(feature = "serde")]
    pub use crate::config::StationConfig;
}

pub use prelude::*;
