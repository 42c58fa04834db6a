//! Core traits for station data.
//!
//! These traits define the public interface for station data.
//! Implementations can be in-memory, database-backed, or remote.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

/// A station that can receive dispatches
pub trait FireStation: Send + Sync {
    fn id(&self) -> &StationIdentifier;
    fn name(&self) -> &str;
    fn location(&self) -> Coordinate;

    /// Street address for display, if known
    fn address(&self) -> Option<&str> {
        None
    }

    /// Contact number for display, if known
    fn phone(&self) -> Option<&str> {
        None
    }
}

impl FireStation for Station {
    fn id(&self) -> &StationIdentifier {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Coordinate {
        self.location
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Provider of station data with lookup and query methods
pub trait StationProvider: Send + Sync {
    // ---- Lookups ----
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<Station>>;

    /// All stations, in configuration order
    fn all_stations(&self) -> &[Arc<Station>];

    // ---- Spatial queries ----

    /// Stations within `radius_km` of `point`, closest first
    fn stations_within(&self, point: Coordinate, radius_km: f64) -> Vec<StationDistance>;

    /// The `n` stations closest to `point`, closest first
    fn nearest_stations(&self, point: Coordinate, n: usize) -> Vec<StationDistance>;

    /// Closest station and ETA at the given average speed
    fn resolve_nearest(&self, point: Coordinate, average_speed_kmh: f64) -> Result<ResolutionResult>;
}
