//! Core data types for station data.

use std::sync::Arc;

use crate::identifiers::*;

// ============================================================================
// Coordinates
// ============================================================================

/// A WGS84 position in decimal degrees.
///
/// No range validation is performed on construction: out-of-range values are
/// carried through and produce a (meaningless) distance rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether latitude lies in [-90, 90] and longitude in [-180, 180].
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinate> for geo::Point {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point> for Coordinate {
    fn from(p: geo::Point) -> Self {
        Self::new(p.y(), p.x())
    }
}

impl From<geo::Coord> for Coordinate {
    fn from(c: geo::Coord) -> Self {
        Self::new(c.y, c.x)
    }
}

impl From<Coordinate> for geo::Coord {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A fire station. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub location: Coordinate,
    pub address: Option<Arc<str>>,
    pub phone: Option<Arc<str>>,
}

impl Station {
    /// Create a station whose identifier is derived from its name.
    pub fn new(name: impl AsRef<str>, location: Coordinate) -> Self {
        let name = name.as_ref();
        Self {
            id: StationIdentifier::from_name(name),
            name: name.into(),
            location,
            address: None,
            phone: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<StationIdentifier>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_address(mut self, address: impl AsRef<str>) -> Self {
        self.address = Some(address.as_ref().into());
        self
    }

    pub fn with_phone(mut self, phone: impl AsRef<str>) -> Self {
        self.phone = Some(phone.as_ref().into());
        self
    }
}

/// A station paired with its distance from a query point.
#[derive(Clone, Debug, PartialEq)]
pub struct StationDistance {
    pub station: Arc<Station>,
    pub distance_km: f64,
}

/// Outcome of a nearest-station query.
///
/// `distance_km` is rounded to two decimal places for display;
/// `eta_minutes` assumes a constant average speed.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolutionResult {
    pub station: Station,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StationError>;
