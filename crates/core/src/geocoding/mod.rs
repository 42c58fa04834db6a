//! Reverse geocoding of incident locations.

pub mod nominatim;

pub use nominatim::{GeocodingError, NominatimGeocoder};

/// Outcome of a reverse lookup. Never an error: callers always have
/// something to show next to the pin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressLookup {
    Found(String),
    /// The service answered but knows no address for the point
    NotFound,
    /// The service could not be reached or answered with an error
    Unavailable,
}

impl AddressLookup {
    pub fn message(&self) -> &str {
        match self {
            AddressLookup::Found(address) => address,
            AddressLookup::NotFound => "Detailed address not found.",
            AddressLookup::Unavailable => "Address data is unavailable right now.",
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            AddressLookup::Found(address) => Some(address),
            _ => None,
        }
    }
}
