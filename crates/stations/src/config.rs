//! Station list configuration.
//!
//! Stations are read once at startup from a JSON document:
//!
//! ```json
//! {
//!   "average_speed_kmh": 40.0,
//!   "stations": [
//!     { "name": "Pos Kemuning", "latitude": -2.98, "longitude": 104.75,
//!       "address": "Jl. Kemuning, Palembang", "phone": "0711-123456" }
//!   ]
//! }
//! ```
//!
//! `id`, `address` and `phone` are optional; a missing `id` is derived from
//! the name.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::identifiers::StationIdentifier;
use crate::models::types::*;
use crate::provider::static_provider::StaticStationRegistry;
use crate::resolver::{NearestStationResolver, DEFAULT_AVERAGE_SPEED_KMH};

const BUNDLED_PALEMBANG: &str = include_str!("../../../data/palembang-stations.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    #[serde(default = "default_average_speed")]
    pub average_speed_kmh: f64,
    pub stations: Vec<StationEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_average_speed() -> f64 {
    DEFAULT_AVERAGE_SPEED_KMH
}

impl StationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StationError::SerializationError(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// The twelve Palembang stations shipped with the repository.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_PALEMBANG)
    }

    pub fn resolver(&self) -> Result<NearestStationResolver> {
        NearestStationResolver::new(self.average_speed_kmh)
    }

    pub fn to_stations(&self) -> Vec<Station> {
        self.stations.iter().map(StationEntry::to_station).collect()
    }

    pub fn into_registry(self) -> Result<StaticStationRegistry> {
        StaticStationRegistry::from_stations(self.to_stations())
    }
}

impl StationEntry {
    pub fn to_station(&self) -> Station {
        let mut station = Station::new(&self.name, Coordinate::new(self.latitude, self.longitude));
        if let Some(id) = &self.id {
            station.id = StationIdentifier::new(id);
        }
        station.address = self.address.as_deref().map(Into::into);
        station.phone = self.phone.as_deref().map(Into::into);
        station
    }
}

impl From<&Station> for StationEntry {
    fn from(station: &Station) -> Self {
        Self {
            id: Some(station.id.to_string()),
            name: station.name.to_string(),
            latitude: station.location.latitude,
            longitude: station.location.longitude,
            address: station.address.as_deref().map(str::to_owned),
            phone: station.phone.as_deref().map(str::to_owned),
        }
    }
}
