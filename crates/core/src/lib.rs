pub mod dispatch;
pub mod export;
pub mod geocoding;
pub mod network;
pub mod routing;

// Re-export station data from the stations crate
pub use fireguard_stations as stations;
