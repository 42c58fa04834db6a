use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fireguard_core::geocoding::nominatim::DEFAULT_NOMINATIM_URL;
use fireguard_core::routing::osrm::DEFAULT_OSRM_URL;

#[derive(Parser, Debug, Clone)]
#[command(name = "fireguard-server")]
#[command(about = "Serve nearest fire station lookups over HTTP")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "FIREGUARD_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: SocketAddr,

    /// Station list JSON file (defaults to the bundled Palembang stations)
    #[arg(long, env = "FIREGUARD_STATIONS")]
    pub stations: Option<PathBuf>,

    /// Overrides the speed from the station file
    #[arg(long, env = "FIREGUARD_AVERAGE_SPEED_KMH")]
    pub average_speed_kmh: Option<f64>,

    #[arg(long, env = "FIREGUARD_OSRM_URL", default_value = DEFAULT_OSRM_URL)]
    pub osrm_url: String,

    #[arg(long, env = "FIREGUARD_ROUTE_TIMEOUT_SECS", default_value_t = 5)]
    pub route_timeout_secs: u64,

    /// Always draw straight lines instead of asking the routing service
    #[arg(long, env = "FIREGUARD_DISABLE_ROAD_ROUTES")]
    pub disable_road_routes: bool,

    #[arg(long, env = "FIREGUARD_NOMINATIM_URL", default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,

    #[arg(long, env = "FIREGUARD_GEOCODE_TIMEOUT_SECS", default_value_t = 5)]
    pub geocode_timeout_secs: u64,
}

impl ServerConfig {
    pub fn route_timeout(&self) -> Duration {
        Duration::from_secs(self.route_timeout_secs)
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.geocode_timeout_secs)
    }

    pub fn log(&self) {
        tracing::info!(
            listen_addr = %self.listen_addr,
            stations = %self
                .stations
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string()),
            average_speed_kmh = ?self.average_speed_kmh,
            osrm_url = %self.osrm_url,
            road_routes = !self.disable_road_routes,
            nominatim_url = %self.nominatim_url,
            "loaded configuration"
        );
    }
}
