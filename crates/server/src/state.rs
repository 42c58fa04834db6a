use std::sync::Arc;

use eyre::WrapErr;
use fireguard_core::dispatch::DispatchPlanner;
use fireguard_core::geocoding::NominatimGeocoder;
use fireguard_core::network::ReverseGeocoder;
use fireguard_core::routing::{OsrmRouteProvider, RoutePlanner, RoutePolicy};
use fireguard_stations::{NearestStationResolver, StationConfig, StationProvider};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub dispatch: DispatchPlanner,
    pub geocoder: Arc<dyn ReverseGeocoder>,
}

impl AppState {
    pub fn new(dispatch: DispatchPlanner, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { dispatch, geocoder }
    }

    pub fn stations(&self) -> &dyn StationProvider {
        self.dispatch.stations()
    }

    pub fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let station_config = match &config.stations {
            Some(path) => StationConfig::from_path(path)
                .wrap_err_with(|| format!("failed to load stations from {}", path.display()))?,
            None => StationConfig::bundled().wrap_err("failed to load bundled stations")?,
        };

        let resolver = match config.average_speed_kmh {
            Some(speed) => NearestStationResolver::new(speed),
            None => station_config.resolver(),
        }
        .wrap_err("invalid average speed")?;

        let registry = station_config
            .into_registry()
            .wrap_err("invalid station list")?;
        tracing::info!(count = registry.len(), "loaded stations");

        let routes = if config.disable_road_routes {
            RoutePlanner::straight_line_only()
        } else {
            let provider = OsrmRouteProvider::new(&config.osrm_url, config.route_timeout())
                .wrap_err("failed to create routing client")?;
            RoutePlanner::new(
                Arc::new(provider),
                RoutePolicy {
                    timeout: config.route_timeout(),
                    road_routes: true,
                },
            )
        };

        let geocoder = NominatimGeocoder::new(&config.nominatim_url, config.geocode_timeout())
            .wrap_err("failed to create geocoding client")?;

        Ok(Self::new(
            DispatchPlanner::new(Arc::new(registry), resolver, routes),
            Arc::new(geocoder),
        ))
    }
}
