//! Dispatch planning: which station goes, how far, and the route to draw.

use std::sync::Arc;

use fireguard_stations::prelude::*;

use crate::routing::{RouteOverlay, RoutePlanner};

#[derive(Clone, Debug, PartialEq)]
pub struct DispatchPlan {
    pub resolution: ResolutionResult,
    /// From the resolved station to the incident
    pub route: RouteOverlay,
}

#[derive(Clone)]
pub struct DispatchPlanner {
    stations: Arc<dyn StationProvider>,
    resolver: NearestStationResolver,
    routes: RoutePlanner,
}

impl DispatchPlanner {
    pub fn new(
        stations: Arc<dyn StationProvider>,
        resolver: NearestStationResolver,
        routes: RoutePlanner,
    ) -> Self {
        Self {
            stations,
            resolver,
            routes,
        }
    }

    pub fn stations(&self) -> &dyn StationProvider {
        self.stations.as_ref()
    }

    pub fn resolver(&self) -> NearestStationResolver {
        self.resolver
    }

    /// Resolution errors propagate; route failures only degrade the overlay.
    pub async fn plan(&self, incident: Coordinate) -> Result<DispatchPlan> {
        let resolution = self
            .stations
            .resolve_nearest(incident, self.resolver.average_speed_kmh())?;

        let route = self
            .routes
            .plan(resolution.station.location, incident)
            .await;

        tracing::info!(
            station = %resolution.station.id,
            distance_km = resolution.distance_km,
            eta_minutes = resolution.eta_minutes,
            route = route.kind.as_str(),
            "planned dispatch"
        );

        Ok(DispatchPlan { resolution, route })
    }
}
