//! Route overlays from a station to an incident.
//!
//! A road route is purely visual: it comes from an external routing service
//! and may be missing. The planner degrades to a straight line between the
//! two endpoints whenever the provider fails or exceeds the timeout.

pub mod osrm;

use std::sync::Arc;
use std::time::Duration;

use fireguard_stations::spatial::haversine_km;
use fireguard_stations::Coordinate;
use geo::LineString;
use geojson::{Feature, Geometry, Value};

use crate::network::http::DEFAULT_TIMEOUT;
use crate::network::traits::RouteProvider;

pub use osrm::OsrmRouteProvider;

/// Ordered route geometry, x = longitude, y = latitude
pub type Polyline = LineString<f64>;

/// A route along the road network as reported by a routing service
#[derive(Clone, Debug, PartialEq)]
pub struct RoadRoute {
    pub geometry: Polyline,
    pub distance_km: f64,
    pub duration_minutes: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Road,
    /// Drawn dashed by clients
    StraightLine,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Road => "road",
            RouteKind::StraightLine => "straight_line",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteOverlay {
    pub kind: RouteKind,
    pub geometry: Polyline,
    pub distance_km: f64,
    /// Only known for road routes
    pub duration_minutes: Option<u32>,
}

impl RouteOverlay {
    pub fn straight_line(start: Coordinate, end: Coordinate) -> Self {
        Self {
            kind: RouteKind::StraightLine,
            geometry: LineString::from(vec![geo::Coord::from(start), geo::Coord::from(end)]),
            distance_km: haversine_km(start, end),
            duration_minutes: None,
        }
    }

    pub fn from_road(route: RoadRoute) -> Self {
        Self {
            kind: RouteKind::Road,
            geometry: route.geometry,
            distance_km: route.distance_km,
            duration_minutes: Some(route.duration_minutes),
        }
    }

    pub fn to_geojson_feature(&self) -> Feature {
        let coordinates: Vec<Vec<f64>> = self.geometry.0.iter().map(|c| vec![c.x, c.y]).collect();

        let mut properties = serde_json::Map::new();
        properties.insert("kind".to_string(), serde_json::json!(self.kind.as_str()));
        properties.insert("distance_km".to_string(), serde_json::json!(self.distance_km));
        properties.insert(
            "duration_minutes".to_string(),
            serde_json::json!(self.duration_minutes),
        );

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(coordinates))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// How the planner uses its route provider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutePolicy {
    /// Upper bound on one provider call, on top of any client timeout
    pub timeout: Duration,
    /// When false the provider is never called
    pub road_routes: bool,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            road_routes: true,
        }
    }
}

#[derive(Clone)]
pub struct RoutePlanner {
    provider: Option<Arc<dyn RouteProvider>>,
    policy: RoutePolicy,
}

impl RoutePlanner {
    pub fn new(provider: Arc<dyn RouteProvider>, policy: RoutePolicy) -> Self {
        Self {
            provider: Some(provider),
            policy,
        }
    }

    /// A planner that only ever draws straight lines
    pub fn straight_line_only() -> Self {
        Self {
            provider: None,
            policy: RoutePolicy {
                road_routes: false,
                ..RoutePolicy::default()
            },
        }
    }

    pub fn policy(&self) -> RoutePolicy {
        self.policy
    }

    pub async fn plan(&self, start: Coordinate, end: Coordinate) -> RouteOverlay {
        let provider = match &self.provider {
            Some(provider) if self.policy.road_routes => provider,
            _ => return RouteOverlay::straight_line(start, end),
        };

        match tokio::time::timeout(self.policy.timeout, provider.try_fetch_route(start, end)).await {
            Ok(Some(route)) if route.geometry.0.len() >= 2 => RouteOverlay::from_road(route),
            Ok(Some(_)) => {
                tracing::warn!("route provider returned degenerate geometry, drawing straight line");
                RouteOverlay::straight_line(start, end)
            }
            Ok(None) => {
                tracing::debug!("no road route, drawing straight line");
                RouteOverlay::straight_line(start, end)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.policy.timeout.as_millis() as u64,
                    "route provider timed out, drawing straight line"
                );
                RouteOverlay::straight_line(start, end)
            }
        }
    }
}
