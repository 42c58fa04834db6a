//! Client for OSRM-compatible routing services.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use fireguard_stations::spatial::path_length_km;
use fireguard_stations::Coordinate;
use geo::LineString;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::network::http::{self, ClientError};
use crate::network::traits::RouteProvider;
use crate::routing::RoadRoute;

/// Public demo server, suitable for development only
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing service answered {status} with code {code}: {message}")]
    Upstream {
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("routing service returned no routes")]
    NoRoute,
}

#[derive(Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    #[serde(default)]
    distance: Option<f64>,
    duration: f64,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Clone)]
pub struct OsrmRouteProvider {
    inner: reqwest::Client,
    base: Url,
    profile: String,
}

impl OsrmRouteProvider {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            inner: http::build_client(timeout)?,
            base: http::parse_base_url(base)?,
            profile: "driving".to_owned(),
        })
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    fn route_url(&self, start: Coordinate, end: Coordinate) -> Result<Url, ClientError> {
        // OSRM takes lon,lat pairs
        let waypoints = format!(
            "{},{};{},{}",
            start.longitude, start.latitude, end.longitude, end.latitude
        );
        let mut url = http::join_segments(
            &self.base,
            ["route", "v1", self.profile.as_str(), waypoints.as_str()],
        )?;
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");

        Ok(url)
    }

    pub async fn fetch_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RoadRoute, RoutingError> {
        let url = self.route_url(start, end)?;
        tracing::debug!(%url, "requesting road route");

        let response = self.inner.get(url).send().await?;
        let status = response.status();
        let body: OsrmResponse = response.json().await?;

        if !status.is_success() || body.code != "Ok" {
            return Err(RoutingError::Upstream {
                status,
                code: body.code,
                message: body.message.unwrap_or_default(),
            });
        }

        let route = body.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        let geometry: LineString = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| geo::Coord { x: lon, y: lat })
            .collect();

        let distance_km = match route.distance {
            Some(meters) => meters / 1000.0,
            None => path_length_km(&geometry),
        };

        Ok(RoadRoute {
            geometry,
            distance_km,
            duration_minutes: (route.duration / 60.0).round() as u32,
        })
    }
}

impl RouteProvider for OsrmRouteProvider {
    fn try_fetch_route<'a>(
        &'a self,
        start: Coordinate,
        end: Coordinate,
    ) -> Pin<Box<dyn Future<Output = Option<RoadRoute>> + Send + 'a>> {
        Box::pin(async move {
            match self.fetch_route(start, end).await {
                Ok(route) => Some(route),
                Err(e) => {
                    tracing::warn!("road route unavailable: {e}");
                    None
                }
            }
        })
    }
}
