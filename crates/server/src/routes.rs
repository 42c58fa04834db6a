use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use fireguard_api_types as api;
use fireguard_core::geocoding::AddressLookup;
use fireguard_core::routing::RouteKind;
use fireguard_stations::{Coordinate, Station, StationIdentifier};
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/nearest", get(nearest_station))
        .route("/api/stations/near", get(stations_near))
        .route("/api/stations/{id}", get(get_station))
        .route("/api/dispatch", get(dispatch))
        .route("/api/geocode/reverse", get(reverse_geocode))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_stations(State(state): State<AppState>) -> Json<api::StationsResponse> {
    Json(api::StationsResponse {
        stations: state
            .stations()
            .all_stations()
            .iter()
            .map(|s| to_api_station(s))
            .collect(),
    })
}

async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<api::Station>, ApiError> {
    let id = StationIdentifier::from(id);
    let station = state
        .stations()
        .get_station(&id)
        .ok_or(ApiError::StationNotFound(id))?;

    Ok(Json(to_api_station(&station)))
}

async fn nearest_station(
    State(state): State<AppState>,
    query: Result<Query<api::NearestStationQuery>, QueryRejection>,
) -> Result<Json<api::NearestStationResponse>, ApiError> {
    let Query(query) = query?;
    let incident = incident_point(query.lat, query.lon);
    let speed = query
        .speed
        .unwrap_or_else(|| state.dispatch.resolver().average_speed_kmh());

    let result = state.stations().resolve_nearest(incident, speed)?;

    Ok(Json(api::NearestStationResponse {
        station: to_api_station(&result.station),
        distance_km: result.distance_km,
        eta_minutes: result.eta_minutes,
    }))
}

async fn stations_near(
    State(state): State<AppState>,
    query: Result<Query<api::StationsNearQuery>, QueryRejection>,
) -> Result<Json<api::StationsNearResponse>, ApiError> {
    let Query(query) = query?;
    if !query.radius_km.is_finite() || query.radius_km < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "radiusKm must be a non-negative number, got {}",
            query.radius_km
        )));
    }
    let center = incident_point(query.lat, query.lon);

    let stations = state
        .stations()
        .stations_within(center, query.radius_km)
        .into_iter()
        .map(|found| api::StationDistance {
            station: to_api_station(&found.station),
            distance_km: found.distance_km,
        })
        .collect();

    Ok(Json(api::StationsNearResponse { stations }))
}

async fn dispatch(
    State(state): State<AppState>,
    query: Result<Query<api::CoordinateQuery>, QueryRejection>,
) -> Result<Json<api::DispatchResponse>, ApiError> {
    let Query(query) = query?;
    let incident = incident_point(query.lat, query.lon);

    let plan = state.dispatch.plan(incident).await?;
    let route = serde_json::to_value(plan.route.to_geojson_feature())
        .map_err(|e| ApiError::Internal(format!("failed to encode route: {e}")))?;

    Ok(Json(api::DispatchResponse {
        station: to_api_station(&plan.resolution.station),
        distance_km: plan.resolution.distance_km,
        eta_minutes: plan.resolution.eta_minutes,
        route_kind: match plan.route.kind {
            RouteKind::Road => api::RouteKind::Road,
            RouteKind::StraightLine => api::RouteKind::StraightLine,
        },
        route_distance_km: plan.route.distance_km,
        route_duration_minutes: plan.route.duration_minutes,
        route,
    }))
}

async fn reverse_geocode(
    State(state): State<AppState>,
    query: Result<Query<api::CoordinateQuery>, QueryRejection>,
) -> Result<Json<api::ReverseGeocodeResponse>, ApiError> {
    let Query(query) = query?;
    let point = incident_point(query.lat, query.lon);

    let lookup = state.geocoder.reverse(point).await;
    let status = match lookup {
        AddressLookup::Found(_) => api::AddressStatus::Found,
        AddressLookup::NotFound => api::AddressStatus::NotFound,
        AddressLookup::Unavailable => api::AddressStatus::Unavailable,
    };

    Ok(Json(api::ReverseGeocodeResponse {
        status,
        address: lookup.message().to_string(),
    }))
}

/// Out-of-range coordinates are still resolved, only flagged in the logs
fn incident_point(lat: f64, lon: f64) -> Coordinate {
    let point = Coordinate::new(lat, lon);
    if !point.is_within_bounds() {
        tracing::warn!(lat, lon, "coordinate outside the valid latitude/longitude range");
    }
    point
}

fn to_api_station(station: &Station) -> api::Station {
    api::Station {
        id: station.id.to_string(),
        name: station.name.to_string(),
        latitude: station.location.latitude,
        longitude: station.location.longitude,
        address: station.address.as_deref().map(str::to_string),
        phone: station.phone.as_deref().map(str::to_string),
    }
}
