//! Request and response bodies of the FireGuard HTTP API.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

// ============================================================================
// Queries
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearestStationQuery {
    pub lat: f64,
    pub lon: f64,
    /// Average speed in km/h, overriding the configured one
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationsNearQuery {
    pub lat: f64,
    pub lon: f64,

    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<Station>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestStationResponse {
    pub station: Station,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDistance {
    pub station: Station,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationsNearResponse {
    pub stations: Vec<StationDistance>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteKind {
    Road,
    StraightLine,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub station: Station,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub route_kind: RouteKind,
    pub route_distance_km: f64,

    #[serde(default)]
    pub route_duration_minutes: Option<u32>,

    /// GeoJSON LineString feature from the station to the incident
    pub route: serde_json::Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressStatus {
    Found,
    NotFound,
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub status: AddressStatus,
    /// The address, or a message to show in its place
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nearest_station_wire_format() {
        let response = NearestStationResponse {
            station: Station {
                id: "pos-kemuning".into(),
                name: "Pos Kemuning".into(),
                latitude: -2.98,
                longitude: 104.75,
                address: None,
                phone: Some("0711-123456".into()),
            },
            distance_km: 2.01,
            eta_minutes: 3,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "station": {
                    "id": "pos-kemuning",
                    "name": "Pos Kemuning",
                    "latitude": -2.98,
                    "longitude": 104.75,
                    "phone": "0711-123456"
                },
                "distanceKm": 2.01,
                "etaMinutes": 3
            })
        );
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(RouteKind::StraightLine).unwrap(), json!("straightLine"));
        assert_eq!(serde_json::to_value(AddressStatus::NotFound).unwrap(), json!("notFound"));
    }

    #[test]
    fn test_speed_is_optional() {
        let query: NearestStationQuery =
            serde_json::from_value(json!({ "lat": -2.976, "lon": 104.775 })).unwrap();
        assert_eq!(query.speed, None);
    }
}
