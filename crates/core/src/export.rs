//! GeoJSON export of station data for map clients.

use std::sync::Arc;

use fireguard_stations::Station;
use geojson::{Feature, FeatureCollection, Geometry, Value};

/// Create a GeoJSON point Feature for a station with its display properties
pub fn station_to_feature(station: &Station) -> Feature {
    let mut properties = serde_json::Map::new();
    properties.insert("id".to_string(), serde_json::json!(station.id.as_str()));
    properties.insert("name".to_string(), serde_json::json!(&*station.name));
    properties.insert("address".to_string(), serde_json::json!(station.address.as_deref()));
    properties.insert("phone".to_string(), serde_json::json!(station.phone.as_deref()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            station.location.longitude,
            station.location.latitude,
        ]))),
        id: Some(geojson::feature::Id::String(station.id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn stations_to_feature_collection(stations: &[Arc<Station>]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: stations.iter().map(|s| station_to_feature(s)).collect(),
        foreign_members: None,
    }
}
