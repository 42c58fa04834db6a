use anyhow::{Context, Result};
use fireguard_core::export::stations_to_feature_collection;
use fireguard_stations::{Coordinate, StationDistance};
use geojson::{Feature, GeoJson, Geometry, Value};
use std::path::Path;
use std::sync::Arc;

/// Render ranked stations as an aligned plain-text table
pub fn format_table(rows: &[(&StationDistance, u32)]) -> String {
    let width = rows
        .iter()
        .map(|(d, _)| d.station.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Station".len());

    let mut out = format!("{:>2}  {:<width$}  {:>8}  {:>7}\n", "#", "Station", "km", "min");
    for (rank, (d, eta)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}  {:<width$}  {:>8.2}  {:>7}\n",
            rank + 1,
            d.station.name,
            d.distance_km,
            eta
        ));
    }
    out
}

fn incident_feature(incident: Coordinate) -> Feature {
    let mut properties = serde_json::Map::new();
    properties.insert("feature_type".to_string(), serde_json::json!("incident"));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            incident.longitude,
            incident.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Write the incident plus ranked stations as a FeatureCollection.
/// Station features carry their rank and distance.
pub fn write_lookup_geojson(
    incident: Coordinate,
    nearest: &[StationDistance],
    output_path: &Path,
) -> Result<()> {
    log::info!("Writing {} stations to {}", nearest.len(), output_path.display());

    let stations: Vec<_> = nearest.iter().map(|d| Arc::clone(&d.station)).collect();
    let mut collection = stations_to_feature_collection(&stations);

    for (rank, (feature, d)) in collection.features.iter_mut().zip(nearest).enumerate() {
        feature.set_property("feature_type", "station");
        feature.set_property("rank", rank + 1);
        feature.set_property("distance_km", d.distance_km);
    }
    collection.features.insert(0, incident_feature(incident));

    let geojson = GeoJson::from(collection);
    let json_string =
        serde_json::to_string_pretty(&geojson).context("Failed to serialize GeoJSON")?;

    std::fs::write(output_path, json_string)
        .with_context(|| format!("Failed to write GeoJSON to {}", output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fireguard_stations::Station;

    fn ranked() -> Vec<StationDistance> {
        vec![
            StationDistance {
                station: Arc::new(Station::new("Pos Pemadam Kebakaran", Coordinate::new(-2.9742, 104.7755))),
                distance_km: 0.21,
            },
            StationDistance {
                station: Arc::new(Station::new("Dinas Damkar Pusat", Coordinate::new(-2.9714, 104.7592))),
                distance_km: 1.82,
            },
        ]
    }

    #[test]
    fn test_format_table() {
        let nearest = ranked();
        let rows: Vec<_> = nearest.iter().zip([0u32, 3]).collect();
        let table = format_table(&rows);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(" 1  Pos Pemadam Kebakaran"));
        assert!(lines[1].ends_with("0.21        0"));
        assert!(lines[2].contains("Dinas Damkar Pusat"));
        assert!(lines[2].ends_with("1.82        3"));
    }

    #[test]
    fn test_write_lookup_geojson() {
        let path = std::env::temp_dir().join(format!("station-lookup-{}.geojson", std::process::id()));
        write_lookup_geojson(Coordinate::new(-2.976, 104.775), &ranked(), &path).unwrap();

        let written: GeoJson = std::fs::read_to_string(&path).unwrap().parse().unwrap();
        let _ = std::fs::remove_file(&path);

        let GeoJson::FeatureCollection(collection) = written else {
            panic!("expected a FeatureCollection");
        };
        assert_eq!(collection.features.len(), 3);
        assert_eq!(
            collection.features[0].property("feature_type"),
            Some(&serde_json::json!("incident"))
        );
        assert_eq!(
            collection.features[2].property("rank"),
            Some(&serde_json::json!(2))
        );
        assert_eq!(
            collection.features[1].property("name"),
            Some(&serde_json::json!("Pos Pemadam Kebakaran"))
        );
    }
}
