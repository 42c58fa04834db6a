//! In-memory station registry.
//!
//! Stores the station list loaded at startup together with a lookup map and
//! a spatial index. Nothing is mutated after construction, so a registry can
//! be shared between request handlers behind an `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use rstar::RTree;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::resolver;
use crate::spatial::index::StationNode;
use crate::spatial::queries::{candidate_radius_degrees, haversine_km};

/// In-memory station provider with spatial indexing
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone)]
pub struct StaticStationRegistry {
    // Configuration order is significant: it breaks distance ties
    stations: Arc<[Arc<Station>]>,
    station_map: Arc<HashMap<StationIdentifier, Arc<Station>>>,
    station_tree: Arc<RTree<StationNode>>,
}

impl StaticStationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            stations: Arc::from(Vec::new()),
            station_map: Arc::new(HashMap::new()),
            station_tree: Arc::new(RTree::new()),
        }
    }

    /// Build a registry from a station list, keeping its order.
    ///
    /// Fails if two stations share an identifier.
    pub fn from_stations(stations: Vec<Station>) -> Result<Self> {
        let stations: Vec<Arc<Station>> = stations.into_iter().map(Arc::new).collect();

        let mut station_map = HashMap::with_capacity(stations.len());
        for station in &stations {
            if station_map
                .insert(station.id.clone(), station.clone())
                .is_some()
            {
                return Err(StationError::InvalidData(format!(
                    "duplicate station id: {}",
                    station.id
                )));
            }
        }

        let station_tree = RTree::bulk_load(
            stations
                .iter()
                .enumerate()
                .map(|(order, s)| StationNode::new(s.clone(), order))
                .collect(),
        );

        Ok(Self {
            stations: stations.into(),
            station_map: Arc::new(station_map),
            station_tree: Arc::new(station_tree),
        })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn measure(&self, point: Coordinate, order: usize) -> (usize, StationDistance) {
        let station = self.stations[order].clone();
        let distance_km = haversine_km(point, station.location);
        (order, StationDistance {
            station,
            distance_km,
        })
    }
}

impl Default for StaticStationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort closest first; equal distances keep configuration order.
fn sort_by_distance(found: &mut [(usize, StationDistance)]) {
    found.sort_by(|(order_a, a), (order_b, b)| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then(order_a.cmp(order_b))
    });
}

impl StationProvider for StaticStationRegistry {
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<Station>> {
        self.station_map.get(id).cloned()
    }

    fn all_stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    fn stations_within(&self, point: Coordinate, radius_km: f64) -> Vec<StationDistance> {
        // Validate radius is positive
        if radius_km <= 0.0 || !radius_km.is_finite() {
            return Vec::new();
        }

        let candidates: Vec<usize> = match candidate_radius_degrees(point, radius_km) {
            Some(radius_deg) => self
                .station_tree
                .locate_within_distance(
                    [point.longitude, point.latitude],
                    radius_deg * radius_deg,
                )
                .map(|node| node.order)
                .collect(),
            None => (0..self.stations.len()).collect(),
        };

        let mut found: Vec<_> = candidates
            .into_iter()
            .map(|order| self.measure(point, order))
            .filter(|(_, d)| d.distance_km <= radius_km)
            .collect();
        sort_by_distance(&mut found);

        found.into_iter().map(|(_, d)| d).collect()
    }

    fn nearest_stations(&self, point: Coordinate, n: usize) -> Vec<StationDistance> {
        // Station lists are small; rank all of them by exact distance
        let mut found: Vec<_> = (0..self.stations.len())
            .map(|order| self.measure(point, order))
            .collect();
        sort_by_distance(&mut found);

        found.into_iter().take(n).map(|(_, d)| d).collect()
    }

    fn resolve_nearest(&self, point: Coordinate, average_speed_kmh: f64) -> Result<ResolutionResult> {
        resolver::resolve_nearest(point, &self.stations[..], average_speed_kmh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palembang() -> StaticStationRegistry {
        StaticStationRegistry::from_stations(vec![
            Station::new("Pos Kemuning", Coordinate::new(-2.9812230886637825, 104.75763792231362)),
            Station::new("Dinas Damkar Pusat", Coordinate::new(-2.9714235087001772, 104.75923262629334)),
            Station::new("Pos Pemadam Kebakaran", Coordinate::new(-2.9760630832514616, 104.77686754954989)),
            Station::new("Pos Damkar Kertapati", Coordinate::new(-3.073448013457011, 104.7184991309698)),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = StaticStationRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.nearest_stations(Coordinate::new(0.0, 0.0), 3).is_empty());
        assert!(matches!(
            registry.resolve_nearest(Coordinate::new(0.0, 0.0), 40.0),
            Err(StationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_registry_lookups() {
        let registry = palembang();

        assert_eq!(registry.len(), 4);
        let station = registry
            .get_station(&StationIdentifier::new("pos-kemuning"))
            .unwrap();
        assert_eq!(&*station.name, "Pos Kemuning");
        assert!(registry.get_station(&StationIdentifier::new("missing")).is_none());
        assert_eq!(&*registry.all_stations()[3].name, "Pos Damkar Kertapati");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = StaticStationRegistry::from_stations(vec![
            Station::new("Pos AAL", Coordinate::new(-2.9, 104.7)),
            Station::new("pos aal", Coordinate::new(-2.8, 104.6)),
        ]);
        assert!(matches!(result, Err(StationError::InvalidData(_))));
    }

    #[test]
    fn test_stations_within_radius() {
        let registry = palembang();
        let incident = Coordinate::new(-2.976, 104.775);

        let near = registry.stations_within(incident, 2.0);
        let names: Vec<_> = near.iter().map(|d| &*d.station.name).collect();
        assert_eq!(names, vec!["Pos Pemadam Kebakaran", "Dinas Damkar Pusat"]);

        let near = registry.stations_within(incident, 2.5);
        let names: Vec<_> = near.iter().map(|d| &*d.station.name).collect();
        assert_eq!(
            names,
            vec!["Pos Pemadam Kebakaran", "Dinas Damkar Pusat", "Pos Kemuning"]
        );
        assert!(near.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));

        let all = registry.stations_within(incident, 50.0);
        assert_eq!(all.len(), 4);

        assert!(registry.stations_within(incident, 0.0).is_empty());
        assert!(registry.stations_within(incident, f64::NAN).is_empty());
    }

    #[test]
    fn test_stations_within_across_antimeridian() {
        let registry = StaticStationRegistry::from_stations(vec![Station::new(
            "Across",
            Coordinate::new(0.0, -179.99),
        )])
        .unwrap();
        let center = Coordinate::new(0.0, 179.99);

        let nearest = registry.nearest_stations(center, 1);
        let near = registry.stations_within(center, 5.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].distance_km, nearest[0].distance_km);
        assert!(near[0].distance_km < 2.3);
    }

    #[test]
    fn test_stations_within_unnormalized_longitude() {
        let registry = palembang();
        // 360 degrees east of the Palembang incident
        let center = Coordinate::new(-2.976, 464.775);

        let resolved = registry.resolve_nearest(center, 40.0).unwrap();
        assert_eq!(resolved.distance_km, 0.21);

        let near = registry.stations_within(center, 2.0);
        let names: Vec<_> = near.iter().map(|d| &*d.station.name).collect();
        assert_eq!(names, vec!["Pos Pemadam Kebakaran", "Dinas Damkar Pusat"]);
    }

    #[test]
    fn test_nearest_stations() {
        let registry = palembang();
        let incident = Coordinate::new(-2.976, 104.775);

        let nearest = registry.nearest_stations(incident, 2);
        assert_eq!(nearest.len(), 2);
        assert_eq!(&*nearest[0].station.name, "Pos Pemadam Kebakaran");
        assert_eq!(&*nearest[1].station.name, "Dinas Damkar Pusat");

        assert_eq!(registry.nearest_stations(incident, 10).len(), 4);
    }

    #[test]
    fn test_resolve_matches_nearest_stations() {
        let registry = palembang();
        let incident = Coordinate::new(-3.05, 104.72);

        let result = registry.resolve_nearest(incident, 40.0).unwrap();
        let nearest = registry.nearest_stations(incident, 1);
        assert_eq!(result.station, *nearest[0].station);
    }
}
