//! Nearest-station resolution.
//!
//! A straight-line (as the crow flies) approximation: the station with the
//! smallest Haversine distance wins, and the ETA assumes a constant average
//! driving speed with no road network or traffic modelling.

use std::borrow::Borrow;

use crate::models::types::*;
use crate::spatial::queries::haversine_km;

/// Assumed average speed of a fire engine inside the city, in km/h
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;

/// Resolves incidents against a station list at a fixed average speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestStationResolver {
    average_speed_kmh: f64,
}

impl NearestStationResolver {
    pub fn new(average_speed_kmh: f64) -> Result<Self> {
        validate_speed(average_speed_kmh)?;
        Ok(Self { average_speed_kmh })
    }

    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    pub fn resolve<S: Borrow<Station>>(
        &self,
        point: Coordinate,
        stations: &[S],
    ) -> Result<ResolutionResult> {
        resolve_nearest(point, stations, self.average_speed_kmh)
    }
}

impl Default for NearestStationResolver {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

/// Find the station closest to `point` and estimate travel time to it.
///
/// Stations are scanned in slice order and only a strictly smaller distance
/// replaces the current best, so the first of several equidistant stations
/// is returned.
///
/// Fails with [`StationError::InvalidInput`] when `stations` is empty, when
/// no distance is comparable (NaN coordinates) or when the speed is not a
/// positive finite number.
pub fn resolve_nearest<S: Borrow<Station>>(
    point: Coordinate,
    stations: &[S],
    average_speed_kmh: f64,
) -> Result<ResolutionResult> {
    validate_speed(average_speed_kmh)?;

    let mut nearest: Option<(&Station, f64)> = None;
    for station in stations {
        let station = station.borrow();
        let distance = haversine_km(point, station.location);

        let closer = match nearest {
            Some((_, best)) => distance < best,
            None => distance < f64::INFINITY,
        };
        if closer {
            nearest = Some((station, distance));
        }
    }

    let Some((station, distance_km)) = nearest else {
        return Err(StationError::InvalidInput("no station data".into()));
    };

    let eta_minutes = eta_minutes(distance_km, average_speed_kmh);
    tracing::debug!(
        station = %station.id,
        distance_km,
        eta_minutes,
        "resolved nearest station"
    );

    Ok(ResolutionResult {
        station: station.clone(),
        distance_km: round_to_hundredths(distance_km),
        eta_minutes,
    })
}

/// Travel time in whole minutes, rounded to nearest (halves round up).
pub fn eta_minutes(distance_km: f64, average_speed_kmh: f64) -> u32 {
    let hours = distance_km / average_speed_kmh;
    // saturating float-to-int cast
    (hours * 60.0).round() as u32
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_speed(average_speed_kmh: f64) -> Result<()> {
    if average_speed_kmh.is_finite() && average_speed_kmh > 0.0 {
        Ok(())
    } else {
        Err(StationError::InvalidInput(format!(
            "average speed must be a positive number of km/h, got {average_speed_kmh}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::queries::KM_PER_DEGREE;
    use approx::assert_relative_eq;

    const INCIDENT: Coordinate = Coordinate::new(-2.976, 104.775);

    /// A station `km` kilometers due north of `from`.
    fn north_of(name: &str, from: Coordinate, km: f64) -> Station {
        Station::new(
            name,
            Coordinate::new(from.latitude + km / KM_PER_DEGREE, from.longitude),
        )
    }

    #[test]
    fn test_station_at_incident() {
        let stations = vec![Station::new("Here", INCIDENT)];
        let result = resolve_nearest(INCIDENT, &stations, 40.0).unwrap();

        assert_eq!(&*result.station.name, "Here");
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.eta_minutes, 0);
    }

    #[test]
    fn test_picks_closer_station() {
        let origin = Coordinate::new(0.0, 0.0);
        let stations = vec![north_of("Far", origin, 20.0), north_of("Near", origin, 10.0)];

        let result = resolve_nearest(origin, &stations, 40.0).unwrap();
        assert_eq!(&*result.station.name, "Near");
        assert_relative_eq!(result.distance_km, 10.0, epsilon = 0.01);
        assert_eq!(result.eta_minutes, 15);
    }

    #[test]
    fn test_tie_keeps_first_station() {
        let origin = Coordinate::new(0.0, 0.0);
        let east = Station::new("East", Coordinate::new(0.0, 0.1));
        let west = Station::new("West", Coordinate::new(0.0, -0.1));

        let result = resolve_nearest(origin, &[east.clone(), west.clone()], 40.0).unwrap();
        assert_eq!(result.station, east);

        let result = resolve_nearest(origin, &[west.clone(), east], 40.0).unwrap();
        assert_eq!(result.station, west);
    }

    #[test]
    fn test_palembang_incident() {
        let stations = vec![Station::new(
            "Pos Kemuning",
            Coordinate::new(-2.9812230886637825, 104.75763792231362),
        )];

        let result = resolve_nearest(INCIDENT, &stations, 40.0).unwrap();
        assert_eq!(result.distance_km, 2.01);
        assert_eq!(
            result.eta_minutes,
            (haversine_km(INCIDENT, stations[0].location) / 40.0 * 60.0).round() as u32
        );
        assert_eq!(result.eta_minutes, 3);
    }

    #[test]
    fn test_empty_station_list() {
        let stations: Vec<Station> = Vec::new();
        let err = resolve_nearest(INCIDENT, &stations, 40.0).unwrap_err();
        assert!(matches!(err, StationError::InvalidInput(msg) if msg == "no station data"));
    }

    #[test]
    fn test_nan_incident_has_no_nearest() {
        let stations = vec![Station::new("Any", INCIDENT)];
        let err = resolve_nearest(Coordinate::new(f64::NAN, 0.0), &stations, 40.0).unwrap_err();
        assert!(matches!(err, StationError::InvalidInput(_)));
    }

    #[test]
    fn test_out_of_range_coordinates_are_accepted() {
        let stations = vec![Station::new("Any", INCIDENT)];
        let result = resolve_nearest(Coordinate::new(123.0, 500.0), &stations, 40.0).unwrap();
        assert!(result.distance_km >= 0.0);
    }

    #[test]
    fn test_antipodal_station_is_resolved() {
        let stations = vec![Station::new("Far side", Coordinate::new(87.5, 180.0))];
        let result = resolve_nearest(Coordinate::new(-87.5, 0.0), &stations, 40.0).unwrap();

        assert_eq!(&*result.station.name, "Far side");
        assert_relative_eq!(result.distance_km, 20015.09, epsilon = 0.01);
    }

    #[test]
    fn test_invalid_speed() {
        let stations = vec![Station::new("Any", INCIDENT)];
        for speed in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(resolve_nearest(INCIDENT, &stations, speed).is_err());
            assert!(NearestStationResolver::new(speed).is_err());
        }
    }

    #[test]
    fn test_deterministic() {
        let stations = vec![
            north_of("A", INCIDENT, 3.3),
            north_of("B", INCIDENT, 1.7),
            north_of("C", INCIDENT, 8.2),
        ];
        let first = resolve_nearest(INCIDENT, &stations, 40.0).unwrap();
        let second = resolve_nearest(INCIDENT, &stations, 40.0).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
    }

    #[test]
    fn test_eta_monotonic_in_speed() {
        let mut previous = u32::MAX;
        for speed in [5.0, 10.0, 20.0, 40.0, 60.0, 90.0, 120.0] {
            let eta = eta_minutes(12.5, speed);
            assert!(eta <= previous);
            previous = eta;
        }
        assert_eq!(eta_minutes(10.0, 40.0), 15);
        assert_eq!(eta_minutes(0.0, 40.0), 0);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(0.8049), 0.8);
        assert_eq!(round_to_hundredths(12.3456), 12.35);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }

    #[test]
    fn test_resolver_accepts_shared_stations() {
        use std::sync::Arc;

        let resolver = NearestStationResolver::default();
        assert_eq!(resolver.average_speed_kmh(), DEFAULT_AVERAGE_SPEED_KMH);

        let stations = vec![Arc::new(north_of("Shared", INCIDENT, 2.0))];
        let result = resolver.resolve(INCIDENT, &stations).unwrap();
        assert_eq!(&*result.station.name, "Shared");
        assert_eq!(result.eta_minutes, 3);
    }
}
