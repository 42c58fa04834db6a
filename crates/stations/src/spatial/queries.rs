//! Spatial query utilities for distance calculations.
//!
//! Uses the Haversine formula on a sphere of radius 6371 km.

use crate::models::types::Coordinate;

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Length of one degree of latitude on the sphere above.
pub const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Great-circle distance between two points in kilometers.
///
/// Coordinates are not range checked.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push near-antipodal pairs just past 1
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of a straight polyline in kilometers, summing Haversine legs.
pub fn path_length_km(path: &geo::LineString) -> f64 {
    path.lines()
        .map(|line| haversine_km(line.start.into(), line.end.into()))
        .sum()
}

/// Radius in degree space that contains every point within `radius_km`
/// of `center`, for R-tree candidate filtering.
///
/// Returns `None` when the bound is too loose to be useful (near the poles
/// or for very large radii), or when the circle would wrap past the
/// antimeridian or the center is out of range. Callers should then scan
/// everything.
pub fn candidate_radius_degrees(center: Coordinate, radius_km: f64) -> Option<f64> {
    if !center.is_within_bounds() {
        return None;
    }

    let lat_span = radius_km / KM_PER_DEGREE;
    let worst_lat = (center.latitude.abs() + lat_span).to_radians();
    let cos = worst_lat.cos();

    if !(cos > 0.01) || lat_span >= 45.0 {
        return None;
    }

    let lon_span = lat_span / cos;
    // 10% slack for the small-angle approximation
    let bound = (lat_span * lat_span + lon_span * lon_span).sqrt() * 1.1;

    // degree space does not wrap
    if center.longitude - bound < -180.0
        || center.longitude + bound > 180.0
        || center.latitude.abs() + bound > 90.0
    {
        return None;
    }

    Some(bound)
}
