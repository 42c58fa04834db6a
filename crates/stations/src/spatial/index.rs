//! R-tree nodes for spatial indexing.
//!
//! ## Two-Stage Filtering
//!
//! Radius queries filter in two stages:
//! 1. **R-tree filter**: Euclidean distance in degree space with a
//!    conservative radius, see [`candidate_radius_degrees`]
//! 2. **Haversine filter**: exact great-circle distance on the candidates
//!
//! [`candidate_radius_degrees`]: crate::spatial::queries::candidate_radius_degrees

use std::sync::Arc;

use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::types::Station;

#[derive(Clone)]
pub struct StationNode {
    pub station: Arc<Station>,
    /// Position in the station list, used to keep configuration order on ties
    pub order: usize,
    point: [f64; 2],
}

impl StationNode {
    pub fn new(station: Arc<Station>, order: usize) -> Self {
        let point = [station.location.longitude, station.location.latitude];
        Self {
            station,
            order,
            point,
        }
    }
}

impl RTreeObject for StationNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}
