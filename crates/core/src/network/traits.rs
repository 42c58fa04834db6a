//! Pluggable networking traits.
//!
//! Implementations wrap third-party services. Both traits are infallible at
//! the type level: a failed lookup degrades to a fallback value and is
//! logged by the implementation.

use std::future::Future;
use std::pin::Pin;

use fireguard_stations::Coordinate;

use crate::geocoding::AddressLookup;
use crate::routing::RoadRoute;

/// Fetch a driving route between two points
pub trait RouteProvider: Send + Sync {
    /// `None` when no route could be obtained for any reason
    fn try_fetch_route<'a>(
        &'a self,
        start: Coordinate,
        end: Coordinate,
    ) -> Pin<Box<dyn Future<Output = Option<RoadRoute>> + Send + 'a>>;
}

/// Turn a coordinate into a human readable address
pub trait ReverseGeocoder: Send + Sync {
    fn reverse<'a>(
        &'a self,
        point: Coordinate,
    ) -> Pin<Box<dyn Future<Output = AddressLookup> + Send + 'a>>;
}
