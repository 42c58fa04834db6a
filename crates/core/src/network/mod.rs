//! Network and IO abstractions.

pub mod http;
pub mod traits;

pub use traits::{ReverseGeocoder, RouteProvider};
