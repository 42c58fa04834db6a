//! Station data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::{FireStation, StationProvider};
pub use types::{Coordinate, ResolutionResult, Result, Station, StationDistance, StationError};
