//! HTTP surface for FireGuard dispatch lookups.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
