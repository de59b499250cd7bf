//! Roster Server Library
//!
//! Read-only REST service over the in-memory user directory, plus version
//! reporting and a couple of demo endpoints.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod version;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use state::AppState;
pub use version::VersionInfo;
