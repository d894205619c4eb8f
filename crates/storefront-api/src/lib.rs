//! Storefront API Library
//!
//! HTTP handlers, route composition, and application setup for the
//! storefront backend.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorBody, HttpError};
pub use state::AppState;
