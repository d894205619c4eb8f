//! Storefront core library
//!
//! Configuration and the application error taxonomy shared by the
//! storage and API crates.

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, LogLevel};
