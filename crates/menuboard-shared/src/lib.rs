//! # Menuboard Shared
//!
//! Configuration, telemetry, and app-level errors shared across crates.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
