//! # Menuboard API
//!
//! HTTP handlers, DTOs, auth extractor, and the router.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
