//! # Menuboard Core
//!
//! Domain entities, the store port, and the hierarchy services.

pub mod domain;
pub mod error;
pub mod services;
pub mod store;

pub use domain::*;
pub use error::DomainError;
pub use store::HierarchyStore;
