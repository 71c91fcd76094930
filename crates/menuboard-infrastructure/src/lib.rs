//! # Menuboard Infrastructure
//!
//! PostgreSQL adapter for the hierarchy store port.

pub mod database;

pub use database::{create_pool, migrator, PgHierarchyStore};
