//! PostgreSQL implementation of the hierarchy store.

mod rows;
mod store_impl;

pub use store_impl::PgHierarchyStore;
