//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Place not found")]
    PlaceNotFound,

    #[error("Menu not found")]
    MenuNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Item not found")]
    ItemNotFound,

    #[error("Caller does not own this resource")]
    Forbidden,

    #[error("No adjacent sibling to swap with")]
    NothingToSwap,

    #[error("Menu is in use as a place's primary menu")]
    MenuInUse,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}
