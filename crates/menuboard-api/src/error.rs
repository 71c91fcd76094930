//! Domain error to HTTP mapping

use axum::http::StatusCode;
use axum::Json;

use menuboard_core::error::DomainError;

use crate::response::ApiResponse;

pub type ApiFailure = (StatusCode, Json<ApiResponse<()>>);

pub fn failure(status: StatusCode, code: &str, message: &str) -> ApiFailure {
    (status, Json(ApiResponse::error(code, message)))
}

pub fn map_domain_error(error: DomainError) -> ApiFailure {
    match error {
        DomainError::PlaceNotFound
        | DomainError::MenuNotFound
        | DomainError::CategoryNotFound
        | DomainError::GroupNotFound
        | DomainError::ItemNotFound => {
            failure(StatusCode::NOT_FOUND, "NOT_FOUND", &error.to_string())
        }
        DomainError::Forbidden => failure(StatusCode::FORBIDDEN, "FORBIDDEN", &error.to_string()),
        DomainError::NothingToSwap | DomainError::MenuInUse => failure(
            StatusCode::BAD_REQUEST,
            "INVALID_OPERATION",
            &error.to_string(),
        ),
        DomainError::Validation(message) => {
            failure(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", &message)
        }
        DomainError::Storage(_) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "STORAGE_ERROR",
            "Storage backend failed; safe to retry",
        ),
    }
}

pub fn validation_failure(errors: validator::ValidationErrors) -> ApiFailure {
    failure(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        &errors.to_string(),
    )
}
