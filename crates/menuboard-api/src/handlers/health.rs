//! Health check

use axum::Json;
use serde_json::{json, Value};

use crate::response::ApiResponse;

pub async fn health_check() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(json!({ "status": "healthy" })))
}
