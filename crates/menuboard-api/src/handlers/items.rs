//! Item endpoints

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use menuboard_core::domain::Item;
use menuboard_core::store::HierarchyStore;

use crate::auth::AuthUser;
use crate::dto::{CreateItemRequest, UpdateItemRequest};
use crate::error::{map_domain_error, validation_failure, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_item<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Json(payload): Json<CreateItemRequest>,
) -> Result<Json<ApiResponse<Item>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let item = state
        .items
        .create(&subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(item)))
}

pub async fn find_item<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Item>>, ApiFailure> {
    let item = state.items.get(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(item)))
}

pub async fn update_item<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<ApiResponse<Item>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let item = state
        .items
        .update(id, &subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(item)))
}

pub async fn delete_item<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .items
        .delete(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn move_item_up<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .items
        .move_up(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn move_item_down<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .items
        .move_down(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}
