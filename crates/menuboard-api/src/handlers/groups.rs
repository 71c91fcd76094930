//! Group endpoints

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use menuboard_core::domain::{Group, Item};
use menuboard_core::store::HierarchyStore;

use crate::auth::AuthUser;
use crate::dto::{CreateGroupRequest, UpdateGroupRequest};
use crate::error::{map_domain_error, validation_failure, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_group<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<Json<ApiResponse<Group>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let group = state
        .groups
        .create(&subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(group)))
}

pub async fn find_group<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Group>>, ApiFailure> {
    let group = state.groups.get(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(group)))
}

pub async fn update_group<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGroupRequest>,
) -> Result<Json<ApiResponse<Group>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let group = state
        .groups
        .update(id, &subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(group)))
}

pub async fn delete_group<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .groups
        .delete(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn move_group_up<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .groups
        .move_up(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn move_group_down<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .groups
        .move_down(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn list_group_items<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Item>>>, ApiFailure> {
    let items = state.groups.items(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(items)))
}
