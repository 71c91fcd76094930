//! Category endpoints

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use menuboard_core::domain::{Category, Group};
use menuboard_core::store::HierarchyStore;

use crate::auth::AuthUser;
use crate::dto::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{map_domain_error, validation_failure, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_category<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let category = state
        .categories
        .create(&subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(category)))
}

pub async fn find_category<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Category>>, ApiFailure> {
    let category = state.categories.get(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(category)))
}

pub async fn update_category<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let category = state
        .categories
        .update(id, &subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(category)))
}

pub async fn delete_category<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .categories
        .delete(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn move_category_up<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .categories
        .move_up(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn move_category_down<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .categories
        .move_down(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn list_category_groups<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Group>>>, ApiFailure> {
    let groups = state
        .categories
        .groups(id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(groups)))
}
