//! Menu endpoints

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use menuboard_core::domain::{Category, Item, Menu};
use menuboard_core::store::HierarchyStore;

use crate::auth::AuthUser;
use crate::dto::{CreateMenuRequest, UpdateMenuRequest};
use crate::error::{map_domain_error, validation_failure, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_menu<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Json(payload): Json<CreateMenuRequest>,
) -> Result<Json<ApiResponse<Menu>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let menu = state
        .menus
        .create(&subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(menu)))
}

pub async fn find_menu<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Menu>>, ApiFailure> {
    let menu = state.menus.get(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(menu)))
}

pub async fn update_menu<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuRequest>,
) -> Result<Json<ApiResponse<Menu>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let menu = state
        .menus
        .update(id, &subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(menu)))
}

pub async fn delete_menu<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .menus
        .delete(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn list_menu_categories<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiFailure> {
    let categories = state.menus.categories(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(categories)))
}

pub async fn list_menu_items<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Item>>>, ApiFailure> {
    let items = state.menus.items(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(items)))
}
