//! Place endpoints

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use menuboard_core::domain::{Menu, Place};
use menuboard_core::store::HierarchyStore;

use crate::auth::AuthUser;
use crate::dto::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::error::{map_domain_error, validation_failure, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn list_places<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
) -> Result<Json<ApiResponse<Vec<Place>>>, ApiFailure> {
    let places = state
        .places
        .list_for_owner(&subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(places)))
}

pub async fn create_place<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Json(payload): Json<CreatePlaceRequest>,
) -> Result<Json<ApiResponse<Place>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let place = state
        .places
        .create(&subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(place)))
}

pub async fn find_place<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Place>>, ApiFailure> {
    let place = state.places.get(id).await.map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(place)))
}

pub async fn update_place<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlaceRequest>,
) -> Result<Json<ApiResponse<Place>>, ApiFailure> {
    payload.validate().map_err(validation_failure)?;
    let place = state
        .places
        .update(id, &subject, payload.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(place)))
}

pub async fn delete_place<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    state
        .places
        .delete(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn list_place_menus<S: HierarchyStore>(
    State(state): State<AppState<S>>,
    AuthUser(subject): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Menu>>>, ApiFailure> {
    let menus = state
        .places
        .menus(id, &subject)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(ApiResponse::success(menus)))
}
