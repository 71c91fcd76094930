//! Route table

use axum::routing::{get, patch, post};
use axum::Router;

use menuboard_core::store::HierarchyStore;

use crate::handlers::{categories, groups, health, items, menus, places};
use crate::state::AppState;

pub fn router<S: HierarchyStore>(state: AppState<S>) -> Router {
    let api = Router::new()
        .route(
            "/places",
            get(places::list_places::<S>).post(places::create_place::<S>),
        )
        .route(
            "/places/{id}",
            get(places::find_place::<S>)
                .patch(places::update_place::<S>)
                .delete(places::delete_place::<S>),
        )
        .route("/places/{id}/menus", get(places::list_place_menus::<S>))
        .route("/menus", post(menus::create_menu::<S>))
        .route(
            "/menus/{id}",
            get(menus::find_menu::<S>)
                .patch(menus::update_menu::<S>)
                .delete(menus::delete_menu::<S>),
        )
        .route(
            "/menus/{id}/categories",
            get(menus::list_menu_categories::<S>),
        )
        .route("/menus/{id}/items", get(menus::list_menu_items::<S>))
        .route("/categories", post(categories::create_category::<S>))
        .route(
            "/categories/{id}",
            get(categories::find_category::<S>)
                .patch(categories::update_category::<S>)
                .delete(categories::delete_category::<S>),
        )
        .route(
            "/categories/{id}/up",
            patch(categories::move_category_up::<S>),
        )
        .route(
            "/categories/{id}/down",
            patch(categories::move_category_down::<S>),
        )
        .route(
            "/categories/{id}/groups",
            get(categories::list_category_groups::<S>),
        )
        .route("/groups", post(groups::create_group::<S>))
        .route(
            "/groups/{id}",
            get(groups::find_group::<S>)
                .patch(groups::update_group::<S>)
                .delete(groups::delete_group::<S>),
        )
        .route("/groups/{id}/up", patch(groups::move_group_up::<S>))
        .route("/groups/{id}/down", patch(groups::move_group_down::<S>))
        .route("/groups/{id}/items", get(groups::list_group_items::<S>))
        .route("/items", post(items::create_item::<S>))
        .route(
            "/items/{id}",
            get(items::find_item::<S>)
                .patch(items::update_item::<S>)
                .delete(items::delete_item::<S>),
        )
        .route("/items/{id}/up", patch(items::move_item_up::<S>))
        .route("/items/{id}/down", patch(items::move_item_down::<S>));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .with_state(state)
}
