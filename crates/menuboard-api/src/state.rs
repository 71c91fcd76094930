//! Shared application state

use std::sync::Arc;

use menuboard_core::services::{
    CategoryService, GroupService, ItemService, MenuService, PlaceService,
};
use menuboard_core::store::HierarchyStore;

use crate::auth::TokenVerifier;

pub struct AppState<S> {
    pub places: Arc<PlaceService<S>>,
    pub menus: Arc<MenuService<S>>,
    pub categories: Arc<CategoryService<S>>,
    pub groups: Arc<GroupService<S>>,
    pub items: Arc<ItemService<S>>,
    pub verifier: Arc<TokenVerifier>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            places: Arc::clone(&self.places),
            menus: Arc::clone(&self.menus),
            categories: Arc::clone(&self.categories),
            groups: Arc::clone(&self.groups),
            items: Arc::clone(&self.items),
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<S: HierarchyStore> AppState<S> {
    pub fn new(store: Arc<S>, verifier: TokenVerifier) -> Self {
        Self {
            places: Arc::new(PlaceService::new(Arc::clone(&store))),
            menus: Arc::new(MenuService::new(Arc::clone(&store))),
            categories: Arc::new(CategoryService::new(Arc::clone(&store))),
            groups: Arc::new(GroupService::new(Arc::clone(&store))),
            items: Arc::new(ItemService::new(store)),
            verifier: Arc::new(verifier),
        }
    }
}
