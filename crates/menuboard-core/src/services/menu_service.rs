//! Menu service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Category, Item, Menu, MenuChanges, NewMenu};
use crate::error::DomainError;
use crate::services::{Cascade, OwnershipResolver};
use crate::store::HierarchyStore;

pub struct MenuService<S> {
    store: Arc<S>,
    ownership: OwnershipResolver<S>,
    cascade: Cascade<S>,
}

impl<S: HierarchyStore> MenuService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ownership: OwnershipResolver::new(Arc::clone(&store)),
            cascade: Cascade::new(Arc::clone(&store)),
            store,
        }
    }

    /// Create a menu under a place the caller owns, seeding a default
    /// category and group.
    pub async fn create(&self, subject: &str, input: NewMenu) -> Result<Menu, DomainError> {
        let place = self.ownership.owned_place(input.place, subject).await?;
        let menu = Menu::new(place.id, input.name, input.description)?;
        self.cascade.create_menu(menu).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Menu, DomainError> {
        self.store
            .find_menu(id)
            .await?
            .ok_or(DomainError::MenuNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        subject: &str,
        changes: MenuChanges,
    ) -> Result<Menu, DomainError> {
        let mut menu = self.ownership.owned_menu(id, subject).await?;
        menu.apply(changes)?;

        let mut tx = self.store.begin().await?;
        match self.store.update_menu(&mut tx, &menu).await {
            Ok(()) => self.store.commit(tx).await?,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                return Err(e);
            }
        }
        Ok(menu)
    }

    /// Delete a menu and its subtree; refused while it is a primary menu.
    pub async fn delete(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let menu = self.ownership.owned_menu(id, subject).await?;
        self.cascade.delete_menu(&menu).await
    }

    /// Public listing of a menu's categories, sorted by position.
    pub async fn categories(&self, id: Uuid) -> Result<Vec<Category>, DomainError> {
        self.store.categories_by_menu(id).await
    }

    /// Public flat listing of every item on a menu.
    pub async fn items(&self, id: Uuid) -> Result<Vec<Item>, DomainError> {
        self.store.items_by_menu(id).await
    }
}
