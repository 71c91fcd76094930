//! Ownership resolution
//!
//! Every entity resolves to the owner of its place by walking the immediate
//! parent chain (never the denormalized ids). The walk re-runs on every call;
//! nothing is cached across requests.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{Category, Group, Item, Menu, Place};
use crate::error::DomainError;
use crate::store::HierarchyStore;

pub struct OwnershipResolver<S> {
    store: Arc<S>,
}

impl<S> Clone for OwnershipResolver<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: HierarchyStore> OwnershipResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Load a place and check it against the caller.
    pub async fn owned_place(&self, id: Uuid, subject: &str) -> Result<Place, DomainError> {
        let place = self
            .store
            .find_place(id)
            .await?
            .ok_or(DomainError::PlaceNotFound)?;
        self.check(&place, subject)?;
        Ok(place)
    }

    /// Menu → Place.
    pub async fn owned_menu(&self, id: Uuid, subject: &str) -> Result<Menu, DomainError> {
        let menu = self
            .store
            .find_menu(id)
            .await?
            .ok_or(DomainError::MenuNotFound)?;
        let place = self.place_of_menu(&menu).await?;
        self.check(&place, subject)?;
        Ok(menu)
    }

    /// Category → Menu → Place.
    pub async fn owned_category(&self, id: Uuid, subject: &str) -> Result<Category, DomainError> {
        let category = self
            .store
            .find_category(id)
            .await?
            .ok_or(DomainError::CategoryNotFound)?;
        let menu = self.menu_link(category.menu_id).await?;
        let place = self.place_of_menu(&menu).await?;
        self.check(&place, subject)?;
        Ok(category)
    }

    /// Group → Category → Menu → Place.
    pub async fn owned_group(&self, id: Uuid, subject: &str) -> Result<Group, DomainError> {
        let group = self
            .store
            .find_group(id)
            .await?
            .ok_or(DomainError::GroupNotFound)?;
        let category = self.category_link(group.category_id).await?;
        let menu = self.menu_link(category.menu_id).await?;
        let place = self.place_of_menu(&menu).await?;
        self.check(&place, subject)?;
        Ok(group)
    }

    /// Item → Group → Category → Menu → Place.
    pub async fn owned_item(&self, id: Uuid, subject: &str) -> Result<Item, DomainError> {
        let item = self
            .store
            .find_item(id)
            .await?
            .ok_or(DomainError::ItemNotFound)?;
        let group = self
            .store
            .find_group(item.group_id)
            .await?
            .ok_or(DomainError::GroupNotFound)?;
        let category = self.category_link(group.category_id).await?;
        let menu = self.menu_link(category.menu_id).await?;
        let place = self.place_of_menu(&menu).await?;
        self.check(&place, subject)?;
        Ok(item)
    }

    /// Resolve the owning subject of a menu without an authorization check.
    pub async fn resolve_menu_owner(&self, id: Uuid) -> Result<String, DomainError> {
        let menu = self
            .store
            .find_menu(id)
            .await?
            .ok_or(DomainError::MenuNotFound)?;
        Ok(self.place_of_menu(&menu).await?.owner)
    }

    async fn menu_link(&self, id: Uuid) -> Result<Menu, DomainError> {
        self.store
            .find_menu(id)
            .await?
            .ok_or(DomainError::MenuNotFound)
    }

    async fn category_link(&self, id: Uuid) -> Result<Category, DomainError> {
        self.store
            .find_category(id)
            .await?
            .ok_or(DomainError::CategoryNotFound)
    }

    async fn place_of_menu(&self, menu: &Menu) -> Result<Place, DomainError> {
        self.store
            .find_place(menu.place_id)
            .await?
            .ok_or(DomainError::PlaceNotFound)
    }

    fn check(&self, place: &Place, subject: &str) -> Result<(), DomainError> {
        if place.owner != subject {
            warn!(place = %place.id, "ownership check failed");
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }
}
