//! Category service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Category, CategoryChanges, Group, NewCategory};
use crate::error::DomainError;
use crate::services::{Cascade, OwnershipResolver, SiblingOrder};
use crate::store::HierarchyStore;

pub struct CategoryService<S> {
    store: Arc<S>,
    ownership: OwnershipResolver<S>,
    order: SiblingOrder<S>,
    cascade: Cascade<S>,
}

impl<S: HierarchyStore> CategoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ownership: OwnershipResolver::new(Arc::clone(&store)),
            order: SiblingOrder::new(Arc::clone(&store)),
            cascade: Cascade::new(Arc::clone(&store)),
            store,
        }
    }

    /// Create a category under a menu the caller owns, appending at the end
    /// unless a position is supplied. Seeds a default group.
    pub async fn create(&self, subject: &str, input: NewCategory) -> Result<Category, DomainError> {
        let menu = self.ownership.owned_menu(input.menu, subject).await?;
        let position = match input.position {
            Some(position) => position,
            None => self.order.next_category_position(menu.id).await?,
        };
        let category = Category::new(menu.place_id, menu.id, input.name, position)?;
        self.cascade.create_category(category).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Category, DomainError> {
        self.store
            .find_category(id)
            .await?
            .ok_or(DomainError::CategoryNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        subject: &str,
        changes: CategoryChanges,
    ) -> Result<Category, DomainError> {
        let mut category = self.ownership.owned_category(id, subject).await?;
        category.apply(changes)?;

        let mut tx = self.store.begin().await?;
        match self.store.update_category(&mut tx, &category).await {
            Ok(()) => self.store.commit(tx).await?,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                return Err(e);
            }
        }
        Ok(category)
    }

    pub async fn delete(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let category = self.ownership.owned_category(id, subject).await?;
        self.cascade.delete_category(&category).await
    }

    /// Swap positions with the previous sibling.
    pub async fn move_up(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let category = self.ownership.owned_category(id, subject).await?;
        let previous = self
            .order
            .previous_category(&category)
            .await?
            .ok_or(DomainError::NothingToSwap)?;
        self.order.swap_categories(category, previous).await
    }

    /// Swap positions with the next sibling.
    pub async fn move_down(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let category = self.ownership.owned_category(id, subject).await?;
        let next = self
            .order
            .next_category(&category)
            .await?
            .ok_or(DomainError::NothingToSwap)?;
        self.order.swap_categories(category, next).await
    }

    /// Public listing of a category's groups, sorted by position.
    pub async fn groups(&self, id: Uuid) -> Result<Vec<Group>, DomainError> {
        self.store.groups_by_category(id).await
    }
}
