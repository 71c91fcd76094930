//! Group service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Group, GroupChanges, Item, NewGroup};
use crate::error::DomainError;
use crate::services::{Cascade, OwnershipResolver, SiblingOrder};
use crate::store::HierarchyStore;

pub struct GroupService<S> {
    store: Arc<S>,
    ownership: OwnershipResolver<S>,
    order: SiblingOrder<S>,
    cascade: Cascade<S>,
}

impl<S: HierarchyStore> GroupService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ownership: OwnershipResolver::new(Arc::clone(&store)),
            order: SiblingOrder::new(Arc::clone(&store)),
            cascade: Cascade::new(Arc::clone(&store)),
            store,
        }
    }

    /// Create a group under a category the caller owns. The menu reference is
    /// denormalized from the category, never supplied by the caller.
    pub async fn create(&self, subject: &str, input: NewGroup) -> Result<Group, DomainError> {
        let category = self.ownership.owned_category(input.category, subject).await?;
        let position = match input.position {
            Some(position) => position,
            None => self.order.next_group_position(category.id).await?,
        };
        let group = Group::new(
            category.place_id,
            category.menu_id,
            category.id,
            input.name,
            position,
            input.background_url,
        )?;
        self.cascade.create_group(group).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Group, DomainError> {
        self.store
            .find_group(id)
            .await?
            .ok_or(DomainError::GroupNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        subject: &str,
        changes: GroupChanges,
    ) -> Result<Group, DomainError> {
        let mut group = self.ownership.owned_group(id, subject).await?;
        group.apply(changes)?;

        let mut tx = self.store.begin().await?;
        match self.store.update_group(&mut tx, &group).await {
            Ok(()) => self.store.commit(tx).await?,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                return Err(e);
            }
        }
        Ok(group)
    }

    pub async fn delete(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let group = self.ownership.owned_group(id, subject).await?;
        self.cascade.delete_group(&group).await
    }

    pub async fn move_up(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let group = self.ownership.owned_group(id, subject).await?;
        let previous = self
            .order
            .previous_group(&group)
            .await?
            .ok_or(DomainError::NothingToSwap)?;
        self.order.swap_groups(group, previous).await
    }

    pub async fn move_down(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let group = self.ownership.owned_group(id, subject).await?;
        let next = self
            .order
            .next_group(&group)
            .await?
            .ok_or(DomainError::NothingToSwap)?;
        self.order.swap_groups(group, next).await
    }

    /// Public listing of a group's items, sorted by position.
    pub async fn items(&self, id: Uuid) -> Result<Vec<Item>, DomainError> {
        self.store.items_by_group(id).await
    }
}
