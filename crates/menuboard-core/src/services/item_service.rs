//! Item service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Item, ItemChanges, NewItem};
use crate::error::DomainError;
use crate::services::{Cascade, OwnershipResolver, SiblingOrder};
use crate::store::HierarchyStore;

pub struct ItemService<S> {
    store: Arc<S>,
    ownership: OwnershipResolver<S>,
    order: SiblingOrder<S>,
    cascade: Cascade<S>,
}

impl<S: HierarchyStore> ItemService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ownership: OwnershipResolver::new(Arc::clone(&store)),
            order: SiblingOrder::new(Arc::clone(&store)),
            cascade: Cascade::new(Arc::clone(&store)),
            store,
        }
    }

    /// Create an item under a group the caller owns. Category and menu
    /// references are denormalized from the group.
    pub async fn create(&self, subject: &str, input: NewItem) -> Result<Item, DomainError> {
        let group = self.ownership.owned_group(input.group, subject).await?;
        let position = match input.position {
            Some(position) => position,
            None => self.order.next_item_position(group.id).await?,
        };
        let item = Item::new(
            group.place_id,
            group.menu_id,
            group.category_id,
            group.id,
            input,
            position,
        )?;
        self.cascade.create_item(item).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Item, DomainError> {
        self.store
            .find_item(id)
            .await?
            .ok_or(DomainError::ItemNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        subject: &str,
        changes: ItemChanges,
    ) -> Result<Item, DomainError> {
        let mut item = self.ownership.owned_item(id, subject).await?;
        item.apply(changes)?;

        let mut tx = self.store.begin().await?;
        match self.store.update_item(&mut tx, &item).await {
            Ok(()) => self.store.commit(tx).await?,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                return Err(e);
            }
        }
        Ok(item)
    }

    pub async fn delete(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let item = self.ownership.owned_item(id, subject).await?;
        self.cascade.delete_item(&item).await
    }

    pub async fn move_up(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let item = self.ownership.owned_item(id, subject).await?;
        let previous = self
            .order
            .previous_item(&item)
            .await?
            .ok_or(DomainError::NothingToSwap)?;
        self.order.swap_items(item, previous).await
    }

    pub async fn move_down(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let item = self.ownership.owned_item(id, subject).await?;
        let next = self
            .order
            .next_item(&item)
            .await?
            .ok_or(DomainError::NothingToSwap)?;
        self.order.swap_items(item, next).await
    }
}
