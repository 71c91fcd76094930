//! Place service — operations on the hierarchy root.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Menu, NewPlace, Place, PlaceChanges};
use crate::error::DomainError;
use crate::services::{Cascade, OwnershipResolver};
use crate::store::HierarchyStore;

pub struct PlaceService<S> {
    store: Arc<S>,
    ownership: OwnershipResolver<S>,
    cascade: Cascade<S>,
}

impl<S: HierarchyStore> PlaceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ownership: OwnershipResolver::new(Arc::clone(&store)),
            cascade: Cascade::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn list_for_owner(&self, subject: &str) -> Result<Vec<Place>, DomainError> {
        self.store.places_by_owner(subject).await
    }

    /// Create a place and its seed chain.
    pub async fn create(&self, subject: &str, input: NewPlace) -> Result<Place, DomainError> {
        let place = Place::new(subject.to_string(), input)?;
        self.cascade.create_place(place).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Place, DomainError> {
        self.store
            .find_place(id)
            .await?
            .ok_or(DomainError::PlaceNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        subject: &str,
        changes: PlaceChanges,
    ) -> Result<Place, DomainError> {
        let mut place = self.ownership.owned_place(id, subject).await?;
        place.apply(changes)?;

        let mut tx = self.store.begin().await?;
        match self.store.update_place(&mut tx, &place).await {
            Ok(()) => self.store.commit(tx).await?,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                return Err(e);
            }
        }
        Ok(place)
    }

    pub async fn delete(&self, id: Uuid, subject: &str) -> Result<(), DomainError> {
        let place = self.ownership.owned_place(id, subject).await?;
        self.cascade.delete_place(&place).await
    }

    /// Menus of a place; owner-scoped.
    pub async fn menus(&self, id: Uuid, subject: &str) -> Result<Vec<Menu>, DomainError> {
        let place = self.ownership.owned_place(id, subject).await?;
        self.store.menus_by_place(place.id).await
    }
}
