//! Store port for the menu hierarchy.
//!
//! One trait covering the five collections plus transaction control. Every
//! write takes an open transaction so the caller decides the atomic unit; a
//! single-operation caller simply begins and commits around one call.
//!
//! Parent-scoped finders return siblings sorted by `(position, id)` ascending
//! (plain `id` where no position exists), so neighbor selection stays
//! deterministic even if historical data carries duplicate positions.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Group, Item, Menu, Place};
use crate::error::DomainError;

#[async_trait]
pub trait HierarchyStore: Send + Sync + 'static {
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, DomainError>;
    async fn commit(&self, tx: Self::Tx) -> Result<(), DomainError>;
    async fn rollback(&self, tx: Self::Tx) -> Result<(), DomainError>;

    // Places
    async fn find_place(&self, id: Uuid) -> Result<Option<Place>, DomainError>;
    async fn places_by_owner(&self, owner: &str) -> Result<Vec<Place>, DomainError>;
    async fn insert_place(&self, tx: &mut Self::Tx, place: &Place) -> Result<(), DomainError>;
    async fn update_place(&self, tx: &mut Self::Tx, place: &Place) -> Result<(), DomainError>;
    async fn delete_place(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError>;

    // Menus
    async fn find_menu(&self, id: Uuid) -> Result<Option<Menu>, DomainError>;
    async fn menus_by_place(&self, place_id: Uuid) -> Result<Vec<Menu>, DomainError>;
    async fn insert_menu(&self, tx: &mut Self::Tx, menu: &Menu) -> Result<(), DomainError>;
    async fn update_menu(&self, tx: &mut Self::Tx, menu: &Menu) -> Result<(), DomainError>;
    async fn delete_menu(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError>;
    async fn delete_menus_by_place(
        &self,
        tx: &mut Self::Tx,
        place_id: Uuid,
    ) -> Result<(), DomainError>;

    // Categories
    async fn find_category(&self, id: Uuid) -> Result<Option<Category>, DomainError>;
    async fn categories_by_menu(&self, menu_id: Uuid) -> Result<Vec<Category>, DomainError>;
    async fn insert_category(
        &self,
        tx: &mut Self::Tx,
        category: &Category,
    ) -> Result<(), DomainError>;
    async fn update_category(
        &self,
        tx: &mut Self::Tx,
        category: &Category,
    ) -> Result<(), DomainError>;
    async fn delete_category(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError>;
    async fn delete_categories_by_menu(
        &self,
        tx: &mut Self::Tx,
        menu_id: Uuid,
    ) -> Result<(), DomainError>;

    // Groups
    async fn find_group(&self, id: Uuid) -> Result<Option<Group>, DomainError>;
    async fn groups_by_category(&self, category_id: Uuid) -> Result<Vec<Group>, DomainError>;
    async fn insert_group(&self, tx: &mut Self::Tx, group: &Group) -> Result<(), DomainError>;
    async fn update_group(&self, tx: &mut Self::Tx, group: &Group) -> Result<(), DomainError>;
    async fn delete_group(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError>;
    async fn delete_groups_by_category(
        &self,
        tx: &mut Self::Tx,
        category_id: Uuid,
    ) -> Result<(), DomainError>;
    async fn delete_groups_by_menu(
        &self,
        tx: &mut Self::Tx,
        menu_id: Uuid,
    ) -> Result<(), DomainError>;

    // Items
    async fn find_item(&self, id: Uuid) -> Result<Option<Item>, DomainError>;
    async fn items_by_group(&self, group_id: Uuid) -> Result<Vec<Item>, DomainError>;
    /// Flat listing for a whole menu, sorted by (category, group, position).
    async fn items_by_menu(&self, menu_id: Uuid) -> Result<Vec<Item>, DomainError>;
    async fn insert_item(&self, tx: &mut Self::Tx, item: &Item) -> Result<(), DomainError>;
    async fn update_item(&self, tx: &mut Self::Tx, item: &Item) -> Result<(), DomainError>;
    async fn delete_item(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError>;
    async fn delete_items_by_group(
        &self,
        tx: &mut Self::Tx,
        group_id: Uuid,
    ) -> Result<(), DomainError>;
    async fn delete_items_by_category(
        &self,
        tx: &mut Self::Tx,
        category_id: Uuid,
    ) -> Result<(), DomainError>;
    async fn delete_items_by_menu(
        &self,
        tx: &mut Self::Tx,
        menu_id: Uuid,
    ) -> Result<(), DomainError>;
}
