//! Cascading creates and deletes
//!
//! Seed-on-create gives every new subtree demonstrable content; cascade-on-
//! delete removes whole subtrees child-to-parent. Each operation is one
//! all-or-nothing transaction: an abort leaves the store exactly as found.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Category, Group, Item, Menu, Place};
use crate::error::DomainError;
use crate::store::HierarchyStore;

pub struct Cascade<S> {
    store: Arc<S>,
}

impl<S> Clone for Cascade<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: HierarchyStore> Cascade<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a place with its default Menu → Category → Group → Item chain
    /// and point the place at the seeded menu as primary.
    pub async fn create_place(&self, mut place: Place) -> Result<Place, DomainError> {
        let menu = Menu::default_menu(place.id);
        let category = Category::default_category(place.id, menu.id);
        let group = Group::default_group(place.id, menu.id, category.id);
        let item = Item::default_item(place.id, menu.id, category.id, group.id);

        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.insert_place(&mut tx, &place).await?;
            self.store.insert_menu(&mut tx, &menu).await?;
            self.store.insert_category(&mut tx, &category).await?;
            self.store.insert_group(&mut tx, &group).await?;
            self.store.insert_item(&mut tx, &item).await?;
            place.primary_menu = Some(menu.id);
            self.store.update_place(&mut tx, &place).await
        }
        .await;
        self.finish(tx, result).await?;

        info!(place = %place.id, menu = %menu.id, "place created with seed chain");
        Ok(place)
    }

    /// Create a menu directly, seeding a default Category → Group underneath.
    pub async fn create_menu(&self, menu: Menu) -> Result<Menu, DomainError> {
        let category = Category::default_category(menu.place_id, menu.id);
        let group = Group::default_group(menu.place_id, menu.id, category.id);

        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.insert_menu(&mut tx, &menu).await?;
            self.store.insert_category(&mut tx, &category).await?;
            self.store.insert_group(&mut tx, &group).await
        }
        .await;
        self.finish(tx, result).await?;
        Ok(menu)
    }

    /// Create a category directly, seeding a default Group underneath.
    pub async fn create_category(&self, category: Category) -> Result<Category, DomainError> {
        let group = Group::default_group(category.place_id, category.menu_id, category.id);

        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.insert_category(&mut tx, &category).await?;
            self.store.insert_group(&mut tx, &group).await
        }
        .await;
        self.finish(tx, result).await?;
        Ok(category)
    }

    pub async fn create_group(&self, group: Group) -> Result<Group, DomainError> {
        let mut tx = self.store.begin().await?;
        let result = self.store.insert_group(&mut tx, &group).await;
        self.finish(tx, result).await?;
        Ok(group)
    }

    pub async fn create_item(&self, item: Item) -> Result<Item, DomainError> {
        let mut tx = self.store.begin().await?;
        let result = self.store.insert_item(&mut tx, &item).await;
        self.finish(tx, result).await?;
        Ok(item)
    }

    /// Delete a place and everything under it. The primary-menu reference is
    /// cleared first inside the same transaction so the menu rows can go.
    pub async fn delete_place(&self, place: &Place) -> Result<(), DomainError> {
        let menus = self.store.menus_by_place(place.id).await?;

        let mut tx = self.store.begin().await?;
        let result = async {
            let mut unlinked = place.clone();
            unlinked.primary_menu = None;
            self.store.update_place(&mut tx, &unlinked).await?;
            for menu in &menus {
                self.store.delete_items_by_menu(&mut tx, menu.id).await?;
                self.store.delete_groups_by_menu(&mut tx, menu.id).await?;
                self.store
                    .delete_categories_by_menu(&mut tx, menu.id)
                    .await?;
            }
            self.store.delete_menus_by_place(&mut tx, place.id).await?;
            self.store.delete_place(&mut tx, place.id).await
        }
        .await;
        self.finish(tx, result).await?;

        info!(place = %place.id, menus = menus.len(), "place deleted");
        Ok(())
    }

    /// Delete a menu and its subtree. Refused while the menu is the place's
    /// primary menu; the check runs before the transaction is opened.
    pub async fn delete_menu(&self, menu: &Menu) -> Result<(), DomainError> {
        let place = self
            .store
            .find_place(menu.place_id)
            .await?
            .ok_or(DomainError::PlaceNotFound)?;
        if place.primary_menu == Some(menu.id) {
            return Err(DomainError::MenuInUse);
        }

        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.delete_items_by_menu(&mut tx, menu.id).await?;
            self.store.delete_groups_by_menu(&mut tx, menu.id).await?;
            self.store
                .delete_categories_by_menu(&mut tx, menu.id)
                .await?;
            self.store.delete_menu(&mut tx, menu.id).await
        }
        .await;
        self.finish(tx, result).await
    }

    pub async fn delete_category(&self, category: &Category) -> Result<(), DomainError> {
        let mut tx = self.store.begin().await?;
        let result = async {
            self.store
                .delete_items_by_category(&mut tx, category.id)
                .await?;
            self.store
                .delete_groups_by_category(&mut tx, category.id)
                .await?;
            self.store.delete_category(&mut tx, category.id).await
        }
        .await;
        self.finish(tx, result).await
    }

    pub async fn delete_group(&self, group: &Group) -> Result<(), DomainError> {
        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.delete_items_by_group(&mut tx, group.id).await?;
            self.store.delete_group(&mut tx, group.id).await
        }
        .await;
        self.finish(tx, result).await
    }

    pub async fn delete_item(&self, item: &Item) -> Result<(), DomainError> {
        let mut tx = self.store.begin().await?;
        let result = self.store.delete_item(&mut tx, item.id).await;
        self.finish(tx, result).await
    }

    async fn finish(&self, tx: S::Tx, result: Result<(), DomainError>) -> Result<(), DomainError> {
        match result {
            Ok(()) => self.store.commit(tx).await,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                Err(e)
            }
        }
    }
}
