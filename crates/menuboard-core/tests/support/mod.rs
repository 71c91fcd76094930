//! In-memory `HierarchyStore` for service tests.
//!
//! Transactions stage writes against a snapshot of the committed state;
//! commit swaps the snapshot in, rollback drops it. A write budget can be
//! armed to fail the Nth staged write, for atomicity tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use menuboard_core::domain::{Category, Group, Item, Menu, NewPlace, Place};
use menuboard_core::error::DomainError;
use menuboard_core::services::PlaceService;
use menuboard_core::store::HierarchyStore;

#[derive(Default, Clone)]
pub struct State {
    pub places: HashMap<Uuid, Place>,
    pub menus: HashMap<Uuid, Menu>,
    pub categories: HashMap<Uuid, Category>,
    pub groups: HashMap<Uuid, Group>,
    pub items: HashMap<Uuid, Item>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    write_budget: Mutex<Option<usize>>,
}

pub struct MemTx {
    staged: State,
}

impl MemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Allow `n` more staged writes, then fail every write with a storage
    /// error until the budget is cleared.
    pub fn fail_after_writes(&self, n: usize) {
        *self.write_budget.lock().unwrap() = Some(n);
    }

    pub fn clear_write_budget(&self) {
        *self.write_budget.lock().unwrap() = None;
    }

    pub fn snapshot(&self) -> State {
        self.state.lock().unwrap().clone()
    }

    fn charge(&self) -> Result<(), DomainError> {
        let mut budget = self.write_budget.lock().unwrap();
        match budget.as_mut() {
            None => Ok(()),
            Some(0) => Err(DomainError::Storage("injected write failure".to_string())),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl HierarchyStore for MemoryStore {
    type Tx = MemTx;

    async fn begin(&self) -> Result<MemTx, DomainError> {
        Ok(MemTx {
            staged: self.state.lock().unwrap().clone(),
        })
    }

    async fn commit(&self, tx: MemTx) -> Result<(), DomainError> {
        *self.state.lock().unwrap() = tx.staged;
        Ok(())
    }

    async fn rollback(&self, _tx: MemTx) -> Result<(), DomainError> {
        Ok(())
    }

    // Places

    async fn find_place(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        Ok(self.state.lock().unwrap().places.get(&id).cloned())
    }

    async fn places_by_owner(&self, owner: &str) -> Result<Vec<Place>, DomainError> {
        let mut places: Vec<Place> = self
            .state
            .lock()
            .unwrap()
            .places
            .values()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect();
        places.sort_by_key(|p| p.id);
        Ok(places)
    }

    async fn insert_place(&self, tx: &mut MemTx, place: &Place) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.places.insert(place.id, place.clone());
        Ok(())
    }

    async fn update_place(&self, tx: &mut MemTx, place: &Place) -> Result<(), DomainError> {
        self.charge()?;
        if !tx.staged.places.contains_key(&place.id) {
            return Err(DomainError::Storage("place row missing".to_string()));
        }
        tx.staged.places.insert(place.id, place.clone());
        Ok(())
    }

    async fn delete_place(&self, tx: &mut MemTx, id: Uuid) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.places.remove(&id);
        Ok(())
    }

    // Menus

    async fn find_menu(&self, id: Uuid) -> Result<Option<Menu>, DomainError> {
        Ok(self.state.lock().unwrap().menus.get(&id).cloned())
    }

    async fn menus_by_place(&self, place_id: Uuid) -> Result<Vec<Menu>, DomainError> {
        let mut menus: Vec<Menu> = self
            .state
            .lock()
            .unwrap()
            .menus
            .values()
            .filter(|m| m.place_id == place_id)
            .cloned()
            .collect();
        menus.sort_by_key(|m| m.id);
        Ok(menus)
    }

    async fn insert_menu(&self, tx: &mut MemTx, menu: &Menu) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.menus.insert(menu.id, menu.clone());
        Ok(())
    }

    async fn update_menu(&self, tx: &mut MemTx, menu: &Menu) -> Result<(), DomainError> {
        self.charge()?;
        if !tx.staged.menus.contains_key(&menu.id) {
            return Err(DomainError::Storage("menu row missing".to_string()));
        }
        tx.staged.menus.insert(menu.id, menu.clone());
        Ok(())
    }

    async fn delete_menu(&self, tx: &mut MemTx, id: Uuid) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.menus.remove(&id);
        Ok(())
    }

    async fn delete_menus_by_place(
        &self,
        tx: &mut MemTx,
        place_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.menus.retain(|_, m| m.place_id != place_id);
        Ok(())
    }

    // Categories

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self.state.lock().unwrap().categories.get(&id).cloned())
    }

    async fn categories_by_menu(&self, menu_id: Uuid) -> Result<Vec<Category>, DomainError> {
        let mut categories: Vec<Category> = self
            .state
            .lock()
            .unwrap()
            .categories
            .values()
            .filter(|c| c.menu_id == menu_id)
            .cloned()
            .collect();
        categories.sort_by_key(|c| (c.position, c.id));
        Ok(categories)
    }

    async fn insert_category(&self, tx: &mut MemTx, category: &Category) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn update_category(&self, tx: &mut MemTx, category: &Category) -> Result<(), DomainError> {
        self.charge()?;
        if !tx.staged.categories.contains_key(&category.id) {
            return Err(DomainError::Storage("category row missing".to_string()));
        }
        tx.staged.categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn delete_category(&self, tx: &mut MemTx, id: Uuid) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.categories.remove(&id);
        Ok(())
    }

    async fn delete_categories_by_menu(
        &self,
        tx: &mut MemTx,
        menu_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.categories.retain(|_, c| c.menu_id != menu_id);
        Ok(())
    }

    // Groups

    async fn find_group(&self, id: Uuid) -> Result<Option<Group>, DomainError> {
        Ok(self.state.lock().unwrap().groups.get(&id).cloned())
    }

    async fn groups_by_category(&self, category_id: Uuid) -> Result<Vec<Group>, DomainError> {
        let mut groups: Vec<Group> = self
            .state
            .lock()
            .unwrap()
            .groups
            .values()
            .filter(|g| g.category_id == category_id)
            .cloned()
            .collect();
        groups.sort_by_key(|g| (g.position, g.id));
        Ok(groups)
    }

    async fn insert_group(&self, tx: &mut MemTx, group: &Group) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.groups.insert(group.id, group.clone());
        Ok(())
    }

    async fn update_group(&self, tx: &mut MemTx, group: &Group) -> Result<(), DomainError> {
        self.charge()?;
        if !tx.staged.groups.contains_key(&group.id) {
            return Err(DomainError::Storage("group row missing".to_string()));
        }
        tx.staged.groups.insert(group.id, group.clone());
        Ok(())
    }

    async fn delete_group(&self, tx: &mut MemTx, id: Uuid) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.groups.remove(&id);
        Ok(())
    }

    async fn delete_groups_by_category(
        &self,
        tx: &mut MemTx,
        category_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.groups.retain(|_, g| g.category_id != category_id);
        Ok(())
    }

    async fn delete_groups_by_menu(
        &self,
        tx: &mut MemTx,
        menu_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.groups.retain(|_, g| g.menu_id != menu_id);
        Ok(())
    }

    // Items

    async fn find_item(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        Ok(self.state.lock().unwrap().items.get(&id).cloned())
    }

    async fn items_by_group(&self, group_id: Uuid) -> Result<Vec<Item>, DomainError> {
        let mut items: Vec<Item> = self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.group_id == group_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| (i.position, i.id));
        Ok(items)
    }

    async fn items_by_menu(&self, menu_id: Uuid) -> Result<Vec<Item>, DomainError> {
        let mut items: Vec<Item> = self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.menu_id == menu_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| (i.category_id, i.group_id, i.position, i.id));
        Ok(items)
    }

    async fn insert_item(&self, tx: &mut MemTx, item: &Item) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn update_item(&self, tx: &mut MemTx, item: &Item) -> Result<(), DomainError> {
        self.charge()?;
        if !tx.staged.items.contains_key(&item.id) {
            return Err(DomainError::Storage("item row missing".to_string()));
        }
        tx.staged.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete_item(&self, tx: &mut MemTx, id: Uuid) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.items.remove(&id);
        Ok(())
    }

    async fn delete_items_by_group(
        &self,
        tx: &mut MemTx,
        group_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.items.retain(|_, i| i.group_id != group_id);
        Ok(())
    }

    async fn delete_items_by_category(
        &self,
        tx: &mut MemTx,
        category_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.items.retain(|_, i| i.category_id != category_id);
        Ok(())
    }

    async fn delete_items_by_menu(
        &self,
        tx: &mut MemTx,
        menu_id: Uuid,
    ) -> Result<(), DomainError> {
        self.charge()?;
        tx.staged.items.retain(|_, i| i.menu_id != menu_id);
        Ok(())
    }
}

pub fn place_input(name: &str) -> NewPlace {
    NewPlace {
        name: name.to_string(),
        currency: "USD".to_string(),
        ..Default::default()
    }
}

/// Create a fully seeded place for `owner` and return it.
pub async fn seed_place(store: &Arc<MemoryStore>, owner: &str) -> Place {
    PlaceService::new(Arc::clone(store))
        .create(owner, place_input("Corner Bistro"))
        .await
        .unwrap()
}
