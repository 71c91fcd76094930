//! `HierarchyStore` adapter over PostgreSQL.
//!
//! Every write runs against the caller's transaction; reads go straight to
//! the pool. Sibling listings order by `(position, id)` so neighbor selection
//! stays deterministic under duplicate positions.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::error;
use uuid::Uuid;

use menuboard_core::domain::{Category, Group, Item, Menu, Place};
use menuboard_core::error::DomainError;
use menuboard_core::store::HierarchyStore;

use super::rows::{CategoryRow, GroupRow, ItemRow, MenuRow, PlaceRow};

const PLACE_COLUMNS: &str = "id, owner, name, theme_color, currency, phone_code, phone_number, \
     logo_url, background_url, wifi_name, wifi_password, city, country, address, can_order, \
     primary_menu_id";
const MENU_COLUMNS: &str = "id, place_id, name, description";
const CATEGORY_COLUMNS: &str = "id, place_id, menu_id, name, position";
const GROUP_COLUMNS: &str = "id, place_id, menu_id, category_id, name, position, background_url";
const ITEM_COLUMNS: &str = "id, place_id, menu_id, category_id, group_id, name, position, \
     description, price, old_price, weight, image_url, visible, available";

pub struct PgHierarchyStore {
    pool: PgPool,
}

impl PgHierarchyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage(e: sqlx::Error) -> DomainError {
    error!("database error: {}", e);
    DomainError::Storage(e.to_string())
}

fn updated(result: sqlx::postgres::PgQueryResult, what: &str) -> Result<(), DomainError> {
    if result.rows_affected() == 0 {
        return Err(DomainError::Storage(format!("{what} row missing")));
    }
    Ok(())
}

#[async_trait]
impl HierarchyStore for PgHierarchyStore {
    type Tx = Transaction<'static, Postgres>;

    async fn begin(&self) -> Result<Self::Tx, DomainError> {
        self.pool.begin().await.map_err(storage)
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), DomainError> {
        tx.commit().await.map_err(storage)
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), DomainError> {
        tx.rollback().await.map_err(storage)
    }

    // Places

    async fn find_place(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        let row: Option<PlaceRow> =
            sqlx::query_as(&format!("SELECT {PLACE_COLUMNS} FROM places WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn places_by_owner(&self, owner: &str) -> Result<Vec<Place>, DomainError> {
        let rows: Vec<PlaceRow> = sqlx::query_as(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE owner = $1 ORDER BY id"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_place(&self, tx: &mut Self::Tx, place: &Place) -> Result<(), DomainError> {
        sqlx::query(&format!(
            "INSERT INTO places ({PLACE_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)"
        ))
        .bind(place.id)
        .bind(&place.owner)
        .bind(&place.name)
        .bind(&place.theme_color)
        .bind(&place.currency)
        .bind(&place.phone_code)
        .bind(&place.phone_number)
        .bind(&place.logo_url)
        .bind(&place.background_url)
        .bind(&place.wifi_name)
        .bind(&place.wifi_password)
        .bind(&place.city)
        .bind(&place.country)
        .bind(&place.address)
        .bind(place.can_order)
        .bind(place.primary_menu)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        Ok(())
    }

    async fn update_place(&self, tx: &mut Self::Tx, place: &Place) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE places SET \
                name = $2, theme_color = $3, currency = $4, phone_code = $5, phone_number = $6, \
                logo_url = $7, background_url = $8, wifi_name = $9, wifi_password = $10, \
                city = $11, country = $12, address = $13, can_order = $14, primary_menu_id = $15 \
             WHERE id = $1",
        )
        .bind(place.id)
        .bind(&place.name)
        .bind(&place.theme_color)
        .bind(&place.currency)
        .bind(&place.phone_code)
        .bind(&place.phone_number)
        .bind(&place.logo_url)
        .bind(&place.background_url)
        .bind(&place.wifi_name)
        .bind(&place.wifi_password)
        .bind(&place.city)
        .bind(&place.country)
        .bind(&place.address)
        .bind(place.can_order)
        .bind(place.primary_menu)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        updated(result, "place")
    }

    async fn delete_place(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    // Menus

    async fn find_menu(&self, id: Uuid) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> =
            sqlx::query_as(&format!("SELECT {MENU_COLUMNS} FROM menus WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn menus_by_place(&self, place_id: Uuid) -> Result<Vec<Menu>, DomainError> {
        let rows: Vec<MenuRow> = sqlx::query_as(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE place_id = $1 ORDER BY id"
        ))
        .bind(place_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_menu(&self, tx: &mut Self::Tx, menu: &Menu) -> Result<(), DomainError> {
        sqlx::query(&format!(
            "INSERT INTO menus ({MENU_COLUMNS}) VALUES ($1, $2, $3, $4)"
        ))
        .bind(menu.id)
        .bind(menu.place_id)
        .bind(&menu.name)
        .bind(&menu.description)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        Ok(())
    }

    async fn update_menu(&self, tx: &mut Self::Tx, menu: &Menu) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE menus SET name = $2, description = $3 WHERE id = $1")
            .bind(menu.id)
            .bind(&menu.name)
            .bind(&menu.description)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        updated(result, "menu")
    }

    async fn delete_menu(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_menus_by_place(
        &self,
        tx: &mut Self::Tx,
        place_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM menus WHERE place_id = $1")
            .bind(place_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    // Categories

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM menu_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn categories_by_menu(&self, menu_id: Uuid) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM menu_categories \
             WHERE menu_id = $1 ORDER BY position, id"
        ))
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_category(
        &self,
        tx: &mut Self::Tx,
        category: &Category,
    ) -> Result<(), DomainError> {
        sqlx::query(&format!(
            "INSERT INTO menu_categories ({CATEGORY_COLUMNS}) VALUES ($1, $2, $3, $4, $5)"
        ))
        .bind(category.id)
        .bind(category.place_id)
        .bind(category.menu_id)
        .bind(&category.name)
        .bind(category.position)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        Ok(())
    }

    async fn update_category(
        &self,
        tx: &mut Self::Tx,
        category: &Category,
    ) -> Result<(), DomainError> {
        let result =
            sqlx::query("UPDATE menu_categories SET name = $2, position = $3 WHERE id = $1")
                .bind(category.id)
                .bind(&category.name)
                .bind(category.position)
                .execute(&mut **tx)
                .await
                .map_err(storage)?;
        updated(result, "category")
    }

    async fn delete_category(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM menu_categories WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_categories_by_menu(
        &self,
        tx: &mut Self::Tx,
        menu_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM menu_categories WHERE menu_id = $1")
            .bind(menu_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    // Groups

    async fn find_group(&self, id: Uuid) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(&format!(
            "SELECT {GROUP_COLUMNS} FROM category_groups WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn groups_by_category(&self, category_id: Uuid) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(&format!(
            "SELECT {GROUP_COLUMNS} FROM category_groups \
             WHERE category_id = $1 ORDER BY position, id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_group(&self, tx: &mut Self::Tx, group: &Group) -> Result<(), DomainError> {
        sqlx::query(&format!(
            "INSERT INTO category_groups ({GROUP_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)"
        ))
        .bind(group.id)
        .bind(group.place_id)
        .bind(group.menu_id)
        .bind(group.category_id)
        .bind(&group.name)
        .bind(group.position)
        .bind(&group.background_url)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        Ok(())
    }

    async fn update_group(&self, tx: &mut Self::Tx, group: &Group) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE category_groups SET name = $2, position = $3, background_url = $4 \
             WHERE id = $1",
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(group.position)
        .bind(&group.background_url)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        updated(result, "group")
    }

    async fn delete_group(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM category_groups WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_groups_by_category(
        &self,
        tx: &mut Self::Tx,
        category_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM category_groups WHERE category_id = $1")
            .bind(category_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_groups_by_menu(
        &self,
        tx: &mut Self::Tx,
        menu_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM category_groups WHERE menu_id = $1")
            .bind(menu_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    // Items

    async fn find_item(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM group_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        Ok(row.map(Into::into))
    }

    async fn items_by_group(&self, group_id: Uuid) -> Result<Vec<Item>, DomainError> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM group_items WHERE group_id = $1 ORDER BY position, id"
        ))
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn items_by_menu(&self, menu_id: Uuid) -> Result<Vec<Item>, DomainError> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM group_items WHERE menu_id = $1 \
             ORDER BY category_id, group_id, position, id"
        ))
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_item(&self, tx: &mut Self::Tx, item: &Item) -> Result<(), DomainError> {
        sqlx::query(&format!(
            "INSERT INTO group_items ({ITEM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
        ))
        .bind(item.id)
        .bind(item.place_id)
        .bind(item.menu_id)
        .bind(item.category_id)
        .bind(item.group_id)
        .bind(&item.name)
        .bind(item.position)
        .bind(&item.description)
        .bind(item.price)
        .bind(item.old_price)
        .bind(&item.weight)
        .bind(&item.image_url)
        .bind(item.visible)
        .bind(item.available)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        Ok(())
    }

    async fn update_item(&self, tx: &mut Self::Tx, item: &Item) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE group_items SET \
                name = $2, position = $3, description = $4, price = $5, old_price = $6, \
                weight = $7, image_url = $8, visible = $9, available = $10 \
             WHERE id = $1",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.position)
        .bind(&item.description)
        .bind(item.price)
        .bind(item.old_price)
        .bind(&item.weight)
        .bind(&item.image_url)
        .bind(item.visible)
        .bind(item.available)
        .execute(&mut **tx)
        .await
        .map_err(storage)?;
        updated(result, "item")
    }

    async fn delete_item(&self, tx: &mut Self::Tx, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM group_items WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_items_by_group(
        &self,
        tx: &mut Self::Tx,
        group_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM group_items WHERE group_id = $1")
            .bind(group_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_items_by_category(
        &self,
        tx: &mut Self::Tx,
        category_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM group_items WHERE category_id = $1")
            .bind(category_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn delete_items_by_menu(
        &self,
        tx: &mut Self::Tx,
        menu_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM group_items WHERE menu_id = $1")
            .bind(menu_id)
            .execute(&mut **tx)
            .await
            .map_err(storage)?;
        Ok(())
    }
}
