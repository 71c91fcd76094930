//! SQLx row types mapped to domain entities.

use sqlx::FromRow;
use uuid::Uuid;

use menuboard_core::domain::{Category, Group, Item, Menu, Place};

#[derive(Debug, FromRow)]
pub struct PlaceRow {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub theme_color: String,
    pub currency: String,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    pub logo_url: Option<String>,
    pub background_url: Option<String>,
    pub wifi_name: Option<String>,
    pub wifi_password: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub can_order: bool,
    pub primary_menu_id: Option<Uuid>,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Place {
            id: row.id,
            owner: row.owner,
            name: row.name,
            theme_color: row.theme_color,
            currency: row.currency,
            phone_code: row.phone_code,
            phone_number: row.phone_number,
            logo_url: row.logo_url,
            background_url: row.background_url,
            wifi_name: row.wifi_name,
            wifi_password: row.wifi_password,
            city: row.city,
            country: row.country,
            address: row.address,
            can_order: row.can_order,
            primary_menu: row.primary_menu_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MenuRow {
    pub id: Uuid,
    pub place_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            place_id: row.place_id,
            name: row.name,
            description: row.description,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub place_id: Uuid,
    pub menu_id: Uuid,
    pub name: String,
    pub position: i32,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            place_id: row.place_id,
            menu_id: row.menu_id,
            name: row.name,
            position: row.position,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct GroupRow {
    pub id: Uuid,
    pub place_id: Uuid,
    pub menu_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub position: i32,
    pub background_url: Option<String>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            place_id: row.place_id,
            menu_id: row.menu_id,
            category_id: row.category_id,
            name: row.name,
            position: row.position,
            background_url: row.background_url,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ItemRow {
    pub id: Uuid,
    pub place_id: Uuid,
    pub menu_id: Uuid,
    pub category_id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    pub position: i32,
    pub description: Option<String>,
    pub price: f64,
    pub old_price: Option<f64>,
    pub weight: Option<String>,
    pub image_url: Option<String>,
    pub visible: bool,
    pub available: bool,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            place_id: row.place_id,
            menu_id: row.menu_id,
            category_id: row.category_id,
            group_id: row.group_id,
            name: row.name,
            position: row.position,
            description: row.description,
            price: row.price,
            old_price: row.old_price,
            weight: row.weight,
            image_url: row.image_url,
            visible: row.visible,
            available: row.available,
        }
    }
}
