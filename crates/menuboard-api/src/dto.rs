//! Request payloads
//!
//! Shape validation happens here; domain rules (hex colors, field ranges)
//! are re-checked by the entities themselves. Position and parent references
//! never appear in update payloads — order changes go through the move
//! endpoints.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use menuboard_core::domain::{
    CategoryChanges, GroupChanges, ItemChanges, MenuChanges, NewCategory, NewGroup, NewItem,
    NewMenu, NewPlace, PlaceChanges,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 8))]
    pub currency: String,
    pub theme_color: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
    #[validate(url)]
    pub background_url: Option<String>,
    pub wifi_name: Option<String>,
    pub wifi_password: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub can_order: Option<bool>,
}

impl From<CreatePlaceRequest> for NewPlace {
    fn from(payload: CreatePlaceRequest) -> Self {
        NewPlace {
            name: payload.name,
            currency: payload.currency,
            theme_color: payload.theme_color,
            phone_code: payload.phone_code,
            phone_number: payload.phone_number,
            logo_url: payload.logo_url,
            background_url: payload.background_url,
            wifi_name: payload.wifi_name,
            wifi_password: payload.wifi_password,
            city: payload.city,
            country: payload.country,
            address: payload.address,
            can_order: payload.can_order,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: Option<String>,
    pub theme_color: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub currency: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
    #[validate(url)]
    pub background_url: Option<String>,
    pub wifi_name: Option<String>,
    pub wifi_password: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub can_order: Option<bool>,
}

impl From<UpdatePlaceRequest> for PlaceChanges {
    fn from(payload: UpdatePlaceRequest) -> Self {
        PlaceChanges {
            name: payload.name,
            theme_color: payload.theme_color,
            currency: payload.currency,
            phone_code: payload.phone_code,
            phone_number: payload.phone_number,
            logo_url: payload.logo_url,
            background_url: payload.background_url,
            wifi_name: payload.wifi_name,
            wifi_password: payload.wifi_password,
            city: payload.city,
            country: payload.country,
            address: payload.address,
            can_order: payload.can_order,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuRequest {
    pub place: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

impl From<CreateMenuRequest> for NewMenu {
    fn from(payload: CreateMenuRequest) -> Self {
        NewMenu {
            place: payload.place,
            name: payload.name,
            description: payload.description,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

impl From<UpdateMenuRequest> for MenuChanges {
    fn from(payload: UpdateMenuRequest) -> Self {
        MenuChanges {
            name: payload.name,
            description: payload.description,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    pub menu: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 1_000_000))]
    pub position: Option<i32>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(payload: CreateCategoryRequest) -> Self {
        NewCategory {
            menu: payload.menu,
            name: payload.name,
            position: payload.position,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryChanges {
    fn from(payload: UpdateCategoryRequest) -> Self {
        CategoryChanges { name: payload.name }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGroupRequest {
    pub category: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 1_000_000))]
    pub position: Option<i32>,
    #[validate(url)]
    pub background_url: Option<String>,
}

impl From<CreateGroupRequest> for NewGroup {
    fn from(payload: CreateGroupRequest) -> Self {
        NewGroup {
            category: payload.category,
            name: payload.name,
            position: payload.position,
            background_url: payload.background_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(url)]
    pub background_url: Option<String>,
}

impl From<UpdateGroupRequest> for GroupChanges {
    fn from(payload: UpdateGroupRequest) -> Self {
        GroupChanges {
            name: payload.name,
            background_url: payload.background_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    pub group: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 1_000_000))]
    pub position: Option<i32>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub old_price: Option<f64>,
    #[validate(length(max = 10))]
    pub weight: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub visible: Option<bool>,
    pub available: Option<bool>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(payload: CreateItemRequest) -> Self {
        NewItem {
            group: payload.group,
            name: payload.name,
            position: payload.position,
            description: payload.description,
            price: payload.price,
            old_price: payload.old_price,
            weight: payload.weight,
            image_url: payload.image_url,
            visible: payload.visible,
            available: payload.available,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub old_price: Option<f64>,
    #[validate(length(max = 10))]
    pub weight: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub visible: Option<bool>,
    pub available: Option<bool>,
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(payload: UpdateItemRequest) -> Self {
        ItemChanges {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            old_price: payload.old_price,
            weight: payload.weight,
            image_url: payload.image_url,
            visible: payload.visible,
            available: payload.available,
        }
    }
}
