//! Item entity — the leaf of the hierarchy, ordered within its group.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Item {
    pub id: Uuid,
    pub place_id: Uuid,
    pub menu_id: Uuid,
    pub category_id: Uuid,
    pub group_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 1_000_000, message = "Position out of range"))]
    pub position: i32,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,

    #[validate(range(min = 0.0, message = "Old price must be non-negative"))]
    pub old_price: Option<f64>,

    #[validate(length(max = 10, message = "Weight label too long"))]
    pub weight: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    pub visible: bool,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub group: Uuid,
    pub name: String,
    pub position: Option<i32>,
    pub description: Option<String>,
    pub price: f64,
    pub old_price: Option<f64>,
    pub weight: Option<String>,
    pub image_url: Option<String>,
    pub visible: Option<bool>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub weight: Option<String>,
    pub image_url: Option<String>,
    pub visible: Option<bool>,
    pub available: Option<bool>,
}

impl Item {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        place_id: Uuid,
        menu_id: Uuid,
        category_id: Uuid,
        group_id: Uuid,
        input: NewItem,
        position: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: Uuid::new_v4(),
            place_id,
            menu_id,
            category_id,
            group_id,
            name: input.name.trim().to_string(),
            position,
            description: input.description,
            price: input.price,
            old_price: input.old_price,
            weight: input.weight,
            image_url: input.image_url,
            visible: input.visible.unwrap_or(true),
            available: input.available.unwrap_or(true),
        };
        item.validate()?;
        Ok(item)
    }

    pub fn default_item(place_id: Uuid, menu_id: Uuid, category_id: Uuid, group_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            place_id,
            menu_id,
            category_id,
            group_id,
            name: "Breadsticks".to_string(),
            position: 0,
            description: None,
            price: 10.0,
            old_price: None,
            weight: None,
            image_url: None,
            visible: true,
            available: true,
        }
    }

    pub fn apply(&mut self, changes: ItemChanges) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(old_price) = changes.old_price {
            self.old_price = Some(old_price);
        }
        if let Some(weight) = changes.weight {
            self.weight = Some(weight);
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(visible) = changes.visible {
            self.visible = visible;
        }
        if let Some(available) = changes.available {
            self.available = available;
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(price: f64) -> NewItem {
        NewItem {
            group: Uuid::new_v4(),
            name: "Bruschetta".to_string(),
            position: None,
            description: None,
            price,
            old_price: None,
            weight: None,
            image_url: None,
            visible: None,
            available: None,
        }
    }

    #[test]
    fn test_create_item_defaults_flags() {
        let item = Item::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            new_item(6.5),
            0,
        )
        .unwrap();
        assert!(item.visible);
        assert!(item.available);
    }

    #[test]
    fn test_rejects_negative_price() {
        let item = Item::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            new_item(-1.0),
            0,
        );
        assert!(item.is_err());
    }
}
