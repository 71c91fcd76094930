//! Category entity — ordered among siblings of the same menu.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: Uuid,
    pub place_id: Uuid,
    pub menu_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 1_000_000, message = "Position out of range"))]
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub menu: Uuid,
    pub name: String,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
}

impl Category {
    pub fn new(
        place_id: Uuid,
        menu_id: Uuid,
        name: String,
        position: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let category = Self {
            id: Uuid::new_v4(),
            place_id,
            menu_id,
            name: name.trim().to_string(),
            position,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn default_category(place_id: Uuid, menu_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            place_id,
            menu_id,
            name: "Food".to_string(),
            position: 0,
        }
    }

    pub fn apply(&mut self, changes: CategoryChanges) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category() {
        let category = Category::new(Uuid::new_v4(), Uuid::new_v4(), "Drinks".to_string(), 0);
        assert!(category.is_ok());
    }

    #[test]
    fn test_rejects_negative_position() {
        let category = Category::new(Uuid::new_v4(), Uuid::new_v4(), "Drinks".to_string(), -1);
        assert!(category.is_err());
    }
}
