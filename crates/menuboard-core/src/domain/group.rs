//! Group entity — ordered among siblings of the same category.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_GROUP_IMAGE: &str =
    "https://menuboard.sgp1.digitaloceanspaces.com/appetizer.jpeg";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Group {
    pub id: Uuid,
    pub place_id: Uuid,
    pub menu_id: Uuid,
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 1_000_000, message = "Position out of range"))]
    pub position: i32,

    #[validate(url(message = "Background URL must be a valid URL"))]
    pub background_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub category: Uuid,
    pub name: String,
    pub position: Option<i32>,
    pub background_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub background_url: Option<String>,
}

impl Group {
    pub fn new(
        place_id: Uuid,
        menu_id: Uuid,
        category_id: Uuid,
        name: String,
        position: i32,
        background_url: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let group = Self {
            id: Uuid::new_v4(),
            place_id,
            menu_id,
            category_id,
            name: name.trim().to_string(),
            position,
            background_url,
        };
        group.validate()?;
        Ok(group)
    }

    pub fn default_group(place_id: Uuid, menu_id: Uuid, category_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            place_id,
            menu_id,
            category_id,
            name: "Appetizers".to_string(),
            position: 0,
            background_url: Some(DEFAULT_GROUP_IMAGE.to_string()),
        }
    }

    pub fn apply(&mut self, changes: GroupChanges) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(background_url) = changes.background_url {
            self.background_url = Some(background_url);
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group_carries_image() {
        let group = Group::default_group(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(group.background_url.as_deref(), Some(DEFAULT_GROUP_IMAGE));
        assert_eq!(group.position, 0);
    }
}
