//! Menu entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub id: Uuid,
    pub place_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub place: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Menu {
    pub fn new(
        place_id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id: Uuid::new_v4(),
            place_id,
            name: name.trim().to_string(),
            description,
        };
        menu.validate()?;
        Ok(menu)
    }

    /// The menu every new place starts with.
    pub fn default_menu(place_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            place_id,
            name: "Default Menu".to_string(),
            description: None,
        }
    }

    pub fn apply(&mut self, changes: MenuChanges) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        self.validate()
    }
}
