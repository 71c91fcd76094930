//! Place entity — the root of the hierarchy and the ownership anchor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const DEFAULT_THEME_COLOR: &str = "#34cc95";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Place {
    pub id: Uuid,

    /// Verified subject id of the owning user (opaque string).
    pub owner: String,

    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = validate_hex_color))]
    pub theme_color: String,

    #[validate(length(min = 1, max = 8, message = "Currency must be between 1 and 8 characters"))]
    pub currency: String,

    pub phone_code: Option<String>,
    pub phone_number: Option<String>,

    #[validate(url(message = "Logo URL must be a valid URL"))]
    pub logo_url: Option<String>,

    #[validate(url(message = "Background URL must be a valid URL"))]
    pub background_url: Option<String>,

    pub wifi_name: Option<String>,
    pub wifi_password: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,

    pub can_order: bool,

    /// The menu guests land on. Set once the seed chain commits; always
    /// points at an existing menu of this place afterwards.
    pub primary_menu: Option<Uuid>,
}

/// Fields accepted when creating a place.
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name: String,
    pub currency: String,
    pub theme_color: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    pub logo_url: Option<String>,
    pub background_url: Option<String>,
    pub wifi_name: Option<String>,
    pub wifi_password: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub can_order: Option<bool>,
}

/// Fields a place update may touch. `owner` and `primary_menu` are absent:
/// ownership never transfers and the primary menu is managed by the seed chain.
#[derive(Debug, Clone, Default)]
pub struct PlaceChanges {
    pub name: Option<String>,
    pub theme_color: Option<String>,
    pub currency: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    pub logo_url: Option<String>,
    pub background_url: Option<String>,
    pub wifi_name: Option<String>,
    pub wifi_password: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub can_order: Option<bool>,
}

impl Place {
    pub fn new(owner: String, input: NewPlace) -> Result<Self, validator::ValidationErrors> {
        let place = Self {
            id: Uuid::new_v4(),
            owner,
            name: input.name.trim().to_string(),
            theme_color: input
                .theme_color
                .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
            currency: input.currency.trim().to_string(),
            phone_code: input.phone_code,
            phone_number: input.phone_number,
            logo_url: input.logo_url,
            background_url: input.background_url,
            wifi_name: input.wifi_name,
            wifi_password: input.wifi_password,
            city: input.city,
            country: input.country,
            address: input.address,
            can_order: input.can_order.unwrap_or(true),
            primary_menu: None,
        };
        place.validate()?;
        Ok(place)
    }

    pub fn apply(&mut self, changes: PlaceChanges) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(theme_color) = changes.theme_color {
            self.theme_color = theme_color;
        }
        if let Some(currency) = changes.currency {
            self.currency = currency.trim().to_string();
        }
        if let Some(phone_code) = changes.phone_code {
            self.phone_code = Some(phone_code);
        }
        if let Some(phone_number) = changes.phone_number {
            self.phone_number = Some(phone_number);
        }
        if let Some(logo_url) = changes.logo_url {
            self.logo_url = Some(logo_url);
        }
        if let Some(background_url) = changes.background_url {
            self.background_url = Some(background_url);
        }
        if let Some(wifi_name) = changes.wifi_name {
            self.wifi_name = Some(wifi_name);
        }
        if let Some(wifi_password) = changes.wifi_password {
            self.wifi_password = Some(wifi_password);
        }
        if let Some(city) = changes.city {
            self.city = Some(city);
        }
        if let Some(country) = changes.country {
            self.country = Some(country);
        }
        if let Some(address) = changes.address {
            self.address = Some(address);
        }
        if let Some(can_order) = changes.can_order {
            self.can_order = can_order;
        }
        self.validate()
    }
}

fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let rest = value
        .strip_prefix('#')
        .ok_or_else(|| ValidationError::new("hex_color"))?;
    if matches!(rest.len(), 3 | 6) && rest.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}
