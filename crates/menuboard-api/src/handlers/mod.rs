pub mod categories;
pub mod groups;
pub mod health;
pub mod items;
pub mod menus;
pub mod places;
