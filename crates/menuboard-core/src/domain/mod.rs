//! Domain entities for the menu hierarchy.
//!
//! Place → Menu → Category → Group → Item. Parent references are set at
//! creation and never change; sibling order lives in `position`.

pub mod category;
pub mod group;
pub mod item;
pub mod menu;
pub mod place;

pub use category::{Category, CategoryChanges, NewCategory};
pub use group::{Group, GroupChanges, NewGroup};
pub use item::{Item, ItemChanges, NewItem};
pub use menu::{Menu, MenuChanges, NewMenu};
pub use place::{NewPlace, Place, PlaceChanges};
