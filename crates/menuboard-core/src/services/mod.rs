//! Hierarchy services (business logic)

pub mod cascade;
pub mod category_service;
pub mod group_service;
pub mod item_service;
pub mod menu_service;
pub mod ordering;
pub mod ownership;
pub mod place_service;

pub use cascade::Cascade;
pub use category_service::CategoryService;
pub use group_service::GroupService;
pub use item_service::ItemService;
pub use menu_service::MenuService;
pub use ordering::SiblingOrder;
pub use ownership::OwnershipResolver;
pub use place_service::PlaceService;
