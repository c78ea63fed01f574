//! Domain Layer
//!
//! Menu entities and core abstractions.
//! This layer has no I/O (serde for the wire shape only).

mod entity;
mod menu_item;
mod category;
mod restaurant;

pub use entity::{find_by_id, Entity, MenuError, MenuResult, LOAD_FAILED_MESSAGE};
pub use menu_item::{AddOn, Customizations, MenuItem, SizeOption, MAX_SPICY_LEVEL};
pub use category::{Category, FALLBACK_ICON};
pub use restaurant::{Contact, Restaurant};
