//! Repository Layer
//!
//! Data fetch abstractions and implementations.

mod traits;
mod query;
mod http_source;
mod memory_source;

#[cfg(test)]
mod tests;

pub use traits::MenuSource;
pub use query::MenuQuery;
pub use http_source::{HttpMenuSource, CATEGORIES_ENDPOINT, MENU_ITEMS_ENDPOINT, RESTAURANT_ENDPOINT};
pub use memory_source::MemoryMenuSource;
