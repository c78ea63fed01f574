//! Routed Pages

mod home;
mod item_detail;

pub use home::Home;
pub use item_detail::ItemDetail;
