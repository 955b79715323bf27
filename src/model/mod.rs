//! Plain data records shared by the catalog, roster and order book.

pub mod customer;
pub mod menu_item;
pub mod order;

pub use customer::*;
pub use menu_item::*;
pub use order::*;
