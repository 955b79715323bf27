//! A dish or drink on the menu.
//!
//! Items are keyed by [`MenuItemId`] inside the [`MenuCatalog`](crate::catalog::MenuCatalog);
//! orders keep their own copies, so later catalog edits never reach an
//! order that was already placed.

use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuItemId(pub i32);

impl From<i32> for MenuItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `id` - Catalog key, unique among items present at the same time
    /// * `name` - Display name
    /// * `price` - Unit price in rupees, never negative
    pub fn new(id: impl Into<MenuItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Prices keep at least one decimal place: `10.0`, `15.5`.
impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} - {:?} rupees.", self.id, self.name, self.price)
    }
}
