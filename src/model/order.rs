//! Represents a placed order.
//!
//! Orders are created by the [`OrderBook`](crate::orders::OrderBook), which hands
//! out ids from a counter that starts at 1 and never goes back.

use crate::model::{CustomerId, MenuItem};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Checked against the roster only when the order is placed.
    pub customer_id: CustomerId,
    /// Snapshots taken from the catalog at the time of ordering.
    pub items: Vec<MenuItem>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the order book
    /// * `customer_id` - Customer placing the order
    /// * `items` - Copies of the ordered menu items
    pub fn new(id: OrderId, customer_id: CustomerId, items: Vec<MenuItem>) -> Self {
        Self {
            id,
            customer_id,
            items,
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order#{} for Customer ID: {}, Items: [",
            self.id, self.customer_id
        )?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
