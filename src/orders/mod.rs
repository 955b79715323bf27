//! # Order Book
//!
//! Orders in the order they were placed. Listing is first-in-first-out, but any
//! order can be updated or removed by id.
//!
//! Ids come from a counter that starts at 1. The counter only moves forward:
//! deleting or clearing orders never frees an id for reuse, and a rejected
//! (empty) order does not consume one.

pub mod error;

pub use error::*;

use crate::model::{CustomerId, MenuItem, Order, OrderId};
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: VecDeque<Order>,
    next_id: u32,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self {
            orders: VecDeque::new(),
            next_id: 1,
        }
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an order and returns its id.
    ///
    /// # Errors
    /// [`OrderError::NoItemsSelected`] if `items` is empty; no id is consumed.
    pub fn add(
        &mut self,
        customer_id: CustomerId,
        items: Vec<MenuItem>,
    ) -> Result<OrderId, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItemsSelected);
        }
        let id = OrderId(self.next_id);
        self.next_id += 1;
        self.orders.push_back(Order::new(id, customer_id, items));
        info!(order_id = %id, %customer_id, size = self.orders.len(), "Order placed");
        Ok(id)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn remove_by_id(&mut self, id: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|order| order.id != id);
        let removed = self.orders.len() < before;
        debug!(order_id = %id, removed, "Remove order");
        removed
    }

    /// Replaces the full item list of an order.
    ///
    /// # Errors
    /// - [`OrderError::NoItemsSelected`] if `items` is empty; the order keeps its items.
    /// - [`OrderError::NotFound`] if no order has `id`.
    pub fn update_items_by_id(
        &mut self,
        id: OrderId,
        items: Vec<MenuItem>,
    ) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrderError::NotFound(id))?;
        if items.is_empty() {
            return Err(OrderError::NoItemsSelected);
        }
        order.items = items;
        info!(order_id = %id, items = order.items.len(), "Order updated");
        Ok(())
    }

    /// Drops every order. The id counter is not reset.
    pub fn clear(&mut self) {
        info!(cleared = self.orders.len(), "Orders cleared");
        self.orders.clear();
    }

    /// Orders in the order they were placed.
    pub fn list_all(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
