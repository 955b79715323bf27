use super::{Console, ConsoleError};
use crate::catalog::MenuCatalog;
use crate::lifecycle::Restaurant;
use crate::model::{CustomerId, MenuItem, MenuItemId, OrderId};
use crate::orders::OrderError;
use std::io::{BufRead, Write};
use tracing::debug;

const OPTIONS: [&str; 5] = [
    "View Orders",
    "Delete Order by ID",
    "Update Order by ID",
    "Clear All Orders",
    "Back",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderAction {
    View,
    Delete,
    Update,
    Clear,
    Back,
}

impl OrderAction {
    fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::View),
            2 => Some(Self::Delete),
            3 => Some(Self::Update),
            4 => Some(Self::Clear),
            5 => Some(Self::Back),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn create_order(&mut self, restaurant: &mut Restaurant) -> Result<(), ConsoleError> {
        let customer_id = CustomerId(self.ask_int("Enter customer ID: ")?);
        if !restaurant.roster.contains(customer_id) {
            return self.say("Customer not found!");
        }

        let items = self.pick_items(
            &restaurant.catalog,
            "Enter item ID (0 to finish): ",
            "Invalid item ID.",
        )?;
        match restaurant.orders.add(customer_id, items) {
            Ok(order_id) => {
                debug!(%order_id, "Order created");
                self.say("Order placed.")
            }
            Err(e) => self.say(order_error_message(&e)),
        }
    }

    pub(super) fn manage_orders(&mut self, restaurant: &mut Restaurant) -> Result<(), ConsoleError> {
        loop {
            let choice = self.choose("Order Management", &OPTIONS)?;
            let Some(action) = OrderAction::from_choice(choice) else {
                self.say("Invalid option.")?;
                continue;
            };
            debug!(?action, "Order management");
            match action {
                OrderAction::View => {
                    if restaurant.orders.is_empty() {
                        self.say("No orders.")?;
                    }
                    for order in restaurant.orders.list_all() {
                        self.say(order)?;
                    }
                }
                OrderAction::Delete => {
                    let id = self.ask_order_id("Enter Order ID to delete: ")?;
                    if restaurant.orders.remove_by_id(id) {
                        self.say("Order deleted.")?;
                    } else {
                        self.say("Order not found.")?;
                    }
                }
                OrderAction::Update => {
                    let id = self.ask_order_id("Enter Order ID to update: ")?;
                    if restaurant.orders.get(id).is_none() {
                        self.say("Order not found.")?;
                        continue;
                    }
                    let items = self.pick_items(
                        &restaurant.catalog,
                        "Enter new item ID (0 to finish): ",
                        "Invalid item.",
                    )?;
                    match restaurant.orders.update_items_by_id(id, items) {
                        Ok(()) => self.say("Order updated.")?,
                        Err(e) => self.say(order_error_message(&e))?,
                    }
                    // Single-shot: back to the main menu whatever the outcome.
                    return Ok(());
                }
                OrderAction::Clear => {
                    restaurant.orders.clear();
                    self.say("All orders cleared.")?;
                }
                OrderAction::Back => return Ok(()),
            }
        }
    }

    /// Collects snapshots of catalog items until the user enters 0.
    fn pick_items(
        &mut self,
        catalog: &MenuCatalog,
        question: &str,
        invalid: &str,
    ) -> Result<Vec<MenuItem>, ConsoleError> {
        let mut items = Vec::new();
        loop {
            let id = self.ask_int(question)?;
            if id == 0 {
                return Ok(items);
            }
            match catalog.search(MenuItemId(id)) {
                Some(item) => items.push(item.clone()),
                None => self.say(invalid)?,
            }
        }
    }

    /// Order ids are never negative, so a negative entry simply matches nothing.
    fn ask_order_id(&mut self, question: &str) -> Result<OrderId, ConsoleError> {
        let id = self.ask_int(question)?;
        Ok(OrderId(u32::try_from(id).unwrap_or(0)))
    }
}

fn order_error_message(error: &OrderError) -> &'static str {
    match error {
        OrderError::NoItemsSelected => "No items selected.",
        OrderError::NotFound(_) => "Order not found.",
    }
}
