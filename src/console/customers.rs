use super::{Console, ConsoleError};
use crate::lifecycle::{Notice, Restaurant};
use crate::model::{Customer, CustomerId};
use std::io::{BufRead, Write};
use tracing::{debug, error};

const OPTIONS: [&str; 6] = [
    "Add Customer",
    "View Customers",
    "Delete Customer",
    "Search Customer by Name",
    "Update Customer",
    "Back",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomerAction {
    Add,
    View,
    Delete,
    Search,
    Update,
    Back,
}

impl CustomerAction {
    fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::View),
            3 => Some(Self::Delete),
            4 => Some(Self::Search),
            5 => Some(Self::Update),
            6 => Some(Self::Back),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn manage_customers(
        &mut self,
        restaurant: &mut Restaurant,
    ) -> Result<(), ConsoleError> {
        loop {
            let choice = self.choose("Customer Management", &OPTIONS)?;
            let Some(action) = CustomerAction::from_choice(choice) else {
                self.say("Invalid option!")?;
                continue;
            };
            debug!(?action, "Customer management");
            let roster = &mut restaurant.roster;
            match action {
                CustomerAction::Add => {
                    let id = self.ask_int("Enter ID: ")?;
                    let name = self.ask_text("Enter name: ")?;
                    roster.add(Customer::new(id, name));
                    self.say("Customer added.")?;
                }
                CustomerAction::View => {
                    if roster.is_empty() {
                        self.say("No customers found.")?;
                    }
                    for customer in roster.find_all() {
                        self.say(customer)?;
                    }
                }
                CustomerAction::Delete => {
                    let id = CustomerId(self.ask_int("Enter ID to delete: ")?);
                    if roster.remove_by_id(id) {
                        self.say("Deleted.")?;
                    } else {
                        self.say("Not found.")?;
                    }
                }
                CustomerAction::Search => {
                    let text = self.ask_text("Enter name to search: ")?;
                    let found = roster.find_by_name_substring(&text);
                    if found.is_empty() {
                        self.say("No matching customers.")?;
                    }
                    for customer in found {
                        self.say(customer)?;
                    }
                }
                CustomerAction::Update => {
                    let id = CustomerId(self.ask_int("Enter ID to update: ")?);
                    if !roster.contains(id) {
                        self.say("Customer not found.")?;
                        continue;
                    }
                    let name = self.ask_text("Enter new name: ")?;
                    roster.update_name_by_id(id, name);
                    self.say("Customer updated.")?;
                    // Single-shot: back to the main menu without the Back-path save.
                    return Ok(());
                }
                CustomerAction::Back => {
                    if let Err(e) = restaurant.save_customers() {
                        error!(error = %e, "Saving customers failed");
                        self.say(Notice::CustomersSaveFailed)?;
                    }
                    return Ok(());
                }
            }
        }
    }
}
