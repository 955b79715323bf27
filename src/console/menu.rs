use super::{Console, ConsoleError};
use crate::lifecycle::{Notice, Restaurant};
use crate::model::{MenuItem, MenuItemId};
use std::io::{BufRead, Write};
use tracing::{debug, error};

const OPTIONS: [&str; 7] = [
    "Add Item",
    "View Menu",
    "Search Item by ID",
    "Sort Menu by Price",
    "Update Item",
    "Delete Item",
    "Back",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    View,
    Search,
    SortByPrice,
    Update,
    Delete,
    Back,
}

impl MenuAction {
    fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::View),
            3 => Some(Self::Search),
            4 => Some(Self::SortByPrice),
            5 => Some(Self::Update),
            6 => Some(Self::Delete),
            7 => Some(Self::Back),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn manage_menu(&mut self, restaurant: &mut Restaurant) -> Result<(), ConsoleError> {
        loop {
            let choice = self.choose("Menu Management", &OPTIONS)?;
            let Some(action) = MenuAction::from_choice(choice) else {
                self.say("Invalid option!")?;
                continue;
            };
            debug!(?action, "Menu management");
            let catalog = &mut restaurant.catalog;
            match action {
                MenuAction::Add => {
                    let id = self.ask_int("Enter item ID: ")?;
                    let name = self.ask_text("Enter name: ")?;
                    let price = self.ask_price("Enter price: ")?;
                    if catalog.insert(MenuItem::new(id, name, price)) {
                        self.say("Item added.")?;
                    } else {
                        self.say("Item ID already exists.")?;
                    }
                }
                MenuAction::View => self.show_items(catalog.list_in_order())?,
                MenuAction::Search => {
                    let id = MenuItemId(self.ask_int("Enter ID to search: ")?);
                    match catalog.search(id) {
                        Some(item) => self.say(item)?,
                        None => self.say("Item not found.")?,
                    }
                }
                MenuAction::SortByPrice => self.show_items(catalog.list_by_price())?,
                MenuAction::Update => {
                    let id = MenuItemId(self.ask_int("Enter ID to update: ")?);
                    if !catalog.contains(id) {
                        self.say("Item not found.")?;
                        continue;
                    }
                    let name = self.ask_text("Enter new name: ")?;
                    let price = self.ask_price("Enter new price: ")?;
                    catalog.delete(id);
                    catalog.insert(MenuItem::new(id, name, price));
                    self.say("Item updated.")?;
                }
                MenuAction::Delete => {
                    let id = MenuItemId(self.ask_int("Enter ID to delete: ")?);
                    match catalog.delete(id) {
                        Some(_) => self.say("Item deleted.")?,
                        None => self.say("Item not found.")?,
                    }
                }
                MenuAction::Back => {
                    if let Err(e) = restaurant.save_menu() {
                        error!(error = %e, "Saving menu failed");
                        self.say(Notice::MenuSaveFailed)?;
                    }
                    return Ok(());
                }
            }
        }
    }

    fn show_items(&mut self, items: Vec<&MenuItem>) -> Result<(), ConsoleError> {
        if items.is_empty() {
            return self.say("Menu is empty!");
        }
        for item in items {
            self.say(item)?;
        }
        Ok(())
    }
}
