//! # Interactive Console
//!
//! The numbered-menu loop that drives a [`Restaurant`].
//!
//! ## Structure
//!
//! - [`input`] - line reading and the parse-and-retry prompts
//! - `menu` - Manage Menu submenu (catalog)
//! - `customers` - Manage Customers submenu (roster)
//! - `orders` - Create Order and View/Manage Orders
//! - [`error`] - [`ConsoleError`] and [`InputError`]
//!
//! The console is generic over its input and output, so the same loop runs on
//! stdin/stdout and on in-memory buffers in tests:
//!
//! ```rust
//! use restaurant_console::console::Console;
//! use restaurant_console::lifecycle::Restaurant;
//! use restaurant_console::store::FlatFileStore;
//! use restaurant_console::config::StoreConfig;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut restaurant = Restaurant::new(FlatFileStore::new(StoreConfig::in_dir(dir.path())));
//! let mut console = Console::new(&b"1\n1\n5\nTea\n10\n7\n5\n"[..], Vec::new());
//! console.run(&mut restaurant).unwrap();
//! assert_eq!(restaurant.catalog.len(), 1);
//! ```
//!
//! ## Flow
//!
//! Bad numeric input is re-prompted, lookup misses are reported and leave the
//! state alone. Customer and order updates are single-shot: once an update has
//! been attempted on an existing record, control returns to the main menu.
//! End of input behaves like choosing Exit.

mod customers;
pub mod error;
pub mod input;
mod menu;
mod orders;

pub use error::*;
pub use input::{parse_int, parse_price};

use crate::lifecycle::{Notice, Restaurant};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MAIN_OPTIONS: [&str; 5] = [
    "Manage Menu",
    "Manage Customers",
    "Create Order",
    "View/Manage Orders",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    ManageMenu,
    ManageCustomers,
    CreateOrder,
    ManageOrders,
    Exit,
}

impl MainAction {
    fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::ManageMenu),
            2 => Some(Self::ManageCustomers),
            3 => Some(Self::CreateOrder),
            4 => Some(Self::ManageOrders),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Text-menu front end over any line-based input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints startup or shutdown diagnostics, one per line.
    pub fn report(&mut self, notices: &[Notice]) -> Result<(), ConsoleError> {
        for notice in notices {
            self.say(notice)?;
        }
        Ok(())
    }

    /// Runs the main menu until Exit or end of input, then saves the data files.
    pub fn run(&mut self, restaurant: &mut Restaurant) -> Result<(), ConsoleError> {
        match self.main_menu(restaurant) {
            Err(ConsoleError::EndOfInput) => {
                info!("Input closed, exiting");
                self.exit(restaurant)
            }
            other => other,
        }
    }

    fn main_menu(&mut self, restaurant: &mut Restaurant) -> Result<(), ConsoleError> {
        loop {
            let choice = self.choose("Restaurant Management System", &MAIN_OPTIONS)?;
            let Some(action) = MainAction::from_choice(choice) else {
                self.say("Invalid choice!")?;
                continue;
            };
            debug!(?action, "Main menu");
            match action {
                MainAction::ManageMenu => self.manage_menu(restaurant)?,
                MainAction::ManageCustomers => self.manage_customers(restaurant)?,
                MainAction::CreateOrder => self.create_order(restaurant)?,
                MainAction::ManageOrders => self.manage_orders(restaurant)?,
                MainAction::Exit => return self.exit(restaurant),
            }
        }
    }

    fn exit(&mut self, restaurant: &Restaurant) -> Result<(), ConsoleError> {
        let notices = restaurant.shutdown();
        self.report(&notices)?;
        self.say("Exiting...")
    }

    /// Prints a titled, numbered menu and reads the choice.
    fn choose(&mut self, title: &str, options: &[&str]) -> Result<i32, ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, " {title}")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, option)?;
        }
        self.prompt("Enter choice: ")?;
        self.read_int()
    }

    fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}
