use crate::catalog::MenuCatalog;
use crate::orders::OrderBook;
use crate::roster::CustomerRoster;
use crate::store::{FlatFileStore, Loaded, StoreError};
use thiserror::Error;
use tracing::{error, info};

/// User-facing diagnostics raised while loading or saving data.
///
/// None of these stop the program: a failed load leaves an empty structure
/// and a failed save leaves the in-memory state as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Notice {
    #[error("No menu data found.")]
    MenuMissing,

    #[error("Could not read menu data.")]
    MenuUnreadable,

    #[error("Skipping invalid menu entry (line {line}).")]
    MenuRecordSkipped { line: usize },

    #[error("No customer data found.")]
    CustomersMissing,

    #[error("Could not read customer data.")]
    CustomersUnreadable,

    #[error("Skipping invalid customer entry (line {line}).")]
    CustomerRecordSkipped { line: usize },

    #[error("Error saving menu.")]
    MenuSaveFailed,

    #[error("Error saving customers.")]
    CustomersSaveFailed,
}

/// The whole mutable state of the console: catalog, roster and order book,
/// plus the store they are persisted to.
///
/// # Example
///
/// ```ignore
/// let (mut restaurant, notices) = Restaurant::open(FlatFileStore::default());
/// restaurant.catalog.insert(MenuItem::new(1, "Tea", 10.0));
/// restaurant.shutdown();
/// ```
#[derive(Debug)]
pub struct Restaurant {
    pub catalog: MenuCatalog,
    pub roster: CustomerRoster,
    /// Lives only as long as the process.
    pub orders: OrderBook,
    store: FlatFileStore,
}

impl Restaurant {
    /// Empty state bound to `store`; nothing is read.
    pub fn new(store: FlatFileStore) -> Self {
        Self {
            catalog: MenuCatalog::new(),
            roster: CustomerRoster::new(),
            orders: OrderBook::new(),
            store,
        }
    }

    /// Creates the state and hydrates it from the data files.
    ///
    /// Returns the notices to show the user, in the order they arose (menu
    /// first, then customers).
    pub fn open(store: FlatFileStore) -> (Self, Vec<Notice>) {
        let mut restaurant = Self::new(store);
        let mut notices = Vec::new();

        let menu = restaurant.store.load_menu();
        if let Some(catalog) = absorb(
            menu,
            &mut notices,
            Notice::MenuMissing,
            Notice::MenuUnreadable,
            |line| Notice::MenuRecordSkipped { line },
        ) {
            restaurant.catalog = catalog;
        }

        let customers = restaurant.store.load_customers();
        if let Some(roster) = absorb(
            customers,
            &mut notices,
            Notice::CustomersMissing,
            Notice::CustomersUnreadable,
            |line| Notice::CustomerRecordSkipped { line },
        ) {
            restaurant.roster = roster;
        }

        info!(
            items = restaurant.catalog.len(),
            customers = restaurant.roster.len(),
            "Restaurant opened"
        );
        (restaurant, notices)
    }

    pub fn store(&self) -> &FlatFileStore {
        &self.store
    }

    pub fn save_menu(&self) -> Result<(), StoreError> {
        self.store.save_menu(&self.catalog)
    }

    pub fn save_customers(&self) -> Result<(), StoreError> {
        self.store.save_customers(&self.roster)
    }

    /// Writes the menu and customer files, returning a notice for each failure.
    pub fn shutdown(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if let Err(e) = self.save_menu() {
            error!(error = %e, "Saving menu failed");
            notices.push(Notice::MenuSaveFailed);
        }
        if let Err(e) = self.save_customers() {
            error!(error = %e, "Saving customers failed");
            notices.push(Notice::CustomersSaveFailed);
        }
        info!("Restaurant closed");
        notices
    }
}

fn absorb<T>(
    result: Result<Loaded<T>, StoreError>,
    notices: &mut Vec<Notice>,
    missing: Notice,
    unreadable: Notice,
    skipped: impl Fn(usize) -> Notice,
) -> Option<T> {
    match result {
        Ok(loaded) => {
            if !loaded.file_found {
                notices.push(missing);
            }
            notices.extend(loaded.skipped.iter().map(|record| skipped(record.line)));
            Some(loaded.data)
        }
        Err(e) => {
            error!(error = %e, "Load failed, starting empty");
            notices.push(unreadable);
            None
        }
    }
}
