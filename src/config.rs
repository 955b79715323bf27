//! Locations of the two data files.

use std::path::{Path, PathBuf};

pub const MENU_FILE: &str = "menu.txt";
pub const CUSTOMERS_FILE: &str = "customers.txt";

/// Where the [`FlatFileStore`](crate::store::FlatFileStore) reads and writes.
///
/// The default places `menu.txt` and `customers.txt` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub menu_path: PathBuf,
    pub customers_path: PathBuf,
}

impl StoreConfig {
    /// Both files inside `dir`, under their usual names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            menu_path: dir.join(MENU_FILE),
            customers_path: dir.join(CUSTOMERS_FILE),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            menu_path: PathBuf::from(MENU_FILE),
            customers_path: PathBuf::from(CUSTOMERS_FILE),
        }
    }
}
