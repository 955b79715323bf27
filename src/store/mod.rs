//! # Flat-File Store
//!
//! Loads and saves the [`MenuCatalog`] and [`CustomerRoster`] as delimited text
//! (see [`codec`] for the line format).
//!
//! Loading is forgiving:
//! - a missing file is "no prior data" and yields an empty structure;
//! - a line that does not decode is skipped and reported in
//!   [`Loaded::skipped`], and the rest of the file is still read;
//! - a line that is not valid UTF-8 is skipped the same way;
//! - blank lines are ignored.
//!
//! Each call opens its file, and the handle is closed when the call returns,
//! on every path.

pub mod codec;
pub mod error;

pub use error::*;

use crate::catalog::MenuCatalog;
use crate::config::StoreConfig;
use crate::roster::CustomerRoster;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// A line that was dropped while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// 1-based line number in the file.
    pub line: usize,
    pub error: RecordError,
}

/// Result of a load: the data plus what had to be left out.
#[derive(Debug)]
pub struct Loaded<T> {
    pub data: T,
    pub skipped: Vec<SkippedRecord>,
    /// `false` when the file did not exist and `data` is empty.
    pub file_found: bool,
}

/// Reads and writes `menu.txt` and `customers.txt`.
#[derive(Debug, Clone, Default)]
pub struct FlatFileStore {
    config: StoreConfig,
}

impl FlatFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Rebuilds a catalog by inserting the items in file order.
    ///
    /// When an id repeats, the first line wins.
    pub fn load_menu(&self) -> Result<Loaded<MenuCatalog>, StoreError> {
        load_records(&self.config.menu_path, codec::decode_menu_item)
    }

    /// Writes the catalog in ascending id order, truncating the file.
    pub fn save_menu(&self, catalog: &MenuCatalog) -> Result<(), StoreError> {
        save_records(
            &self.config.menu_path,
            catalog.iter().map(codec::encode_menu_item),
        )
    }

    pub fn load_customers(&self) -> Result<Loaded<CustomerRoster>, StoreError> {
        load_records(&self.config.customers_path, codec::decode_customer)
    }

    /// Writes the roster in roster order, truncating the file.
    pub fn save_customers(&self, roster: &CustomerRoster) -> Result<(), StoreError> {
        save_records(
            &self.config.customers_path,
            roster.find_all().iter().map(codec::encode_customer),
        )
    }
}

fn load_records<T, C>(
    path: &Path,
    decode: impl Fn(&str) -> Result<T, RecordError>,
) -> Result<Loaded<C>, StoreError>
where
    C: Default + Extend<T>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Data file not found, starting empty");
            return Ok(Loaded {
                data: C::default(),
                skipped: Vec::new(),
                file_found: false,
            });
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let mut reader = BufReader::new(file);
    let mut data = C::default();
    let mut skipped = Vec::new();
    let mut loaded = 0usize;
    let mut buf = Vec::new();
    let mut number = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| StoreError::io(path, e))?;
        if read == 0 {
            break;
        }
        number += 1;

        let record = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim_end_matches(&['\n', '\r'][..]);
                if line.trim().is_empty() {
                    continue;
                }
                decode(line)
            }
            Err(_) => Err(RecordError::Encoding),
        };
        match record {
            Ok(record) => {
                data.extend(Some(record));
                loaded += 1;
            }
            Err(error) => {
                warn!(path = %path.display(), line = number, %error, "Skipping invalid record");
                skipped.push(SkippedRecord {
                    line: number,
                    error,
                });
            }
        }
    }

    info!(path = %path.display(), loaded, skipped = skipped.len(), "Loaded");
    Ok(Loaded {
        data,
        skipped,
        file_found: true,
    })
}

fn save_records(path: &Path, lines: impl Iterator<Item = String>) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0usize;
    for line in lines {
        writeln!(writer, "{line}").map_err(|e| StoreError::io(path, e))?;
        written += 1;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;
    info!(path = %path.display(), written, "Saved");
    Ok(())
}
