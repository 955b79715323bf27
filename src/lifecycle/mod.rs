//! # Application Lifecycle
//!
//! Startup and shutdown of the restaurant state, plus logging setup.
//!
//! ## The Restaurant Pattern
//!
//! All mutable state lives in one [`Restaurant`] value owned by the console
//! loop; nothing is global.
//!
//! ```rust,ignore
//! let (mut restaurant, notices) = Restaurant::open(FlatFileStore::default());
//! // ... drive the console ...
//! for notice in restaurant.shutdown() {
//!     println!("{notice}");
//! }
//! ```
//!
//! 1. **Open** - load `menu.txt` and `customers.txt`; anything unreadable
//!    degrades to an empty structure and is reported as a [`Notice`].
//! 2. **Run** - the console mutates the catalog, roster and order book.
//! 3. **Shutdown** - write both files back. Orders are not persisted.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `tracing` subscriber. Logs go to stderr so
//! they never mix with the menus on stdout:
//!
//! ```bash
//! RUST_LOG=info cargo run      # load/save summaries
//! RUST_LOG=debug cargo run     # every catalog, roster and console action
//! ```

pub mod restaurant;
pub mod tracing;

pub use restaurant::{Notice, Restaurant};
pub use self::tracing::setup_tracing;
