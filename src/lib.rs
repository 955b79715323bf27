//! # Restaurant Console
//!
//! > **A text-menu restaurant manager: menu catalog, customers and orders.**
//!
//! One process, one thread, one loop. The operator picks numbered actions; the
//! menu and customer list survive restarts in two comma-separated text files,
//! while orders live only as long as the process.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`catalog`])
//! The [`MenuCatalog`](catalog::MenuCatalog) is an unbalanced binary search
//! tree keyed by item id, with insert, search, delete, in-order and
//! price-sorted listings.
//!
//! ### 2. The Records ([`model`], [`roster`], [`orders`])
//! - [`MenuItem`](model::MenuItem), [`Customer`](model::Customer) and
//!   [`Order`](model::Order) with type-safe ids.
//! - [`CustomerRoster`](roster::CustomerRoster): insertion-ordered customers.
//! - [`OrderBook`](orders::OrderBook): placed orders with never-reused ids.
//!
//! ### 3. Persistence ([`store`], [`config`])
//! [`FlatFileStore`](store::FlatFileStore) reads and writes `menu.txt` and
//! `customers.txt`, skipping lines it cannot decode.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Restaurant`](lifecycle::Restaurant) owns all state: opened (hydrated)
//! at startup, saved at shutdown. Also home of [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. The Front End ([`console`])
//! [`Console`](console::Console) runs the numbered menus over any
//! `BufRead`/`Write` pair.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Error Handling
//! Each layer has its own `thiserror` enum ([`OrderError`](orders::OrderError),
//! [`StoreError`](store::StoreError), [`ConsoleError`](console::ConsoleError)).
//! Only console I/O failures end the program; everything else becomes a
//! message and the loop carries on.
//!
//! ### Observability
//! `tracing` events throughout, filtered with `RUST_LOG` and written to stderr.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run                    # menu.txt / customers.txt in the current dir
//! RUST_LOG=debug cargo run     # with logs on stderr
//! cargo test
//! ```

pub mod catalog;
pub mod config;
pub mod console;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod roster;
pub mod store;
