//! Inventory catalog and customer queue core for small retail counters.
//!
//! One canonical implementation of the two collections a small shop
//! actually cares about: a keyed inventory with quantities and a
//! first-in-first-out line of customers being served. Both use
//! case-insensitive name semantics, both are safe to share across
//! threads, and both can be snapshotted to an embedded database and
//! restored on the next start.
//!
//! UI toolkits, HTTP routers, and authentication are collaborators that
//! sit on top of [`StoreService`]; this crate owns the invariants (key
//! normalization, merge arithmetic, FIFO ordering, round-trip
//! persistence) and nothing else.
//!
//! # Example
//!
//! ```
//! use stockroom::StoreService;
//!
//! # fn main() -> stockroom::Result<()> {
//! let service = StoreService::in_memory();
//!
//! // "apple", "Apple ", and "APPLE" all address the same item.
//! service.add_or_increment("apple", 5)?;
//! service.add_or_increment("Apple", 3)?;
//! assert_eq!(service.find_item("APPLE").map(|i| i.quantity), Some(8));
//!
//! // Customers are served strictly in arrival order.
//! service.enqueue("Jane", "refund")?;
//! service.enqueue("Jo", "")?;
//! assert_eq!(service.dequeue().map(|c| c.name), Some("Jane".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! Durable operation is a configuration choice, not a different API:
//!
//! ```
//! use stockroom::{StoreConfig, StoreService};
//!
//! # fn main() -> stockroom::Result<()> {
//! # let dir = tempfile::tempdir().unwrap();
//! let config = StoreConfig {
//!     persist: true,
//!     db_path: Some(dir.path().join("store.redb")),
//! };
//! let service = StoreService::new(config)?;
//! service.add_or_increment("corn", 10)?;
//! service.save()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod persistence;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use service::{StoreConfig, StoreService};
pub use store::{Customer, CustomerQueue, InventoryItem, InventoryStore};
