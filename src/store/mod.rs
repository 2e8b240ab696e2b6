//! In-memory stores: the inventory catalog and the customer line.
//!
//! Both stores are self-contained and safe to share across threads.
//! Name identity is case-insensitive everywhere: lookups, merges, and
//! searches all go through the canonical key in [`name_key`], while
//! display names keep the casing they were first recorded with.
//!
//! # Examples
//!
//! ```
//! use stockroom::store::{CustomerQueue, InventoryStore};
//!
//! # fn main() -> stockroom::Result<()> {
//! let inventory = InventoryStore::new();
//! inventory.add_or_increment("Kale", 12)?;
//! inventory.set_quantity("corn", 4)?;
//! assert_eq!(inventory.list().len(), 2);
//!
//! let line = CustomerQueue::new();
//! line.enqueue("Jane", "refund")?;
//! line.enqueue("Jo", "")?;
//! assert_eq!(line.dequeue().map(|c| c.name), Some("Jane".to_string()));
//! assert_eq!(line.len(), 1);
//! # Ok(())
//! # }
//! ```

mod inventory;
mod keys;
mod queue;
mod types;

pub use inventory::InventoryStore;
pub use keys::name_key;
pub use queue::CustomerQueue;
pub use types::{Customer, InventoryItem};
