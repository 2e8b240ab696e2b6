//! Service facade composing the stores and their persistence.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::persistence::StoreDb;
use crate::store::{Customer, CustomerQueue, InventoryItem, InventoryStore};

/// Configuration for [`StoreService`].
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Enable persistence to disk.
    pub persist: bool,
    /// Path to the database file (required when `persist` is set).
    pub db_path: Option<PathBuf>,
}

/// Internal state for the service.
struct ServiceInner {
    inventory: InventoryStore,
    queue: CustomerQueue,
    db: Option<StoreDb>,
}

/// Facade over the inventory store and the customer queue.
///
/// Owns one instance of each store for the process lifetime, loads any
/// saved state before returning from the constructor, and writes full
/// snapshots on [`save`](Self::save). Every other method forwards to
/// the stores and adds no semantics of its own.
///
/// `StoreService` is `Clone`; clones share the same stores, so request
/// handlers can each hold a handle.
#[derive(Clone)]
pub struct StoreService {
    inner: Arc<ServiceInner>,
}

impl StoreService {
    /// Creates a service from configuration, loading saved state first.
    ///
    /// A missing database file or table is simply an empty store. When
    /// saved rows exist but cannot be read back, the affected store
    /// starts empty and a warning is emitted; the backing file is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `persist` is set without a
    /// `db_path`, and a storage error when the database file cannot be
    /// opened or created.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if !config.persist {
            return Ok(Self::in_memory());
        }
        let path = config
            .db_path
            .as_ref()
            .ok_or_else(|| Error::Config("db_path required when persist is enabled".to_string()))?;
        let db = StoreDb::open(path)?;

        let items = db.load_inventory().unwrap_or_else(|e| {
            warn!(error = %e, "could not read saved inventory, starting empty");
            Vec::new()
        });
        let customers = db.load_customers().unwrap_or_else(|e| {
            warn!(error = %e, "could not read saved customer queue, starting empty");
            Vec::new()
        });
        info!(
            items = items.len(),
            customers = customers.len(),
            "loaded saved state"
        );

        Ok(Self {
            inner: Arc::new(ServiceInner {
                inventory: InventoryStore::from_items(items),
                queue: CustomerQueue::from_customers(customers),
                db: Some(db),
            }),
        })
    }

    /// Creates a service that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                inventory: InventoryStore::new(),
                queue: CustomerQueue::new(),
                db: None,
            }),
        }
    }

    // ---- inventory ----

    /// All items, sorted by display name, case-insensitive ascending.
    pub fn list_items(&self) -> Vec<InventoryItem> {
        self.inner.inventory.list()
    }

    /// Case-insensitive substring search over item names; a blank query
    /// matches nothing.
    pub fn search_items(&self, query: &str) -> Vec<InventoryItem> {
        self.inner.inventory.search(query)
    }

    /// Case-insensitive exact lookup.
    pub fn find_item(&self, name: &str) -> Option<InventoryItem> {
        self.inner.inventory.find(name)
    }

    /// Adds stock, creating the item when absent. Returns the resulting
    /// quantity.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::add_or_increment`].
    pub fn add_or_increment(&self, name: &str, amount: i64) -> Result<i64> {
        self.inner.inventory.add_or_increment(name, amount)
    }

    /// Overwrites an item's quantity, creating it when absent.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::set_quantity`].
    pub fn set_quantity(&self, name: &str, quantity: i64) -> Result<()> {
        self.inner.inventory.set_quantity(name, quantity)
    }

    /// Removes stock from an item; `None` when the item is absent.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::take_stock`].
    pub fn take_stock(&self, name: &str, amount: i64) -> Result<Option<i64>> {
        self.inner.inventory.take_stock(name, amount)
    }

    /// Renames an item; `false` when no item matches.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::rename`].
    pub fn rename_item(&self, name: &str, new_name: &str) -> Result<bool> {
        self.inner.inventory.rename(name, new_name)
    }

    /// Removes an item by name; a miss is `false`, never an error.
    pub fn remove_item(&self, name: &str) -> bool {
        self.inner.inventory.remove(name)
    }

    // ---- customer queue ----

    /// Full queue contents, head to tail.
    pub fn queue_snapshot(&self) -> Vec<Customer> {
        self.inner.queue.snapshot()
    }

    /// Case-insensitive substring search over waiting customers; a
    /// blank query matches nothing.
    pub fn search_queue(&self, query: &str) -> Vec<Customer> {
        self.inner.queue.search(query)
    }

    /// Appends a customer to the line.
    ///
    /// # Errors
    ///
    /// See [`CustomerQueue::enqueue`].
    pub fn enqueue(&self, name: &str, note: &str) -> Result<()> {
        self.inner.queue.enqueue(name, note)
    }

    /// Serves the next customer, or `None` when nobody is waiting.
    pub fn dequeue(&self) -> Option<Customer> {
        self.inner.queue.dequeue()
    }

    /// The next customer to be served, without removing them.
    pub fn peek(&self) -> Option<Customer> {
        self.inner.queue.peek()
    }

    /// Empties the line, returning how many customers were dropped.
    pub fn clear_queue(&self) -> usize {
        let dropped = self.inner.queue.clear();
        if dropped > 0 {
            debug!(dropped, "cleared customer queue");
        }
        dropped
    }

    /// Number of customers waiting.
    pub fn queue_len(&self) -> usize {
        self.inner.queue.len()
    }

    // ---- lifecycle ----

    /// Writes both stores to the backing database.
    ///
    /// A service without persistence saves nothing and returns `Ok`.
    /// In-memory state is unaffected by a failed save; the caller
    /// decides whether to retry or surface the failure.
    ///
    /// # Errors
    ///
    /// Returns a storage error when either snapshot cannot be written.
    pub fn save(&self) -> Result<()> {
        let Some(db) = &self.inner.db else {
            return Ok(());
        };
        let items = self.inner.inventory.list();
        let customers = self.inner.queue.snapshot();
        db.save_inventory(&items)?;
        db.save_customers(&customers)?;
        debug!(
            items = items.len(),
            customers = customers.len(),
            "saved state"
        );
        Ok(())
    }
}
