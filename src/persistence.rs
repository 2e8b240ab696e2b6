//! Durable snapshots of the stores.
//!
//! Backed by an embedded redb database with one table per store:
//! inventory rows keyed by canonical name key, queue rows keyed by
//! position index. Row values are JSON-encoded records, so each row
//! decodes independently and a single corrupt row cannot poison a load.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use tracing::warn;

use crate::error::{Error, Result};
use crate::store::{Customer, InventoryItem, name_key};

/// Inventory rows: canonical name key -> JSON [`InventoryItem`].
const INVENTORY_TABLE: TableDefinition<'static, &'static str, &'static [u8]> =
    TableDefinition::new("inventory");

/// Queue rows: position index -> JSON [`Customer`]. Key order is queue
/// order, head first.
const QUEUE_TABLE: TableDefinition<'static, u64, &'static [u8]> =
    TableDefinition::new("customer_queue");

/// Handle to the durable backing store.
///
/// Saves replace the previous snapshot wholesale; loads tolerate a
/// missing table (empty store) and skip unreadable rows with a warning.
///
/// `StoreDb` is `Clone` and can be shared across threads; the
/// underlying database serializes access.
#[derive(Clone)]
pub struct StoreDb {
    db: Arc<Database>,
}

impl StoreDb {
    /// Opens or creates the database at `path`.
    ///
    /// Creates parent directories when needed and initializes both
    /// tables so a fresh database loads as two empty stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database file cannot be
    /// created, or the initialization transaction fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("creating {}", parent.display()), e))?;
        }

        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(INVENTORY_TABLE)?;
            let _ = write_txn.open_table(QUEUE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Writes the full inventory snapshot, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be written or
    /// committed; previously saved rows stay intact in that case.
    pub fn save_inventory(&self, items: &[InventoryItem]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.delete_table(INVENTORY_TABLE)?;
            let mut table = write_txn.open_table(INVENTORY_TABLE)?;
            for item in items {
                let row = serde_json::to_vec(item)?;
                table.insert(name_key(&item.name).as_str(), row.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Writes the full queue snapshot, head first, replacing previous
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be written or
    /// committed; previously saved rows stay intact in that case.
    pub fn save_customers(&self, customers: &[Customer]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.delete_table(QUEUE_TABLE)?;
            let mut table = write_txn.open_table(QUEUE_TABLE)?;
            for (position, customer) in customers.iter().enumerate() {
                let row = serde_json::to_vec(customer)?;
                table.insert(position as u64, row.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Loads the saved inventory.
    ///
    /// A missing table is an empty inventory. Rows that fail to decode
    /// are skipped with a warning so the rest of the snapshot survives.
    ///
    /// # Errors
    ///
    /// Returns an error when the database itself cannot be read.
    pub fn load_inventory(&self) -> Result<Vec<InventoryItem>> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(INVENTORY_TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut items = Vec::new();
        for row in table.iter()? {
            let (key, value) = row?;
            match serde_json::from_slice::<InventoryItem>(value.value()) {
                Ok(item) => items.push(item),
                Err(e) => warn!(
                    key = key.value(),
                    error = %e,
                    "skipping unreadable inventory row"
                ),
            }
        }
        Ok(items)
    }

    /// Loads the saved customer queue, head first.
    ///
    /// A missing table is an empty queue. Rows that fail to decode are
    /// skipped with a warning; the remaining customers keep their
    /// relative order.
    ///
    /// # Errors
    ///
    /// Returns an error when the database itself cannot be read.
    pub fn load_customers(&self) -> Result<Vec<Customer>> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(QUEUE_TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut customers = Vec::new();
        for row in table.iter()? {
            let (position, value) = row?;
            match serde_json::from_slice::<Customer>(value.value()) {
                Ok(customer) => customers.push(customer),
                Err(e) => warn!(
                    position = position.value(),
                    error = %e,
                    "skipping unreadable customer row"
                ),
            }
        }
        Ok(customers)
    }
}
