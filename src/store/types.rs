//! Record types shared by the stores and the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stocked item: display name plus on-hand quantity.
///
/// Identity is the canonical key of `name` (see
/// [`name_key`](super::name_key)); the display name keeps the casing it
/// was first created with. Quantities never go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: i64,
}

/// A customer waiting in line.
///
/// Customers carry no identity beyond their position in the queue;
/// duplicate names are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    /// Free-form note taken at the counter, empty when none was given.
    #[serde(default)]
    pub note: String,
    /// When the customer joined the line.
    pub enqueued_at: DateTime<Utc>,
}
