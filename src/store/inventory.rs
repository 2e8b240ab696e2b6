//! Case-insensitive keyed inventory store.

use dashmap::DashMap;

use super::keys::{name_key, non_blank};
use super::types::InventoryItem;
use crate::error::{Error, Result};

/// Keyed inventory with case-insensitive name identity.
///
/// `"Apple"`, `"apple "`, and `"APPLE"` all address one item; the
/// display name keeps the casing recorded when the item was created.
/// Zero-quantity entries are valid state and stay until explicitly
/// removed.
///
/// # Thread safety
///
/// Backed by a sharded map: read-modify-write operations lock only the
/// entry they touch, so concurrent increments on the same name never
/// lose an update while unrelated names do not contend.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: DashMap<String, InventoryItem>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously saved items.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = InventoryItem>,
    {
        let store = Self::new();
        for item in items {
            store.items.insert(name_key(&item.name), item);
        }
        store
    }

    /// Adds `amount` units to the named item, creating it when absent.
    ///
    /// The first add records the given casing (trimmed) as the display
    /// name; later adds only change the quantity. Returns the resulting
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlankField`] when the trimmed name is empty and
    /// [`Error::NonPositiveAmount`] when `amount` is below one.
    pub fn add_or_increment(&self, name: &str, amount: i64) -> Result<i64> {
        let display = non_blank(name, "name")?.to_string();
        if amount < 1 {
            return Err(Error::NonPositiveAmount { amount });
        }

        let mut entry = self
            .items
            .entry(name_key(name))
            .or_insert_with(|| InventoryItem {
                name: display,
                quantity: 0,
            });
        entry.quantity += amount;
        Ok(entry.quantity)
    }

    /// Overwrites the named item's quantity, creating it when absent.
    ///
    /// An existing item keeps its display name; a new one records the
    /// given casing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlankField`] when the trimmed name is empty and
    /// [`Error::NegativeQuantity`] when `quantity` is below zero.
    pub fn set_quantity(&self, name: &str, quantity: i64) -> Result<()> {
        let display = non_blank(name, "name")?.to_string();
        if quantity < 0 {
            return Err(Error::NegativeQuantity { quantity });
        }

        let mut entry = self
            .items
            .entry(name_key(name))
            .or_insert_with(|| InventoryItem {
                name: display,
                quantity: 0,
            });
        entry.quantity = quantity;
        Ok(())
    }

    /// Removes `amount` units from the named item.
    ///
    /// Returns the remaining quantity, or `None` when no such item
    /// exists. Taking stock down to zero leaves the entry in place;
    /// deleting it is a separate, explicit [`remove`](Self::remove).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveAmount`] when `amount` is below one
    /// and [`Error::InsufficientStock`] when `amount` exceeds what is
    /// on hand; the quantity is unchanged on error.
    pub fn take_stock(&self, name: &str, amount: i64) -> Result<Option<i64>> {
        non_blank(name, "name")?;
        if amount < 1 {
            return Err(Error::NonPositiveAmount { amount });
        }

        let Some(mut entry) = self.items.get_mut(&name_key(name)) else {
            return Ok(None);
        };
        if amount > entry.quantity {
            return Err(Error::InsufficientStock {
                name: entry.name.clone(),
                available: entry.quantity,
                requested: amount,
            });
        }
        entry.quantity -= amount;
        Ok(Some(entry.quantity))
    }

    /// Renames an item, keeping its quantity.
    ///
    /// Returns `false` when no item matches `name`. Renaming to a
    /// casing variant of the same name re-records the display name in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlankField`] when the trimmed new name is empty
    /// and [`Error::DuplicateName`] when another item already owns the
    /// new name.
    pub fn rename(&self, name: &str, new_name: &str) -> Result<bool> {
        let display = non_blank(new_name, "new name")?.to_string();
        let old_key = name_key(name);
        let new_key = name_key(new_name);

        if old_key == new_key {
            let Some(mut entry) = self.items.get_mut(&old_key) else {
                return Ok(false);
            };
            entry.name = display;
            return Ok(true);
        }

        if self.items.contains_key(&new_key) {
            return Err(Error::DuplicateName { name: display });
        }
        let Some((_, item)) = self.items.remove(&old_key) else {
            return Ok(false);
        };
        self.items.insert(
            new_key,
            InventoryItem {
                name: display,
                quantity: item.quantity,
            },
        );
        Ok(true)
    }

    /// Removes an item by name. A miss is `false`, never an error.
    pub fn remove(&self, name: &str) -> bool {
        self.items.remove(&name_key(name)).is_some()
    }

    /// Case-insensitive exact lookup.
    pub fn find(&self, name: &str) -> Option<InventoryItem> {
        self.items.get(&name_key(name)).map(|e| e.value().clone())
    }

    /// All items, sorted by display name, case-insensitive ascending.
    pub fn list(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> =
            self.items.iter().map(|e| e.value().clone()).collect();
        sort_by_name(&mut items);
        items
    }

    /// Case-insensitive substring search over display names.
    ///
    /// A blank query matches nothing; listing everything is
    /// [`list`](Self::list). Results are sorted like `list`.
    pub fn search(&self, query: &str) -> Vec<InventoryItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut items: Vec<InventoryItem> = self
            .items
            .iter()
            .filter(|e| e.value().name.to_lowercase().contains(&needle))
            .map(|e| e.value().clone())
            .collect();
        sort_by_name(&mut items);
        items
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items are stocked.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn sort_by_name(items: &mut [InventoryItem]) {
    items.sort_by_key(|item| item.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casings_merge_into_one_entry() {
        let store = InventoryStore::new();
        store.add_or_increment("apple", 5).unwrap();
        store.add_or_increment("Apple", 3).unwrap();

        let item = store.find("APPLE").unwrap();
        assert_eq!(item.quantity, 8);
        assert_eq!(item.name, "apple");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn whitespace_padding_merges_too() {
        let store = InventoryStore::new();
        store.add_or_increment("  kale", 2).unwrap();
        store.add_or_increment("kale  ", 4).unwrap();

        assert_eq!(store.find("kale").unwrap().quantity, 6);
        assert_eq!(store.find("kale").unwrap().name, "kale");
    }

    #[test]
    fn add_rejects_blank_name_and_bad_amounts() {
        let store = InventoryStore::new();
        assert!(store.add_or_increment("  ", 1).is_err());
        assert!(store.add_or_increment("corn", 0).is_err());
        assert!(store.add_or_increment("corn", -4).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn set_quantity_creates_then_overwrites() {
        let store = InventoryStore::new();
        store.set_quantity("Corn", 10).unwrap();
        store.set_quantity("corn", 2).unwrap();

        let item = store.find("CORN").unwrap();
        assert_eq!(item.quantity, 2);
        // Display casing stays as first recorded.
        assert_eq!(item.name, "Corn");
    }

    #[test]
    fn set_quantity_rejects_negative_and_leaves_state() {
        let store = InventoryStore::new();
        store.set_quantity("corn", 10).unwrap();

        assert!(store.set_quantity("corn", -1).is_err());
        assert_eq!(store.find("corn").unwrap().quantity, 10);
    }

    #[test]
    fn zero_quantity_entry_stays_until_removed() {
        let store = InventoryStore::new();
        store.set_quantity("corn", 10).unwrap();
        store.set_quantity("Corn", 0).unwrap();

        assert_eq!(store.find("corn").unwrap().quantity, 0);
        assert!(store.remove("corn"));
        assert!(store.find("corn").is_none());
    }

    #[test]
    fn remove_miss_is_false_not_error() {
        let store = InventoryStore::new();
        assert!(!store.remove("kale"));
    }

    #[test]
    fn list_sorts_case_insensitively() {
        let store = InventoryStore::new();
        store.add_or_increment("banana", 1).unwrap();
        store.add_or_increment("Apple", 1).unwrap();
        store.add_or_increment("cherry", 1).unwrap();

        let names: Vec<String> = store.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn search_is_substring_and_case_insensitive() {
        let store = InventoryStore::new();
        store.add_or_increment("Sweet Corn", 1).unwrap();
        store.add_or_increment("corn", 1).unwrap();
        store.add_or_increment("kale", 1).unwrap();

        let names: Vec<String> = store.search("CORN").into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["corn", "Sweet Corn"]);
    }

    #[test]
    fn blank_search_matches_nothing() {
        let store = InventoryStore::new();
        store.add_or_increment("kale", 1).unwrap();
        assert!(store.search("").is_empty());
        assert!(store.search("   ").is_empty());
    }

    #[test]
    fn take_stock_decrements_and_reports_remaining() {
        let store = InventoryStore::new();
        store.add_or_increment("kale", 10).unwrap();

        assert_eq!(store.take_stock("KALE", 4).unwrap(), Some(6));
        assert_eq!(store.take_stock("kale", 6).unwrap(), Some(0));
        // Down to zero leaves the entry in place.
        assert_eq!(store.find("kale").unwrap().quantity, 0);
    }

    #[test]
    fn take_stock_on_absent_item_is_none() {
        let store = InventoryStore::new();
        assert_eq!(store.take_stock("kale", 1).unwrap(), None);
    }

    #[test]
    fn take_stock_overdraft_fails_without_changes() {
        let store = InventoryStore::new();
        store.add_or_increment("kale", 3).unwrap();

        let err = store.take_stock("kale", 5).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(store.find("kale").unwrap().quantity, 3);
    }

    #[test]
    fn rename_moves_quantity_to_new_name() {
        let store = InventoryStore::new();
        store.add_or_increment("corn", 7).unwrap();

        assert!(store.rename("corn", "Sweet Corn").unwrap());
        assert!(store.find("corn").is_none());
        let item = store.find("sweet corn").unwrap();
        assert_eq!(item.name, "Sweet Corn");
        assert_eq!(item.quantity, 7);
    }

    #[test]
    fn rename_miss_is_false() {
        let store = InventoryStore::new();
        assert!(!store.rename("corn", "maize").unwrap());
    }

    #[test]
    fn rename_onto_existing_item_is_rejected() {
        let store = InventoryStore::new();
        store.add_or_increment("corn", 1).unwrap();
        store.add_or_increment("kale", 1).unwrap();

        assert!(store.rename("corn", "KALE").is_err());
        assert_eq!(store.find("corn").unwrap().quantity, 1);
        assert_eq!(store.find("kale").unwrap().quantity, 1);
    }

    #[test]
    fn rename_casing_variant_updates_display_name() {
        let store = InventoryStore::new();
        store.add_or_increment("corn", 5).unwrap();

        assert!(store.rename("corn", "CORN").unwrap());
        let item = store.find("corn").unwrap();
        assert_eq!(item.name, "CORN");
        assert_eq!(item.quantity, 5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn from_items_keys_by_canonical_name() {
        let store = InventoryStore::from_items(vec![
            InventoryItem {
                name: "Corn".to_string(),
                quantity: 4,
            },
            InventoryItem {
                name: "kale".to_string(),
                quantity: 2,
            },
        ]);
        assert_eq!(store.find("CORN").unwrap().quantity, 4);
        assert_eq!(store.find(" Kale ").unwrap().quantity, 2);
    }
}
