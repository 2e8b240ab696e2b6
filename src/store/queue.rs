//! First-in-first-out customer line.

use std::collections::VecDeque;

use chrono::Utc;
use parking_lot::RwLock;

use super::keys::non_blank;
use super::types::Customer;
use crate::error::Result;

/// FIFO line of customers waiting to be served.
///
/// Position is the only identity a customer has: duplicate names are
/// distinct entries, and dequeue always hands out the earliest
/// still-waiting customer.
///
/// # Thread safety
///
/// Writers (`enqueue`, `dequeue`, `clear`) take the lock exclusively,
/// so two concurrent dequeues can never return the same customer and
/// none is dropped unreturned. Readers share the lock.
#[derive(Debug, Default)]
pub struct CustomerQueue {
    entries: RwLock<VecDeque<Customer>>,
}

impl CustomerQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a queue from a previously saved head-to-tail sequence.
    pub fn from_customers<I>(customers: I) -> Self
    where
        I: IntoIterator<Item = Customer>,
    {
        Self {
            entries: RwLock::new(customers.into_iter().collect()),
        }
    }

    /// Appends a customer to the tail of the line.
    ///
    /// Name and note are trimmed; the note defaults to an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlankField`](crate::Error::BlankField) when the
    /// trimmed name is empty.
    pub fn enqueue(&self, name: &str, note: &str) -> Result<()> {
        let customer = Customer {
            name: non_blank(name, "name")?.to_string(),
            note: note.trim().to_string(),
            enqueued_at: Utc::now(),
        };
        self.entries.write().push_back(customer);
        Ok(())
    }

    /// Removes and returns the customer at the head of the line, or
    /// `None` when nobody is waiting.
    pub fn dequeue(&self) -> Option<Customer> {
        self.entries.write().pop_front()
    }

    /// The customer at the head of the line, without removing them.
    pub fn peek(&self) -> Option<Customer> {
        self.entries.read().front().cloned()
    }

    /// Empties the line, returning how many customers were dropped.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    /// Number of customers waiting.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Case-insensitive substring search over customer names, in queue
    /// order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Customer> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .read()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Full head-to-tail contents, without mutating the queue.
    pub fn snapshot(&self) -> Vec<Customer> {
        self.entries.read().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(customers: &[Customer]) -> Vec<&str> {
        customers.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn dequeues_in_arrival_order() {
        let queue = CustomerQueue::new();
        queue.enqueue("Ana", "").unwrap();
        queue.enqueue("Ben", "").unwrap();
        queue.enqueue("Cho", "").unwrap();

        assert_eq!(queue.dequeue().unwrap().name, "Ana");
        assert_eq!(queue.dequeue().unwrap().name, "Ben");
        assert_eq!(queue.dequeue().unwrap().name, "Cho");
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn dequeue_then_snapshot() {
        let queue = CustomerQueue::new();
        queue.enqueue("Jane", "refund").unwrap();
        queue.enqueue("Jo", "").unwrap();

        let served = queue.dequeue().unwrap();
        assert_eq!(served.name, "Jane");
        assert_eq!(served.note, "refund");

        let rest = queue.snapshot();
        assert_eq!(names(&rest), vec!["Jo"]);
        assert_eq!(rest[0].note, "");
    }

    #[test]
    fn enqueue_trims_name_and_note() {
        let queue = CustomerQueue::new();
        queue.enqueue("  Jane  ", "  pickup ").unwrap();

        let head = queue.peek().unwrap();
        assert_eq!(head.name, "Jane");
        assert_eq!(head.note, "pickup");
    }

    #[test]
    fn enqueue_rejects_blank_name() {
        let queue = CustomerQueue::new();
        assert!(queue.enqueue("   ", "note").is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicate_names_are_distinct_entries() {
        let queue = CustomerQueue::new();
        queue.enqueue("Sam", "first").unwrap();
        queue.enqueue("Sam", "second").unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue().unwrap().note, "first");
        assert_eq!(queue.dequeue().unwrap().note, "second");
    }

    #[test]
    fn peek_does_not_remove() {
        let queue = CustomerQueue::new();
        queue.enqueue("Ana", "").unwrap();

        assert_eq!(queue.peek().unwrap().name, "Ana");
        assert_eq!(queue.peek().unwrap().name, "Ana");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_reports_dropped_count() {
        let queue = CustomerQueue::new();
        queue.enqueue("Ana", "").unwrap();
        queue.enqueue("Ben", "").unwrap();

        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
        assert_eq!(queue.clear(), 0);
    }

    #[test]
    fn search_preserves_queue_order() {
        let queue = CustomerQueue::new();
        queue.enqueue("Joanna", "").unwrap();
        queue.enqueue("Ben", "").unwrap();
        queue.enqueue("jo", "").unwrap();

        let hits = queue.search("JO");
        assert_eq!(names(&hits), vec!["Joanna", "jo"]);
        // Searching never mutates.
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn blank_search_matches_nothing() {
        let queue = CustomerQueue::new();
        queue.enqueue("Ana", "").unwrap();
        assert!(queue.search("").is_empty());
        assert!(queue.search("  ").is_empty());
    }

    #[test]
    fn from_customers_preserves_order() {
        let source = CustomerQueue::new();
        source.enqueue("Ana", "").unwrap();
        source.enqueue("Ben", "").unwrap();

        let restored = CustomerQueue::from_customers(source.snapshot());
        assert_eq!(names(&restored.snapshot()), vec!["Ana", "Ben"]);
    }
}
