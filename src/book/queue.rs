//! Pending queue: scheduled bills waiting to be committed, first in first out

use std::collections::VecDeque;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingQueue {
    items: VecDeque<Transaction>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, txn: Transaction) {
        self.items.push_back(txn);
    }

    /// Take the oldest entry
    pub fn dequeue(&mut self) -> PocketbookResult<Transaction> {
        self.items
            .pop_front()
            .ok_or(PocketbookError::Empty("pending queue"))
    }

    pub fn peek(&self) -> Option<&Transaction> {
        self.items.front()
    }

    /// Entries in the order they will be processed
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_fifo_order() {
        let mut queue = PendingQueue::new();
        queue.enqueue(Transaction::new("Bills", Money::from_cents(-4000), "Power", ""));
        queue.enqueue(Transaction::new("Bills", Money::from_cents(-6000), "Water", ""));

        assert_eq!(queue.peek().unwrap().description(), "Power");
        assert_eq!(queue.dequeue().unwrap().description(), "Power");
        assert_eq!(queue.dequeue().unwrap().description(), "Water");
        assert!(matches!(
            queue.dequeue(),
            Err(PocketbookError::Empty("pending queue"))
        ));
    }
}
