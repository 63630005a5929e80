//! Undo history: committed transactions, most recent first out

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoHistory {
    stack: Vec<Transaction>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, txn: Transaction) {
        self.stack.push(txn);
    }

    /// Take the most recent entry
    pub fn pop(&mut self) -> PocketbookResult<Transaction> {
        self.stack.pop().ok_or(PocketbookError::Empty("undo history"))
    }

    /// Look at the most recent entry without taking it
    pub fn peek(&self) -> Option<&Transaction> {
        self.stack.last()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
