//! The ledger: every committed transaction in insertion order

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Transaction, TransactionId};

/// Ordered collection of committed transactions
///
/// Value-equal duplicates are allowed; they are told apart by position or by
/// [`TransactionId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction at the end
    pub fn append(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove and return the transaction at `index`
    ///
    /// The ledger is left untouched when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> PocketbookResult<Transaction> {
        if index >= self.transactions.len() {
            return Err(PocketbookError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        Ok(self.transactions.remove(index))
    }

    /// Put a transaction back at `index`, used to undo a failed removal
    pub(crate) fn insert_at(&mut self, index: usize, txn: Transaction) {
        let index = index.min(self.transactions.len());
        self.transactions.insert(index, txn);
    }

    /// Remove the first transaction carrying `id`; returns whether one was removed
    pub fn remove_by_id(&mut self, id: TransactionId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.transactions.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the whole contents, used by bulk load
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Read-only ordered view
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id() == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.position(id).is_some()
    }

    /// Transactions whose category matches `category`, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<&Transaction> {
        let wanted = category.trim();
        self.transactions
            .iter()
            .filter(|t| t.category().eq_ignore_ascii_case(wanted))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
