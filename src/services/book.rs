//! Book service
//!
//! Sequences every mutation that spans the ledger, budget, undo history and
//! pending queue so that they move together. The service borrows the
//! [`Book`] exclusively for its lifetime; no partially applied operation is
//! ever observable.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::book::{Book, Budget, MonthlyReport, MonthlyTotals};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, Transaction};

/// Totals for the whole book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_balance: Money,
    pub category_totals: BTreeMap<String, Money>,
    /// Expenses recomputed by walking the ledger
    pub ledger_spending: Money,
    pub transaction_count: usize,
    pub pending_count: usize,
}

/// Controller over a [`Book`]
pub struct BookService<'a> {
    book: &'a mut Book,
    audit: Option<&'a AuditLogger>,
}

impl<'a> BookService<'a> {
    pub fn new(book: &'a mut Book) -> Self {
        Self { book, audit: None }
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Commit a transaction to the budget, ledger and undo history
    ///
    /// Failures (the transaction is already committed, or a total would
    /// overflow) are detected before anything changes.
    pub fn add_and_commit(&mut self, txn: Transaction) -> PocketbookResult<()> {
        self.book.budget.commit(&txn)?;
        debug!(id = %txn.id(), amount = %txn.amount(), "committed transaction");
        self.record(AuditEntry::for_transaction(Operation::Commit, &txn));
        self.book.ledger.append(txn.clone());
        self.book.history.push(txn);
        Ok(())
    }

    /// Remove the transaction at `index` and roll it out of the budget
    ///
    /// If it is also the most recent undo entry, that entry is dropped so the
    /// history never points at a transaction the ledger no longer holds.
    pub fn remove_by_position(&mut self, index: usize) -> PocketbookResult<Transaction> {
        let removed = self.book.ledger.remove_at(index)?;
        if let Err(e) = self.book.budget.rollback(&removed) {
            self.book.ledger.insert_at(index, removed);
            return Err(e);
        }

        if self.book.history.peek().map(|t| t.id()) == Some(removed.id()) {
            self.book.history.pop()?;
        }

        debug!(id = %removed.id(), index, "removed transaction");
        self.record(AuditEntry::for_transaction(Operation::Remove, &removed));
        Ok(removed)
    }

    /// Undo the most recent commit
    ///
    /// The history entry is consumed even when the ledger no longer holds the
    /// transaction; in that case `UndoTargetMissing` is returned and the
    /// budget is left alone.
    pub fn undo_last(&mut self) -> PocketbookResult<Transaction> {
        let last = self.book.history.pop()?;
        if !self.book.ledger.contains(last.id()) {
            warn!(id = %last.id(), "undo target missing from ledger");
            return Err(PocketbookError::UndoTargetMissing(last.id().to_string()));
        }
        self.book.budget.rollback(&last)?;
        self.book.ledger.remove_by_id(last.id());

        debug!(id = %last.id(), "undid transaction");
        self.record(AuditEntry::for_transaction(Operation::Undo, &last));
        Ok(last)
    }

    /// Queue a bill for later; its amount is forced negative
    pub fn schedule_bill(&mut self, bill: Transaction) -> Transaction {
        let bill = bill.into_expense();
        debug!(id = %bill.id(), amount = %bill.amount(), "scheduled bill");
        self.record(AuditEntry::for_transaction(Operation::Schedule, &bill));
        self.book.pending.enqueue(bill.clone());
        bill
    }

    /// Commit every queued bill in order
    ///
    /// Each bill is committed before the next is dequeued. On failure the
    /// committed prefix stays, the rest stays queued, and the failing bill is
    /// reported in `QueueDrainFailed`.
    pub fn process_queue(&mut self) -> PocketbookResult<Vec<Transaction>> {
        let mut processed = Vec::with_capacity(self.book.pending.len());
        while !self.book.pending.is_empty() {
            let bill = self.book.pending.dequeue()?;
            let id = bill.id();
            if let Err(source) = self.add_and_commit(bill.clone()) {
                return Err(PocketbookError::QueueDrainFailed {
                    processed: processed.len(),
                    id: id.to_string(),
                    source: Box::new(source),
                });
            }
            processed.push(bill);
        }
        info!(count = processed.len(), "processed scheduled bills");
        Ok(processed)
    }

    /// Replace the ledger with `transactions` and rebuild budget and history
    ///
    /// Replays each transaction through the same budget commit used for live
    /// entry. The new budget is built aside first, so duplicate ids or an
    /// overflowing total leave the book as it was.
    pub fn bulk_load(&mut self, transactions: Vec<Transaction>) -> PocketbookResult<()> {
        let mut seen = HashSet::with_capacity(transactions.len());
        if let Some(dup) = transactions.iter().find(|t| !seen.insert(t.id())) {
            return Err(PocketbookError::DuplicateTransaction(dup.id().to_string()));
        }

        let mut budget = Budget::new();
        for txn in &transactions {
            budget.commit(txn)?;
        }

        let count = transactions.len();
        self.book.ledger.replace_all(transactions.clone());
        self.book.budget = budget;
        self.book.history.clear();
        for txn in transactions {
            self.book.history.push(txn);
        }

        info!(count, "bulk load complete");
        self.record(AuditEntry::load(count));
        Ok(())
    }

    /// Put previously scheduled bills back on the queue in their saved order
    pub fn restore_pending(&mut self, bills: Vec<Transaction>) {
        for bill in bills {
            self.book.pending.enqueue(bill.into_expense());
        }
    }

    pub fn summary(&self) -> BudgetSummary {
        let budget = &self.book.budget;
        BudgetSummary {
            total_income: budget.total_income(),
            total_expenses: budget.total_expenses(),
            net_balance: budget.net_balance(),
            category_totals: budget.category_totals().clone(),
            ledger_spending: Budget::total_spending(self.book.ledger.snapshot()),
            transaction_count: self.book.ledger.len(),
            pending_count: self.book.pending.len(),
        }
    }

    pub fn monthly_report(&self, month: u32) -> PocketbookResult<MonthlyReport> {
        Budget::monthly_report(self.book.ledger.snapshot(), month)
    }

    pub fn monthly_totals(&self) -> MonthlyTotals {
        self.book.budget.monthly_totals()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.book.ledger.snapshot()
    }

    pub fn transactions_in_category(&self, category: &str) -> Vec<&Transaction> {
        self.book.ledger.by_category(category)
    }

    pub fn pending(&self) -> Vec<&Transaction> {
        self.book.pending.iter().collect()
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, operation = %entry.operation, "failed to write audit entry");
            }
        }
    }
}
