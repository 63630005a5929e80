//! In-memory bookkeeping state
//!
//! A [`Book`] owns the four collaborators that must move together: the
//! [`Ledger`], the [`Budget`] derived from it, the [`UndoHistory`] of commits
//! and the [`PendingQueue`] of scheduled bills. Mutations that span more than
//! one of them go through [`crate::services::BookService`].

pub mod budget;
pub mod history;
pub mod ledger;
pub mod queue;

pub use budget::{Budget, MonthTotal, MonthlyReport, MonthlyTotals};
pub use history::UndoHistory;
pub use ledger::Ledger;
pub use queue::PendingQueue;

/// All mutable state for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub ledger: Ledger,
    pub budget: Budget,
    pub history: UndoHistory,
    pub pending: PendingQueue,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }
}
