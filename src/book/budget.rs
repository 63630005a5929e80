//! Budget aggregates derived from committed transactions
//!
//! The budget keeps running income/expense totals, per-category totals and
//! twelve monthly slots. It has no lifecycle of its own: replaying the ledger
//! into an empty budget always reproduces the same numbers.
//!
//! Each commit is remembered by transaction id, so a transaction cannot be
//! committed twice and a rollback must match an earlier commit.

use std::collections::{BTreeMap, HashSet};

use tracing::trace;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, Transaction, TransactionId};

/// Number of monthly slots
pub const MONTHS: usize = 12;

/// Running aggregates over the committed transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Budget {
    total_income: Money,
    total_expenses: Money,
    category_totals: BTreeMap<String, Money>,
    monthly_income: [Money; MONTHS],
    monthly_expenses: [Money; MONTHS],
    committed: HashSet<TransactionId>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a transaction into every accumulator
    ///
    /// A date without a usable month only skips the monthly slot; totals and
    /// the category are still updated.
    pub fn commit(&mut self, txn: &Transaction) -> PocketbookResult<()> {
        if self.committed.contains(&txn.id()) {
            return Err(PocketbookError::AlreadyCommitted(txn.id().to_string()));
        }
        self.apply(txn, Direction::Add)?;
        self.committed.insert(txn.id());
        Ok(())
    }

    /// Exact inverse of [`Budget::commit`]
    ///
    /// A category whose total drops to zero or below is removed.
    pub fn rollback(&mut self, txn: &Transaction) -> PocketbookResult<()> {
        if !self.committed.contains(&txn.id()) {
            return Err(PocketbookError::NotCommitted(txn.id().to_string()));
        }
        self.apply(txn, Direction::Subtract)?;
        self.committed.remove(&txn.id());
        Ok(())
    }

    /// Zero every accumulator and forget all commits
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Every new value is computed before any is stored, so an overflow
    /// leaves the budget untouched.
    fn apply(&mut self, txn: &Transaction, direction: Direction) -> PocketbookResult<()> {
        let overflow = || PocketbookError::AmountOverflow(txn.id().to_string());
        let magnitude = txn.amount().abs();
        let slot = txn.month().map(|m| (m - 1) as usize);

        let (total, monthly) = if txn.is_income() {
            (&mut self.total_income, &mut self.monthly_income)
        } else {
            (&mut self.total_expenses, &mut self.monthly_expenses)
        };
        let new_total = direction.apply(*total, magnitude).ok_or_else(overflow)?;
        let new_slot = match slot {
            Some(slot) => Some((
                slot,
                direction
                    .apply(monthly[slot], magnitude)
                    .ok_or_else(overflow)?,
            )),
            None => None,
        };
        let current = self.category_totals.get(txn.category()).copied();
        let new_category = match (direction, current) {
            (Direction::Add, current) => Some(
                current
                    .unwrap_or_default()
                    .checked_add(magnitude)
                    .ok_or_else(overflow)?,
            ),
            (Direction::Subtract, Some(current)) => {
                Some(current.checked_sub(magnitude).ok_or_else(overflow)?)
            }
            (Direction::Subtract, None) => None,
        };

        *total = new_total;
        if let Some((slot, value)) = new_slot {
            monthly[slot] = value;
        }
        match new_category {
            Some(value) if direction == Direction::Subtract && value.cents() <= 0 => {
                self.category_totals.remove(txn.category());
            }
            Some(value) => {
                self.category_totals.insert(txn.category().to_string(), value);
            }
            None => {}
        }

        trace!(
            id = %txn.id(),
            ?direction,
            month = ?txn.month(),
            "budget updated"
        );
        Ok(())
    }

    pub fn total_income(&self) -> Money {
        self.total_income
    }

    pub fn total_expenses(&self) -> Money {
        self.total_expenses
    }

    pub fn net_balance(&self) -> Money {
        self.total_income - self.total_expenses
    }

    /// Category totals ordered by category name
    pub fn category_totals(&self) -> &BTreeMap<String, Money> {
        &self.category_totals
    }

    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.category_totals.get(category).copied()
    }

    pub fn is_committed(&self, id: TransactionId) -> bool {
        self.committed.contains(&id)
    }

    /// Sum of `|amount|` over the expenses in `transactions`
    ///
    /// Defined as the right-recursive sum
    /// `contribution(head) + total_spending(tail)` with 0 for the empty list,
    /// evaluated as a right fold so ledger length never touches the call stack.
    pub fn total_spending(transactions: &[Transaction]) -> Money {
        transactions
            .iter()
            .rev()
            .fold(Money::zero(), |rest, txn| spending_of(txn) + rest)
    }

    /// Recompute income, expenses and category totals for one month
    ///
    /// Works from `transactions` every time; the persistent monthly slots are
    /// not consulted.
    pub fn monthly_report(
        transactions: &[Transaction],
        month: u32,
    ) -> PocketbookResult<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(PocketbookError::InvalidMonth(month));
        }

        let mut report = MonthlyReport {
            month,
            ..MonthlyReport::default()
        };
        for txn in transactions.iter().filter(|t| t.month() == Some(month)) {
            let overflow = || PocketbookError::AmountOverflow(txn.id().to_string());
            let magnitude = txn.amount().abs();
            let total = if txn.is_income() {
                &mut report.income
            } else {
                &mut report.expenses
            };
            *total = total.checked_add(magnitude).ok_or_else(overflow)?;
            let category = report
                .category_totals
                .entry(txn.category().to_string())
                .or_default();
            *category = category.checked_add(magnitude).ok_or_else(overflow)?;
            report.transactions.push(txn.clone());
        }
        Ok(report)
    }

    /// Copy of the twelve monthly slots
    pub fn monthly_totals(&self) -> MonthlyTotals {
        MonthlyTotals {
            income: self.monthly_income,
            expenses: self.monthly_expenses,
        }
    }
}

fn spending_of(txn: &Transaction) -> Money {
    if txn.amount().is_negative() {
        txn.amount().abs()
    } else {
        Money::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Add,
    Subtract,
}

impl Direction {
    fn apply(self, target: Money, amount: Money) -> Option<Money> {
        match self {
            Direction::Add => target.checked_add(amount),
            Direction::Subtract => target.checked_sub(amount),
        }
    }
}

/// Income and expenses for a single month, recomputed from a transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyReport {
    pub month: u32,
    /// Matching transactions in ledger order
    pub transactions: Vec<Transaction>,
    pub income: Money,
    pub expenses: Money,
    pub category_totals: BTreeMap<String, Money>,
}

impl MonthlyReport {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// The twelve-slot income and expense arrays (index 0 = January)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub income: [Money; MONTHS],
    pub expenses: [Money; MONTHS],
}

/// One present month from [`MonthlyTotals`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
}

impl MonthTotal {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

impl MonthlyTotals {
    /// Months where either slot is non-zero, in calendar order
    pub fn present_months(&self) -> Vec<MonthTotal> {
        (0..MONTHS)
            .filter(|&i| !self.income[i].is_zero() || !self.expenses[i].is_zero())
            .map(|i| MonthTotal {
                month: i as u32 + 1,
                income: self.income[i],
                expenses: self.expenses[i],
            })
            .collect()
    }
}
