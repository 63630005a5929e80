//! Transaction model
//!
//! A transaction is one income or expense event. It is immutable once built;
//! the only derived copy is [`Transaction::into_expense`], used when a bill is
//! scheduled.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,

    /// Free-text label such as "Food" or "Bills"
    category: String,

    /// Positive for income, zero or negative for an expense
    amount: Money,

    #[serde(default)]
    description: String,

    /// Raw date text, month first ("11/3/2025")
    #[serde(default)]
    date: String,
}

impl Transaction {
    /// Create a transaction with a fresh id
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            category: category.into(),
            amount,
            description: description.into(),
            date: date.into(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Positive amounts are income; everything else counts as an expense
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// Month number (1-12) taken from the text before the first `/` of the date
    ///
    /// Returns `None` for empty dates, a missing or leading slash, non-numeric
    /// text, or a number outside 1-12.
    pub fn month(&self) -> Option<u32> {
        month_from_date(&self.date)
    }

    /// The same transaction (same id) with its amount forced to `-|amount|`
    pub fn into_expense(self) -> Self {
        Self {
            amount: -self.amount.abs(),
            ..self
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Extract the month from date text like "11/03/2025" or "1/3/2025"
pub fn month_from_date(date: &str) -> Option<u32> {
    let (month, _) = date.split_once('/')?;
    if month.is_empty() || !month.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    month.parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(date: &str) -> Transaction {
        Transaction::new("Food", Money::from_cents(-2550), "Groceries", date)
    }

    #[test]
    fn test_month_extraction() {
        assert_eq!(food("11/3/2025").month(), Some(11));
        assert_eq!(food("01/03/2025").month(), Some(1));
        assert_eq!(food("12/31/2025").month(), Some(12));
    }

    #[test]
    fn test_month_extraction_rejects_bad_dates() {
        assert_eq!(food("").month(), None);
        assert_eq!(food("2025-11-03").month(), None);
        assert_eq!(food("/3/2025").month(), None);
        assert_eq!(food("Nov/3/2025").month(), None);
        assert_eq!(food("13/3/2025").month(), None);
        assert_eq!(food("0/3/2025").month(), None);
        assert_eq!(food("-1/3/2025").month(), None);
    }

    #[test]
    fn test_income_and_expense() {
        let salary = Transaction::new("Income", Money::from_cents(100_000), "Pay", "1/1/2025");
        assert!(salary.is_income());
        assert!(food("1/1/2025").is_expense());

        let zero = Transaction::new("Misc", Money::zero(), "", "");
        assert!(zero.is_expense());
    }

    #[test]
    fn test_into_expense_keeps_identity() {
        let bill = Transaction::new("Bills", Money::from_cents(4000), "Power", "2/1/2025");
        let id = bill.id();
        let expense = bill.into_expense();
        assert_eq!(expense.id(), id);
        assert_eq!(expense.amount().cents(), -4000);

        let again = expense.into_expense();
        assert_eq!(again.amount().cents(), -4000);
    }

    #[test]
    fn test_value_equal_transactions_are_distinct() {
        let a = food("11/3/2025");
        let b = food("11/3/2025");
        assert_eq!(a.category(), b.category());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let t = food("11/3/2025");
        assert_eq!(t.to_string(), "11/3/2025 | Food | -$25.50 | Groceries");
    }
}
