//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Kinds of state changes that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction committed to ledger, budget and history
    Commit,
    /// Transaction removed by position
    Remove,
    /// Most recent commit undone
    Undo,
    /// Bill placed on the pending queue
    Schedule,
    /// Ledger replaced by a bulk load
    Load,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Commit => write!(f, "COMMIT"),
            Operation::Remove => write!(f, "REMOVE"),
            Operation::Undo => write!(f, "UNDO"),
            Operation::Schedule => write!(f, "SCHEDULE"),
            Operation::Load => write!(f, "LOAD"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// One-line description, e.g. the transaction row or a load count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// JSON copy of the affected transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for an operation on a single transaction
    pub fn for_transaction(operation: Operation, txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            transaction_id: Some(txn.id().to_string()),
            summary: Some(txn.to_string()),
            transaction: serde_json::to_value(txn).ok(),
        }
    }

    /// Entry for a bulk load of `count` transactions
    pub fn load(count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Load,
            transaction_id: None,
            summary: Some(format!("{} transaction(s) loaded", count)),
            transaction: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = &self.transaction_id {
            output.push_str(&format!(" {}", id));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!(" ({})", summary));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn sample() -> Transaction {
        Transaction::new("Food", Money::from_cents(-2550), "Groceries", "11/3/2025")
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Commit.to_string(), "COMMIT");
        assert_eq!(Operation::Undo.to_string(), "UNDO");
        assert_eq!(Operation::Load.to_string(), "LOAD");
    }

    #[test]
    fn test_transaction_entry() {
        let txn = sample();
        let entry = AuditEntry::for_transaction(Operation::Commit, &txn);

        assert_eq!(entry.operation, Operation::Commit);
        assert_eq!(entry.transaction_id, Some(txn.id().to_string()));
        assert_eq!(entry.transaction.unwrap()["category"], "Food");
    }

    #[test]
    fn test_load_entry() {
        let entry = AuditEntry::load(3);
        assert!(entry.transaction_id.is_none());
        assert_eq!(entry.summary.as_deref(), Some("3 transaction(s) loaded"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::for_transaction(Operation::Schedule, &sample());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"schedule\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::Schedule);
    }

    #[test]
    fn test_human_readable_format() {
        let txn = sample();
        let formatted = AuditEntry::for_transaction(Operation::Remove, &txn).format_human_readable();
        assert!(formatted.contains("REMOVE"));
        assert!(formatted.contains(&txn.id().to_string()));
        assert!(formatted.contains("Food"));
    }
}
