//! Audit logging for Pocketbook
//!
//! Every commit, removal, undo, scheduled bill and bulk load is recorded in an
//! append-only JSON-lines log next to the data directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::for_transaction(Operation::Commit, &txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
