//! Service layer for Pocketbook
//!
//! The service layer sequences operations across the in-memory book and
//! records them in the audit log.

pub mod book;

pub use book::{BookService, BudgetSummary};
