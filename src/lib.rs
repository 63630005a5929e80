//! Pocketbook - terminal personal finance ledger
//!
//! This library provides the core of the Pocketbook CLI: a ledger of income
//! and expense transactions, a budget that keeps running totals by category
//! and month, an undo history of commits, and a queue of scheduled bills.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `book`: Ledger, budget, undo history and pending queue
//! - `services`: The book service that keeps those four consistent
//! - `models`: Transactions, ids and money amounts
//! - `config`: Configuration and path management
//! - `storage`: JSON file storage layer
//! - `export`: CSV and legacy text formats
//! - `audit`: Audit logging system
//! - `display`, `cli`: Terminal output and command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use pocketbook::book::Book;
//! use pocketbook::models::{Money, Transaction};
//! use pocketbook::services::BookService;
//!
//! let mut book = Book::new();
//! let mut service = BookService::new(&mut book);
//! service
//!     .add_and_commit(Transaction::new("Food", Money::from_cents(-2550), "Lunch", "11/3/2025"))
//!     .unwrap();
//! assert_eq!(service.summary().total_expenses, Money::from_cents(2550));
//! ```

pub mod audit;
pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PocketbookError, PocketbookResult};
