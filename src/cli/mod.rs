//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod export;
pub mod history;
pub mod report;
pub mod session;
pub mod transaction;

pub use bill::{handle_bill_command, BillCommands};
pub use export::{handle_export_command, handle_import_command, ExportCommands, ImportCommands};
pub use history::handle_history_command;
pub use report::{handle_report_command, ReportCommands};
pub use session::Session;
pub use transaction::{handle_transaction_command, TransactionCommands};
