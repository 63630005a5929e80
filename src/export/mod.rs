//! Export module for Pocketbook
//!
//! - CSV: ledger and monthly totals (spreadsheet-compatible)
//! - Text: the legacy pipe-delimited format, readable and writable

pub mod csv;
pub mod text;

pub use self::csv::{export_monthly_totals_csv, export_transactions_csv};
pub use text::{read_transactions, write_transactions};
