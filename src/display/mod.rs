//! Display formatting for terminal output
//!
//! Formats transactions and reports for terminal display.

pub mod report;
pub mod transaction;

pub use report::{format_monthly_report, format_monthly_totals, format_summary};
pub use transaction::{
    format_pending_list, format_transaction_list, format_transaction_register,
    format_transaction_row,
};
