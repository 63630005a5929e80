//! CSV export functionality
//!
//! Exports the ledger and the per-month totals to spreadsheet-friendly CSV.

use std::io::Write;

use crate::book::MonthlyTotals;
use crate::display::report::month_name;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Transaction;

/// Export the ledger, in ledger order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> PocketbookResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["ID", "Date", "Category", "Description", "Amount"])?;

    for txn in transactions {
        out.write_record([
            txn.id().as_uuid().to_string(),
            txn.date().to_string(),
            txn.category().to_string(),
            txn.description().to_string(),
            txn.amount().to_decimal_string(),
        ])?;
    }

    out.flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}

/// Export every month that has activity
pub fn export_monthly_totals_csv<W: Write>(
    totals: &MonthlyTotals,
    writer: W,
) -> PocketbookResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["Month", "Name", "Income", "Expenses", "Net"])?;

    for month in totals.present_months() {
        out.write_record([
            month.month.to_string(),
            month_name(month.month).to_string(),
            month.income.to_decimal_string(),
            month.expenses.to_decimal_string(),
            month.net().to_decimal_string(),
        ])?;
    }

    out.flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}
