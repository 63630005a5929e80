//! CLI commands for reports

use clap::Subcommand;

use super::session::Session;
use crate::display::{format_monthly_report, format_monthly_totals};
use crate::error::PocketbookResult;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses and categories for one month, recomputed from the ledger
    Month {
        /// Month number (1-12)
        month: u32,
    },
    /// Stored income and expense totals for every month with activity
    Months,
}

/// Handle report commands
pub fn handle_report_command(session: &Session, cmd: ReportCommands) -> PocketbookResult<()> {
    let symbol = session.settings().currency_symbol.as_str();

    let output = match cmd {
        ReportCommands::Month { month } => session.read(|service| {
            let report = service.monthly_report(month)?;
            Ok(format_monthly_report(&report, symbol))
        })?,
        ReportCommands::Months => {
            session.read(|service| Ok(format_monthly_totals(&service.monthly_totals(), symbol)))?
        }
    };

    print!("{}", output);
    Ok(())
}
