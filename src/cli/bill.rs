//! Scheduled bill CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::session::Session;
use super::transaction::parse_positive_amount;
use crate::display::{format_pending_list, format_transaction_row};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Transaction;

/// Bill subcommands
#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Schedule a future bill; it is always recorded as an expense
    Schedule {
        /// Category name
        category: String,
        /// Amount as a positive number
        amount: String,
        /// Due date (M/D/YYYY)
        #[arg(long)]
        due: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Commit every scheduled bill in the order it was scheduled
    Process,
    /// Show scheduled bills waiting to be processed
    Pending,
}

/// Handle a bill command
pub fn handle_bill_command(session: &Session, cmd: BillCommands) -> PocketbookResult<()> {
    let settings = session.settings();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BillCommands::Schedule {
            category,
            amount,
            due,
            description,
        } => {
            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(PocketbookError::Validation(
                    "Category cannot be empty".into(),
                ));
            }
            let amount = parse_positive_amount(&amount)?;
            let due = due.trim().to_string();
            NaiveDate::parse_from_str(&due, &settings.date_format).map_err(|_| {
                PocketbookError::Validation(format!(
                    "Invalid due date '{}'. Use M/D/YYYY, e.g. 12/1/2025",
                    due
                ))
            })?;

            let bill = session.mutate(|service| {
                Ok(service.schedule_bill(Transaction::new(category, amount, description, due)))
            })?;
            println!("Future bill scheduled: {}", format_transaction_row(&bill, symbol));
        }
        BillCommands::Process => {
            let processed = session.mutate(|service| service.process_queue())?;
            if processed.is_empty() {
                println!("No scheduled bills to process.");
            } else {
                for bill in &processed {
                    println!("Processed: {}", format_transaction_row(bill, symbol));
                }
                println!("All scheduled bills processed ({}).", processed.len());
            }
        }
        BillCommands::Pending => {
            let output = session.read(|service| Ok(format_pending_list(&service.pending(), symbol)))?;
            print!("{}", output);
        }
    }

    Ok(())
}
