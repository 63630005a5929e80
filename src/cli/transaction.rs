//! Transaction CLI commands
//!
//! Adding, listing, removing and undoing ledger entries, plus the summary.

use clap::Subcommand;

use super::session::Session;
use crate::display::{
    format_summary, format_transaction_list, format_transaction_register, format_transaction_row,
};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, Transaction};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a transaction and commit it to the budget
    Add {
        /// Category name
        category: String,
        /// Amount as a positive number (e.g. "25.50")
        amount: String,
        /// Record as an expense instead of income
        #[arg(short, long)]
        expense: bool,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date as M/D/YYYY, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List transactions in ledger order
    List {
        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show totals, net balance and per-category totals
    Summary,
    /// Remove the transaction at a ledger position (see `list`)
    Remove {
        /// Zero-based position
        index: usize,
    },
    /// Undo the most recently added transaction
    Undo,
}

/// Handle a transaction command
pub fn handle_transaction_command(session: &Session, cmd: TransactionCommands) -> PocketbookResult<()> {
    let symbol = session.settings().currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            expense,
            description,
            date,
        } => {
            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(PocketbookError::Validation(
                    "Category cannot be empty".into(),
                ));
            }
            let amount = parse_positive_amount(&amount)?;
            let amount = if expense { -amount } else { amount };
            let date = date.unwrap_or_else(today);

            let txn = Transaction::new(category, amount, description, date);
            let row = format_transaction_row(&txn, symbol);
            session.mutate(|service| service.add_and_commit(txn))?;

            println!("Transaction added: {}", row);
        }
        TransactionCommands::List { category } => {
            let output = session.read(|service| {
                Ok(match &category {
                    Some(name) => format_transaction_list(
                        service.transactions_in_category(name),
                        symbol,
                    ),
                    None => format_transaction_register(service.transactions(), symbol),
                })
            })?;

            if let Some(name) = &category {
                println!("Transactions in category: {}", name.trim());
            }
            print!("{}", output);
        }
        TransactionCommands::Summary => {
            let summary = session.read(|service| Ok(service.summary()))?;
            print!("{}", format_summary(&summary, symbol));
        }
        TransactionCommands::Remove { index } => {
            let removed = session.mutate(|service| service.remove_by_position(index))?;
            println!("Removed transaction: {}", format_transaction_row(&removed, symbol));
        }
        TransactionCommands::Undo => match session.mutate(|service| service.undo_last()) {
            Ok(undone) => {
                println!("Undid transaction: {}", format_transaction_row(&undone, symbol));
            }
            Err(e) if e.is_empty_collection() => println!("Nothing to undo."),
            Err(e) => return Err(e),
        },
    }

    Ok(())
}

/// Parse a user-entered amount that must be greater than zero
pub(crate) fn parse_positive_amount(input: &str) -> PocketbookResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        PocketbookError::Validation(format!(
            "Invalid amount '{}': {}. Use a format like '25.50'",
            input, e
        ))
    })?;

    if !amount.is_positive() {
        return Err(PocketbookError::Validation(format!(
            "Amount must be greater than zero, got '{}'",
            input
        )));
    }
    Ok(amount)
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%-m/%-d/%Y").to_string()
}
