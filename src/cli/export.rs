//! CLI commands for data export and import
//!
//! CSV output goes to stdout unless a file is given. The text format defaults
//! to the legacy file name inside the export directory.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::session::Session;
use crate::error::{PocketbookError, PocketbookResult};
use crate::export::{csv, text};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the ledger as CSV
    Csv {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export monthly income and expense totals as CSV
    Months {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the ledger in the pipe-delimited text format
    Text {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Import subcommands
#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Replace the ledger with a pipe-delimited text file
    Text {
        /// Path to the file
        file: PathBuf,
    },
}

fn create_file(path: &Path) -> PocketbookResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        PocketbookError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle export commands
pub fn handle_export_command(session: &Session, cmd: ExportCommands) -> PocketbookResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let count = session.read(|service| {
                let transactions = service.transactions();
                match &output {
                    Some(path) => csv::export_transactions_csv(transactions, create_file(path)?)?,
                    None => csv::export_transactions_csv(transactions, io::stdout().lock())?,
                }
                Ok(transactions.len())
            })?;
            if let Some(path) = output {
                println!("Exported {} transactions to: {}", count, path.display());
            }
        }
        ExportCommands::Months { output } => {
            session.read(|service| {
                let totals = service.monthly_totals();
                match &output {
                    Some(path) => csv::export_monthly_totals_csv(&totals, create_file(path)?),
                    None => csv::export_monthly_totals_csv(&totals, io::stdout().lock()),
                }
            })?;
            if let Some(path) = output {
                println!("Monthly totals exported to: {}", path.display());
            }
        }
        ExportCommands::Text { output } => {
            let path = output.unwrap_or_else(|| {
                session
                    .paths()
                    .export_dir()
                    .join(&session.settings().legacy_file_name)
            });
            let count = session.read(|service| {
                let transactions = service.transactions();
                let mut writer = create_file(&path)?;
                text::write_transactions(&mut writer, transactions)?;
                writer
                    .flush()
                    .map_err(|e| PocketbookError::Export(e.to_string()))?;
                Ok(transactions.len())
            })?;
            println!("Data saved to {} ({} transactions).", path.display(), count);
        }
    }

    Ok(())
}

/// Handle import commands
pub fn handle_import_command(session: &Session, cmd: ImportCommands) -> PocketbookResult<()> {
    match cmd {
        ImportCommands::Text { file } => {
            if !file.exists() {
                return Err(PocketbookError::Import(format!(
                    "File not found: {}",
                    file.display()
                )));
            }
            let reader = File::open(&file).map_err(|e| {
                PocketbookError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            // Parse fully before touching the book so a bad line changes nothing
            let transactions = text::read_transactions(BufReader::new(reader))?;
            let count = transactions.len();

            session.mutate(|service| service.bulk_load(transactions))?;
            println!("Saved data loaded: {} transactions from {}.", count, file.display());
        }
    }

    Ok(())
}
