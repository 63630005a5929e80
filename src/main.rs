use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketbook::cli::{
    handle_bill_command, handle_export_command, handle_history_command, handle_import_command,
    handle_report_command, handle_transaction_command, BillCommands, ExportCommands,
    ImportCommands, ReportCommands, Session, TransactionCommands,
};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "pocketbook",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal finance ledger",
    long_about = "Pocketbook keeps a ledger of income and expenses, running budget \
                  totals by category and month, an undo history, and a queue of \
                  scheduled bills, all from the command line."
)]
struct Cli {
    /// Show debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Bill(BillCommands),

    /// Monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import data, replacing the ledger
    #[command(subcommand)]
    Import(ImportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Initialize the data directory and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pocketbook=debug"
    } else {
        "pocketbook=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let open = || Session::open(paths.clone(), settings.clone());

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Pocketbook at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'pocketbook add <category> <amount>' to record income,");
            println!("or add --expense to record spending.");
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Book file:        {}", paths.book_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Due date format: {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Text file name:  {}", settings.legacy_file_name);
        }
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&open()?, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill_command(&open()?, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&open()?, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&open()?, cmd)?,
        Some(Commands::Import(cmd)) => handle_import_command(&open()?, cmd)?,
        Some(Commands::History { count }) => handle_history_command(&open()?, count)?,
        None => {
            println!("Pocketbook - terminal personal finance ledger");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
        }
    }

    Ok(())
}
