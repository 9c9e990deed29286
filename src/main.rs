use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use moneytrack::activity::{ActivityEntry, ActivityLog, EntityType, Operation};
use moneytrack::cli::{
    handle_category_command, handle_export_command, handle_import_command, handle_report_command,
    handle_settings_command, handle_transaction_command,
};
use moneytrack::config::MoneyTrackPaths;
use moneytrack::ledger::Ledger;
use moneytrack::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "moneytrack",
    version,
    about = "Personal income and expense tracker",
    long_about = "MoneyTrack records income and expenses by category, keeps them in a \
                  local data directory, and shows monthly summaries, category \
                  breakdowns and exports from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(moneytrack::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(moneytrack::cli::CategoryCommands),

    /// Summaries and breakdowns
    #[command(subcommand)]
    Report(moneytrack::cli::ReportCommands),

    /// Export transactions or a full backup
    #[command(subcommand)]
    Export(moneytrack::cli::ExportCommands),

    /// Replace all data with a JSON backup
    Import {
        /// Path to the backup file
        file: PathBuf,
    },

    /// Show or change settings
    #[command(subcommand)]
    Settings(moneytrack::cli::SettingsCommands),

    /// Show recent activity log entries
    Activity {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MoneyTrackPaths::new()?;
    let activity_log = ActivityLog::new(paths.activity_log());

    let Some(command) = cli.command else {
        println!("MoneyTrack - personal income and expense tracker");
        println!();
        println!("Run 'moneytrack --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Config => {
            println!("MoneyTrack Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Activity log:      {}", paths.activity_log().display());
            return Ok(());
        }
        Commands::Activity { limit } => {
            let entries = activity_log.read_recent(limit)?;
            if entries.is_empty() {
                println!("No activity recorded.");
            }
            for entry in entries {
                println!("{}", entry.summary());
            }
            return Ok(());
        }
        _ => {}
    }

    paths.ensure_directories()?;

    let (ledger, load_error) = Ledger::open_or_reset(FileStore::new(paths.data_dir()));
    let mut ledger = ledger.with_activity_log(activity_log);
    if let Some(err) = load_error {
        eprintln!("Warning: stored data could not be read ({}). Starting fresh.", err);
        ledger.log_activity(ActivityEntry::warn(
            Operation::Load,
            EntityType::Ledger,
            format!("Starting fresh: {}", err),
        ));
    }

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut ledger, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut ledger, cmd)?,
        Commands::Report(cmd) => handle_report_command(&ledger, cmd)?,
        Commands::Export(cmd) => handle_export_command(&ledger, &paths, cmd)?,
        Commands::Import { file } => handle_import_command(&mut ledger, &file)?,
        Commands::Settings(cmd) => handle_settings_command(&mut ledger, cmd)?,
        Commands::Activity { .. } | Commands::Config => {}
    }

    Ok(())
}
