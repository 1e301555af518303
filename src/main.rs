use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_insights::cli::{
    handle_analytics_command, handle_expense_command, handle_export_command, AnalyticsCommands,
    ExpenseCommands, ExportCommands,
};
use expense_insights::config::{paths::InsightsPaths, settings::Settings};
use expense_insights::logging::init_tracing;
use expense_insights::models::PREDEFINED_CATEGORIES;
use expense_insights::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Expense tracking with trend analysis and forecasting",
    long_about = "Records expenses in a local store and reports on them: totals per \
                  period, category breakdowns, month-over-month comparison, weekday \
                  patterns and a linear-trend forecast."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Analytics views over recorded expenses
    #[command(subcommand, alias = "stats")]
    Analytics(AnalyticsCommands),

    /// Export expenses and reports to files
    #[command(subcommand)]
    Export(ExportCommands),

    /// List the predefined category labels
    Categories,

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = InsightsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Analytics(cmd)) => handle_analytics_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, &settings, cmd)?,
        Some(Commands::Categories) => {
            for category in PREDEFINED_CATEGORIES {
                println!("{}", category);
            }
        }
        Some(Commands::Init) => {
            println!("Initializing expense-insights at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expenses expense add <amount> --category <label>' to record an expense.");
            println!("Run 'expenses categories' to see the suggested labels.");
        }
        Some(Commands::Config) => {
            println!("expense-insights Configuration");
            println!("==============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data file:         {}", paths.expenses_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Owner:              {}", settings.owner);
            println!("  Granularity:        {}", settings.default_granularity);
            println!("  Forecast horizon:   {}", settings.forecast_horizon);
            println!("  Default range days: {}", settings.default_range_days);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Validation:         {:?}", settings.validation);
            println!("  Log filter:         {}", settings.log_filter);
        }
        None => {
            println!("expense-insights - expense tracking and forecasting");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
