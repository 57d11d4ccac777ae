use anyhow::Result;
use clap::{Parser, Subcommand};

use wellspace::cli::{
    handle_dashboard_command, handle_expense_command, handle_goal_command, handle_income_command,
    handle_pin_command, handle_suggest_command, require_unlocked, ExpenseCommands, GoalCommands,
    IncomeCommands, PinCommands,
};
use wellspace::config::{paths::WellspacePaths, settings::Settings};
use wellspace::logging::init_tracing;
use wellspace::storage::Storage;

#[derive(Parser)]
#[command(
    name = "wellspace",
    version,
    about = "PIN-protected personal expense tracker",
    long_about = "WellSpace records your expenses, tracks income against a savings \
                  goal, and can suggest a category for each expense using a \
                  generative model."
)]
struct Cli {
    /// PIN for this invocation (prompts when omitted)
    #[arg(long, global = true, env = "WELLSPACE_PIN", hide_env_values = true)]
    pin: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default configuration
    Init,

    /// Show current configuration and paths
    Config,

    /// PIN management commands
    #[command(subcommand)]
    Pin(PinCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Total income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Suggest a category for a description
    Suggest {
        /// Expense description
        description: String,
    },

    /// Show totals, balance, and spending by category
    Dashboard {
        /// Reference date for the monthly figure (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = WellspacePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("WellSpace - personal expense tracker");
        println!();
        println!("Run 'wellspace --help' for usage information.");
        println!("Run 'wellspace pin set' to get started.");
        return Ok(());
    };

    match &command {
        Commands::Init => {
            println!("Initializing WellSpace at: {}", paths.base_dir().display());
            Storage::new(paths.clone())?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next, create your PIN with 'wellspace pin set'.");
            return Ok(());
        }
        Commands::Config => {
            println!("WellSpace Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Recent expense limit: {}", settings.recent_expense_limit);
            println!();
            println!("Category advisor:");
            println!("  Enabled:  {}", settings.advisor.enabled);
            println!("  Model:    {}", settings.advisor.model);
            println!("  Endpoint: {}", settings.advisor.endpoint);
            println!("  Timeout:  {}s", settings.advisor.timeout_secs);
            println!(
                "  API key:  {} ({})",
                if settings.advisor.api_key().is_some() {
                    "found"
                } else {
                    "missing"
                },
                settings.advisor.api_key_env
            );
            return Ok(());
        }
        Commands::Suggest { description } => {
            handle_suggest_command(&settings, description)?;
            return Ok(());
        }
        _ => {}
    }

    // Initialize storage
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    let pin = cli.pin.as_deref();

    match command {
        Commands::Pin(cmd) => handle_pin_command(&storage, pin, cmd)?,
        Commands::Expense(cmd) => {
            require_unlocked(&storage, pin)?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Commands::Income(cmd) => {
            require_unlocked(&storage, pin)?;
            handle_income_command(&storage, &settings, cmd)?;
        }
        Commands::Goal(cmd) => {
            require_unlocked(&storage, pin)?;
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Commands::Dashboard { date } => {
            require_unlocked(&storage, pin)?;
            handle_dashboard_command(&storage, &settings, date.as_deref())?;
        }
        Commands::Init | Commands::Config | Commands::Suggest { .. } => {}
    }

    Ok(())
}
