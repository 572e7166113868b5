use anyhow::Result;
use clap::{Parser, Subcommand};

use banco_cli::cli::{handle_account_command, run_menu, AccountCommands};
use banco_cli::config::{BancoPaths, Settings};
use banco_cli::storage::JsonAccountStore;

#[derive(Parser)]
#[command(
    name = "banco",
    version,
    about = "Terminal-based bank account manager",
    long_about = "banco-cli manages bank accounts from the command line: open \
                  accounts, deposit, withdraw, overwrite balances, and delete, \
                  all backed by durable JSON storage."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Launch the interactive menu (default when no command is given)
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BancoPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let store = JsonAccountStore::new(paths.accounts_file());
    store.load()?;

    let result = match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&store, &settings, cmd),
        Some(Commands::Menu) | None => run_menu(&store, &settings),
        Some(Commands::Config) => {
            println!("banco-cli Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            Ok(())
        }
    };

    // Every failure is reported at the boundary; domain failures get the
    // short warning form, anything else the full error
    if let Err(err) = result {
        if err.is_domain() {
            eprintln!("⚠ {}", err);
        } else {
            eprintln!("Error: {}", err);
        }
        std::process::exit(1);
    }

    Ok(())
}
