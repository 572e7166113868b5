//! Account CLI commands
//!
//! Bridges clap argument parsing with the service layer.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list};
use crate::error::{BancoError, BancoResult};
use crate::models::{AccountId, Money};
use crate::services::AccountService;
use crate::storage::AccountStore;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Create {
        /// Owner display name
        owner: String,
        /// Initial balance (e.g., "1000.00"); must be greater than zero
        #[arg(short, long)]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account id
        id: AccountId,
    },
    /// Credit an amount into an account
    Deposit {
        /// Account id
        id: AccountId,
        /// Amount to credit (e.g., "250.00")
        amount: String,
    },
    /// Debit an amount from an account
    Withdraw {
        /// Account id
        id: AccountId,
        /// Amount to debit (e.g., "250.00")
        amount: String,
    },
    /// Overwrite an account's balance (administrative)
    SetBalance {
        /// Account id
        id: AccountId,
        /// New balance; must be greater than zero
        balance: String,
    },
    /// Delete an account
    Delete {
        /// Account id
        id: AccountId,
    },
}

fn parse_amount(s: &str) -> BancoResult<Money> {
    Money::parse(s).map_err(|e| BancoError::InvalidAmount(e.to_string()))
}

/// Handle an account command
pub fn handle_account_command<S: AccountStore>(
    store: &S,
    settings: &Settings,
    cmd: AccountCommands,
) -> BancoResult<()> {
    let service = AccountService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create { owner, balance } => {
            let balance = Money::parse(&balance)
                .map_err(|e| BancoError::InvalidInitialBalance(e.to_string()))?;

            let account = service.create(&owner, balance)?;
            println!("Account created:");
            print!("{}", format_account_details(&account, symbol));
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            print!("{}", format_account_list(&accounts, symbol));
        }

        AccountCommands::Show { id } => {
            let account = service.get(id)?;
            print!("{}", format_account_details(&account, symbol));
        }

        AccountCommands::Deposit { id, amount } => {
            let amount = parse_amount(&amount)?;
            let account = service.credit(id, amount)?;
            println!(
                "Deposited {} into account {}. New balance: {}",
                amount.format_with_symbol(symbol),
                id,
                account.balance().format_with_symbol(symbol)
            );
        }

        AccountCommands::Withdraw { id, amount } => {
            let amount = parse_amount(&amount)?;
            let account = service.debit(id, amount)?;
            println!(
                "Withdrew {} from account {}. New balance: {}",
                amount.format_with_symbol(symbol),
                id,
                account.balance().format_with_symbol(symbol)
            );
        }

        AccountCommands::SetBalance { id, balance } => {
            let balance = parse_amount(&balance)?;
            let account = service.set_balance(id, balance)?;
            println!("Account updated:");
            print!("{}", format_account_details(&account, symbol));
        }

        AccountCommands::Delete { id } => {
            service.delete(id)?;
            println!("Account {} deleted.", id);
        }
    }

    Ok(())
}
