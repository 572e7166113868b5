//! Interactive menu loop
//!
//! A numbered menu over stdin. Every domain failure is reported and the
//! loop keeps running; only stdin closing or option 0 ends it.

use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list};
use crate::error::BancoResult;
use crate::models::{AccountId, Money};
use crate::services::AccountService;
use crate::storage::AccountStore;

/// Run the interactive menu until the user quits or stdin closes
pub fn run_menu<S: AccountStore>(store: &S, settings: &Settings) -> BancoResult<()> {
    let service = AccountService::new(store);
    let symbol = settings.currency_symbol.as_str();

    println!("╭───────────────────────────────────────────────╮");
    println!("│          Welcome to the Banco CLI!            │");
    println!("│      Manage bank accounts from the shell.     │");
    println!("╰───────────────────────────────────────────────╯");

    loop {
        print_menu();

        let option = match read_line("Option: ")? {
            Some(line) => line,
            None => break,
        };

        let result = match option.as_str() {
            "0" => {
                println!("Goodbye!");
                break;
            }
            "1" => list_accounts(&service, symbol),
            "2" => show_account(&service, symbol),
            "3" => create_account(&service, symbol),
            "4" => set_balance(&service, symbol),
            "5" => deposit(&service, symbol),
            "6" => withdraw(&service, symbol),
            "7" => delete_account(&service),
            _ => {
                println!("Invalid option.");
                Ok(())
            }
        };

        // Report and keep looping; a failed operation never ends the session
        if let Err(err) = result {
            if err.is_domain() {
                println!("⚠ {}", err);
            } else {
                println!("Error processing the operation: {}", err);
            }
        }
    }

    Ok(())
}

fn print_menu() {
    println!("╭───────────────────────────────────────────────╮");
    println!("│ 1 - List accounts                             │");
    println!("│ 2 - Show account by id                        │");
    println!("│ 3 - Open new account                          │");
    println!("│ 4 - Set account balance                       │");
    println!("│ 5 - Deposit                                   │");
    println!("│ 6 - Withdraw                                  │");
    println!("│ 7 - Delete account                            │");
    println!("│ 0 - Quit                                      │");
    println!("╰───────────────────────────────────────────────╯");
}

/// Read one trimmed line, `None` on end of input
fn read_line(prompt: &str) -> BancoResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompt until the user enters a valid account id
fn read_id(prompt: &str) -> BancoResult<Option<AccountId>> {
    loop {
        match read_line(prompt)? {
            None => return Ok(None),
            Some(line) => match line.parse::<AccountId>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => print!("Invalid value. "),
            },
        }
    }
}

/// Re-prompt until the user enters a valid amount
fn read_amount(prompt: &str) -> BancoResult<Option<Money>> {
    loop {
        match read_line(prompt)? {
            None => return Ok(None),
            Some(line) => match Money::parse(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => print!("Invalid value. "),
            },
        }
    }
}

fn list_accounts<S: AccountStore>(service: &AccountService<S>, symbol: &str) -> BancoResult<()> {
    let accounts = service.list()?;
    print!("{}", format_account_list(&accounts, symbol));
    Ok(())
}

fn show_account<S: AccountStore>(service: &AccountService<S>, symbol: &str) -> BancoResult<()> {
    let Some(id) = read_id("Account id: ")? else {
        return Ok(());
    };
    let account = service.get(id)?;
    print!("{}", format_account_details(&account, symbol));
    Ok(())
}

fn create_account<S: AccountStore>(service: &AccountService<S>, symbol: &str) -> BancoResult<()> {
    let Some(owner) = read_line("Owner: ")? else {
        return Ok(());
    };
    let Some(balance) = read_amount("Initial balance: ")? else {
        return Ok(());
    };
    let account = service.create(&owner, balance)?;
    println!("Account created:");
    print!("{}", format_account_details(&account, symbol));
    Ok(())
}

fn set_balance<S: AccountStore>(service: &AccountService<S>, symbol: &str) -> BancoResult<()> {
    let Some(id) = read_id("Account id: ")? else {
        return Ok(());
    };
    let Some(balance) = read_amount("New balance: ")? else {
        return Ok(());
    };
    let account = service.set_balance(id, balance)?;
    println!("Account updated:");
    print!("{}", format_account_details(&account, symbol));
    Ok(())
}

fn deposit<S: AccountStore>(service: &AccountService<S>, symbol: &str) -> BancoResult<()> {
    let Some(id) = read_id("Account id: ")? else {
        return Ok(());
    };
    let Some(amount) = read_amount("Amount: ")? else {
        return Ok(());
    };
    let account = service.credit(id, amount)?;
    println!(
        "New balance: {}",
        account.balance().format_with_symbol(symbol)
    );
    Ok(())
}

fn withdraw<S: AccountStore>(service: &AccountService<S>, symbol: &str) -> BancoResult<()> {
    let Some(id) = read_id("Account id: ")? else {
        return Ok(());
    };
    let Some(amount) = read_amount("Amount: ")? else {
        return Ok(());
    };
    let account = service.debit(id, amount)?;
    println!(
        "New balance: {}",
        account.balance().format_with_symbol(symbol)
    );
    Ok(())
}

fn delete_account<S: AccountStore>(service: &AccountService<S>) -> BancoResult<()> {
    let Some(id) = read_id("Account id: ")? else {
        return Ok(());
    };
    service.delete(id)?;
    println!("Account deleted.");
    Ok(())
}
