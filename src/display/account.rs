//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Account;

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, target: usize) -> String {
    let mut out = s.to_string();
    for _ in width(s)..target {
        out.push(' ');
    }
    out
}

/// Format a list of accounts as a box-drawing table
pub fn format_account_list(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts registered.\n".to_string();
    }

    let id_width = accounts
        .iter()
        .filter_map(|a| a.id())
        .map(|id| width(&id.to_string()))
        .max()
        .unwrap_or(2)
        .max(2);

    let owner_width = accounts
        .iter()
        .map(|a| width(a.owner()))
        .max()
        .unwrap_or(5)
        .max(5);

    let balance_width = accounts
        .iter()
        .map(|a| width(&a.balance().format_with_symbol(symbol)))
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();

    output.push_str(&format!(
        "╭─{}─┬─{}─┬─{}─╮\n",
        "─".repeat(id_width),
        "─".repeat(owner_width),
        "─".repeat(balance_width),
    ));
    output.push_str(&format!(
        "│ {} │ {} │ {} │\n",
        pad("ID", id_width),
        pad("Owner", owner_width),
        pad("Balance", balance_width),
    ));
    output.push_str(&format!(
        "├─{}─┼─{}─┼─{}─┤\n",
        "─".repeat(id_width),
        "─".repeat(owner_width),
        "─".repeat(balance_width),
    ));

    for account in accounts {
        let id = account
            .id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "│ {} │ {} │ {} │\n",
            pad(&id, id_width),
            pad(account.owner(), owner_width),
            pad(&account.balance().format_with_symbol(symbol), balance_width),
        ));
    }

    output.push_str(&format!(
        "╰─{}─┴─{}─┴─{}─╯\n",
        "─".repeat(id_width),
        "─".repeat(owner_width),
        "─".repeat(balance_width),
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.owner()));
    if let Some(id) = account.id() {
        output.push_str(&format!("  ID:       {}\n", id));
    }
    output.push_str(&format!(
        "  Balance:  {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at().format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Updated:  {}\n",
        account.updated_at().format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
