//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the service
//! layer.

pub mod account;
pub mod menu;

pub use account::{handle_account_command, AccountCommands};
pub use menu::run_menu;
