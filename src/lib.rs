//! banco-cli - Terminal-based bank account manager
//!
//! This library provides the core functionality for banco-cli: bank account
//! creation, balance queries, credit/debit mutation, and deletion, backed by
//! durable JSON storage.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (the account aggregate, ids, money)
//! - `storage`: The account store and its JSON file implementation
//! - `services`: Business logic layer; the only mutator of stored state
//! - `display`: Terminal output formatting
//! - `cli`: clap command handlers and the interactive menu

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BancoError, BancoResult};
