//! Custom error types for banco-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for banco-cli operations
#[derive(Error, Debug)]
pub enum BancoError {
    /// Initial balance rejected at account creation (non-positive,
    /// unparseable, or empty owner name)
    #[error("Invalid initial balance: {0}")]
    InvalidInitialBalance(String),

    /// Amount rejected by a credit, debit, or balance overwrite
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Debit exceeds the current balance
    #[error("Insufficient funds: tried to debit {attempted}, balance is {available}")]
    InsufficientFunds { attempted: Money, available: Money },

    /// Unknown account id on lookup, update, or delete
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BancoError {
    /// Create a "not found" error from any id-like value
    pub fn account_not_found(identifier: impl ToString) -> Self {
        Self::AccountNotFound(identifier.to_string())
    }

    /// Check if this is a recoverable domain failure (as opposed to a
    /// storage/config/IO fault)
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::InvalidInitialBalance(_)
                | Self::InvalidAmount(_)
                | Self::InsufficientFunds { .. }
                | Self::AccountNotFound(_)
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BancoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BancoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for banco-cli operations
pub type BancoResult<T> = Result<T, BancoError>;
