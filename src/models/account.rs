//! Account aggregate
//!
//! The account is the sole owner and validator of a balance: every mutation
//! passes through it, and each one is validated before it is applied. An
//! account starts out unsaved (no id); the store assigns an id on first
//! persist and the id never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use crate::error::{BancoError, BancoResult};

/// A bank account
///
/// Invariants: the balance is never negative and always sits on the
/// two-centavo scale; the owner name is non-empty and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, `None` until first persisted
    id: Option<AccountId>,

    /// Owner display name
    owner: String,

    /// Current balance
    balance: Money,

    /// When the account was created
    created_at: DateTime<Utc>,

    /// When the account was last modified
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Open a new, unsaved account
    ///
    /// Rejects an empty owner name and any initial balance that is not
    /// strictly positive (zero is not an accepted starting balance).
    pub fn open(owner: impl Into<String>, initial_balance: Money) -> BancoResult<Self> {
        let owner = owner.into();
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(BancoError::InvalidInitialBalance(
                "owner name cannot be empty".into(),
            ));
        }
        if !initial_balance.is_positive() {
            return Err(BancoError::InvalidInitialBalance(format!(
                "balance must be greater than zero, got {}",
                initial_balance
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: None,
            owner: owner.to_string(),
            balance: initial_balance,
            created_at: now,
            updated_at: now,
        })
    }

    /// The identifier, if this account has been persisted
    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether this account has been persisted (has an id)
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Assign the store-issued id on first persist
    pub(crate) fn assign_id(&mut self, id: AccountId) {
        self.id = Some(id);
    }

    /// Increase the balance
    ///
    /// Rejects amounts that are not strictly positive.
    pub fn credit(&mut self, amount: Money) -> BancoResult<()> {
        if !amount.is_positive() {
            return Err(BancoError::InvalidAmount(format!(
                "credit amount must be greater than zero, got {}",
                amount
            )));
        }
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            BancoError::InvalidAmount(format!(
                "crediting {} would overflow the balance",
                amount
            ))
        })?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Decrease the balance
    ///
    /// Rejects amounts that are not strictly positive, and amounts that
    /// exceed the current balance. The check and the mutation run against
    /// the same balance snapshot: on failure the balance is untouched.
    pub fn debit(&mut self, amount: Money) -> BancoResult<()> {
        if !amount.is_positive() {
            return Err(BancoError::InvalidAmount(format!(
                "debit amount must be greater than zero, got {}",
                amount
            )));
        }
        if amount > self.balance {
            return Err(BancoError::InsufficientFunds {
                attempted: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the balance outright
    ///
    /// An administrative overwrite, not a credit or debit: there is no
    /// source-of-funds check against the previous balance. Strict
    /// positivity is still enforced.
    pub fn set_balance(&mut self, new_balance: Money) -> BancoResult<()> {
        if !new_balance.is_positive() {
            return Err(BancoError::InvalidAmount(format!(
                "balance must be greater than zero, got {}",
                new_balance
            )));
        }
        self.balance = new_balance;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} {} ({})", id, self.owner, self.balance),
            None => write!(f, "{} ({})", self.owner, self.balance),
        }
    }
}
