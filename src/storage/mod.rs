//! Storage layer for banco-cli
//!
//! Defines the store the service consumes and provides the JSON file
//! implementation, with atomic writes and automatic directory creation.

pub mod accounts;
pub mod file_io;

pub use accounts::JsonAccountStore;
pub use file_io::{read_json, write_json_atomic};

use crate::error::BancoResult;
use crate::models::{Account, AccountId};

/// Durable keyed storage for accounts
///
/// The service takes the store as an explicit dependency, so tests can
/// substitute an in-memory fake. Any backing works as long as ids stay
/// unique and `save` replaces the record at the same id.
pub trait AccountStore {
    /// Persist a new, unsaved account; assigns the next unique id and
    /// returns the account in its persisted state
    fn create(&self, account: Account) -> BancoResult<Account>;

    /// Look up an account by id
    fn find_by_id(&self, id: AccountId) -> BancoResult<Option<Account>>;

    /// Snapshot of all persisted accounts at call time
    fn find_all(&self) -> BancoResult<Vec<Account>>;

    /// Check whether an account exists
    fn exists(&self, id: AccountId) -> BancoResult<bool>;

    /// Upsert: overwrite the record at the account's id, never append a
    /// duplicate. The account must already be persisted.
    fn save(&self, account: &Account) -> BancoResult<Account>;

    /// Remove the record; checking existence first is the caller's concern
    fn delete(&self, id: AccountId) -> BancoResult<()>;
}
