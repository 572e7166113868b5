//! JSON-backed account store
//!
//! Keeps accounts in memory behind an RwLock and flushes the whole file on
//! every mutation, so the on-disk state always reflects the last committed
//! operation. Ids are issued from a monotonic counter that survives
//! restarts via the data file.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BancoError, BancoResult};
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};
use super::AccountStore;

/// Serializable store data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct StoreData {
    next_id: u64,
    accounts: Vec<Account>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            accounts: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    accounts: BTreeMap<AccountId, Account>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            next_id: 1,
            accounts: BTreeMap::new(),
        }
    }
}

/// Account store persisted to accounts.json
pub struct JsonAccountStore {
    path: PathBuf,
    inner: RwLock<Inner>,
}

impl JsonAccountStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> BancoResult<()> {
        let file_data: StoreData = read_json(&self.path)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        inner.next_id = file_data.next_id.max(1);
        inner.accounts.clear();
        for account in file_data.accounts {
            // Records without an id never made it through create; skip them
            if let Some(id) = account.id() {
                inner.accounts.insert(id, account);
            }
        }

        Ok(())
    }

    /// Count stored accounts
    pub fn count(&self) -> BancoResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.accounts.len())
    }

    fn persist(&self, inner: &Inner) -> BancoResult<()> {
        let file_data = StoreData {
            next_id: inner.next_id,
            accounts: inner.accounts.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }
}

impl AccountStore for JsonAccountStore {
    fn create(&self, mut account: Account) -> BancoResult<Account> {
        if account.is_persisted() {
            return Err(BancoError::Storage(
                "Account is already persisted; use save".into(),
            ));
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = AccountId::new(inner.next_id);
        inner.next_id += 1;
        account.assign_id(id);
        inner.accounts.insert(id, account.clone());

        self.persist(&inner)?;
        Ok(account)
    }

    fn find_by_id(&self, id: AccountId) -> BancoResult<Option<Account>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.accounts.get(&id).cloned())
    }

    fn find_all(&self) -> BancoResult<Vec<Account>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.accounts.values().cloned().collect())
    }

    fn exists(&self, id: AccountId) -> BancoResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.accounts.contains_key(&id))
    }

    fn save(&self, account: &Account) -> BancoResult<Account> {
        let id = account.id().ok_or_else(|| {
            BancoError::Storage("Cannot save an account without an id; use create".into())
        })?;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        inner.accounts.insert(id, account.clone());

        self.persist(&inner)?;
        Ok(account.clone())
    }

    fn delete(&self, id: AccountId) -> BancoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        inner.accounts.remove(&id);

        self.persist(&inner)
    }
}
