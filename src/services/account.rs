//! Account service
//!
//! Business logic for account management. The service is the only component
//! that mutates stored state: every operation loads the account, lets the
//! aggregate validate and apply the change, then persists the result. From
//! the caller's view each operation is atomic: either a valid persisted
//! account comes back, or nothing was stored.

use std::sync::{Mutex, MutexGuard};

use crate::error::{BancoError, BancoResult};
use crate::models::{Account, AccountId, Money};
use crate::storage::AccountStore;

/// Service for account management
pub struct AccountService<'a, S: AccountStore> {
    store: &'a S,
    /// Serializes read-modify-write cycles so two concurrent debits cannot
    /// both pass the insufficient-funds check against a stale balance
    mutation: Mutex<()>,
}

impl<'a, S: AccountStore> AccountService<'a, S> {
    /// Create a new account service over the given store
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            mutation: Mutex::new(()),
        }
    }

    fn mutation_guard(&self) -> BancoResult<MutexGuard<'_, ()>> {
        self.mutation
            .lock()
            .map_err(|e| BancoError::Storage(format!("Failed to acquire mutation lock: {}", e)))
    }

    /// Create and persist a new account
    pub fn create(&self, owner: &str, initial_balance: Money) -> BancoResult<Account> {
        let account = Account::open(owner, initial_balance)?;
        self.store.create(account)
    }

    /// Get an account by id
    pub fn get(&self, id: AccountId) -> BancoResult<Account> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| BancoError::account_not_found(id))
    }

    /// Get all accounts
    pub fn list(&self) -> BancoResult<Vec<Account>> {
        self.store.find_all()
    }

    /// Increase an account's balance and persist the result
    pub fn credit(&self, id: AccountId, amount: Money) -> BancoResult<Account> {
        let _guard = self.mutation_guard()?;

        let mut account = self.get(id)?;
        account.credit(amount)?;
        self.store.save(&account)
    }

    /// Decrease an account's balance and persist the result
    ///
    /// On `InsufficientFunds` the stored balance is untouched.
    pub fn debit(&self, id: AccountId, amount: Money) -> BancoResult<Account> {
        let _guard = self.mutation_guard()?;

        let mut account = self.get(id)?;
        account.debit(amount)?;
        self.store.save(&account)
    }

    /// Overwrite an account's balance and persist the result
    ///
    /// An administrative override: the new balance replaces the old one with
    /// no source-of-funds comparison, so arbitrary jumps are possible. It
    /// still must be strictly positive and on the two-centavo scale.
    pub fn set_balance(&self, id: AccountId, new_balance: Money) -> BancoResult<Account> {
        if !new_balance.is_positive() {
            return Err(BancoError::InvalidAmount(format!(
                "balance must be greater than zero, got {}",
                new_balance
            )));
        }

        let _guard = self.mutation_guard()?;

        let mut account = self.get(id)?;
        account.set_balance(new_balance)?;
        self.store.save(&account)
    }

    /// Delete an account
    ///
    /// Checks existence first, so deleting an absent id reports
    /// `AccountNotFound` instead of silently doing nothing.
    pub fn delete(&self, id: AccountId) -> BancoResult<()> {
        let _guard = self.mutation_guard()?;

        if !self.store.exists(id)? {
            return Err(BancoError::account_not_found(id));
        }
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonAccountStore;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonAccountStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonAccountStore::new(temp_dir.path().join("accounts.json"));
        store.load().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_create_persists_valid_account() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("João", Money::from_cents(100_000)).unwrap();

        assert_eq!(account.owner(), "João");
        assert_eq!(account.balance(), Money::from_cents(100_000));
        assert!(account.is_persisted());
    }

    #[test]
    fn test_create_invalid_persists_nothing() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let result = service.create("João", Money::zero());
        assert!(matches!(
            result,
            Err(BancoError::InvalidInitialBalance(_))
        ));
        assert_eq!(store.count().unwrap(), 0);

        let result = service.create("", Money::from_cents(1000));
        assert!(matches!(
            result,
            Err(BancoError::InvalidInitialBalance(_))
        ));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let created = service.create("Maria", Money::from_cents(2500)).unwrap();
        let found = service.get(created.id().unwrap()).unwrap();

        assert_eq!(found.owner(), created.owner());
        assert_eq!(found.balance(), created.balance());
    }

    #[test]
    fn test_get_unknown_id() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let result = service.get(AccountId::new(99));
        assert!(matches!(result, Err(BancoError::AccountNotFound(_))));
    }

    #[test]
    fn test_list() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        service.create("A", Money::from_cents(1000)).unwrap();
        service.create("B", Money::from_cents(2000)).unwrap();

        let accounts = service.list().unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[test]
    fn test_credit_persists() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("A", Money::from_cents(10_000)).unwrap();
        let id = account.id().unwrap();

        let updated = service.credit(id, Money::from_cents(2500)).unwrap();
        assert_eq!(updated.balance(), Money::from_cents(12_500));

        // Durably committed, not just in the returned copy
        assert_eq!(
            service.get(id).unwrap().balance(),
            Money::from_cents(12_500)
        );
    }

    #[test]
    fn test_debit_persists() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("A", Money::from_cents(10_000)).unwrap();
        let id = account.id().unwrap();

        service.debit(id, Money::from_cents(2500)).unwrap();
        assert_eq!(service.get(id).unwrap().balance(), Money::from_cents(7500));
    }

    #[test]
    fn test_debit_insufficient_leaves_store_unchanged() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("A", Money::from_cents(10_000)).unwrap();
        let id = account.id().unwrap();

        let result = service.debit(id, Money::from_cents(20_000));
        assert!(matches!(result, Err(BancoError::InsufficientFunds { .. })));
        assert_eq!(
            service.get(id).unwrap().balance(),
            Money::from_cents(10_000)
        );
    }

    #[test]
    fn test_sequential_debits_drain_to_zero() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("João", Money::from_cents(100_000)).unwrap();
        let id = account.id().unwrap();

        service.debit(id, Money::from_cents(30_000)).unwrap();
        service.debit(id, Money::from_cents(30_000)).unwrap();
        let drained = service.debit(id, Money::from_cents(40_000)).unwrap();
        assert_eq!(drained.balance(), Money::zero());

        let result = service.debit(id, Money::from_cents(1));
        assert!(matches!(result, Err(BancoError::InsufficientFunds { .. })));
    }

    #[test]
    fn test_set_balance() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("A", Money::from_cents(5000)).unwrap();
        let id = account.id().unwrap();

        let updated = service.set_balance(id, Money::from_cents(20_000)).unwrap();
        assert_eq!(updated.balance(), Money::from_cents(20_000));
        assert_eq!(
            service.get(id).unwrap().balance(),
            Money::from_cents(20_000)
        );
    }

    #[test]
    fn test_set_balance_rejects_non_positive() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("A", Money::from_cents(5000)).unwrap();
        let id = account.id().unwrap();

        assert!(matches!(
            service.set_balance(id, Money::zero()),
            Err(BancoError::InvalidAmount(_))
        ));
        assert!(matches!(
            service.set_balance(id, Money::from_cents(-100)),
            Err(BancoError::InvalidAmount(_))
        ));
        assert_eq!(service.get(id).unwrap().balance(), Money::from_cents(5000));
    }

    #[test]
    fn test_set_balance_unknown_id_leaves_store_unmodified() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        service.create("A", Money::from_cents(5000)).unwrap();

        let result = service.set_balance(AccountId::new(99), Money::from_cents(100));
        assert!(matches!(result, Err(BancoError::AccountNotFound(_))));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create("A", Money::from_cents(1000)).unwrap();
        let id = account.id().unwrap();

        service.delete(id).unwrap();
        assert!(matches!(
            service.get(id),
            Err(BancoError::AccountNotFound(_))
        ));
    }

    #[test]
    fn test_delete_unknown_id() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let result = service.delete(AccountId::new(99));
        assert!(matches!(result, Err(BancoError::AccountNotFound(_))));
    }
}
