use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::account::Account;
use crate::types::balance::Balance;
use crate::types::ids::{AccountId, UserId};

/// Authoritative in-process store for accounts and balances.
///
/// Invariant: `balances` holds a key iff `accounts` holds it, and every
/// account id appears in exactly one user's index list (the one matching the
/// account's `user_id`). Callers serialize access through a single
/// `RwLock<AccountLedger>`; the lock is never held across downstream calls.
pub struct AccountLedger {
    accounts: HashMap<AccountId, Account>,
    balances: HashMap<AccountId, Balance>,
    by_user: HashMap<UserId, Vec<AccountId>>,
    next_seq: u64,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self::with_sequence(1)
    }

    /// Start the id sequence at an explicit value. Ids are monotonic and
    /// never reused within a process lifetime.
    pub fn with_sequence(start: u64) -> Self {
        AccountLedger {
            accounts: HashMap::new(),
            balances: HashMap::new(),
            by_user: HashMap::new(),
            next_seq: start,
        }
    }

    /// Open an account for a user. Infallible: id allocation and map inserts
    /// cannot conflict since the sequence never repeats.
    pub fn create_account(&mut self, user_id: UserId, account_type: &str) -> Account {
        let id = AccountId::from_sequence(self.next_seq);
        self.next_seq += 1;

        let account = Account::new(id.clone(), user_id.clone(), account_type);
        self.accounts.insert(id.clone(), account.clone());
        self.balances.insert(id.clone(), Balance::zero());
        self.by_user.entry(user_id).or_default().push(id);

        account
    }

    pub fn get_account(&self, id: &AccountId) -> Result<&Account> {
        self.accounts
            .get(id)
            .ok_or_else(|| Error::AccountNotFound(id.clone()))
    }

    /// Accounts for a user in creation order. Unknown users get an empty
    /// list, not an error.
    pub fn list_accounts(&self, user_id: &UserId) -> Vec<Account> {
        self.by_user
            .get(user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.accounts.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Apply a signed delta to an account's balance and return the new
    /// value. No floor: negative results are valid.
    pub fn credit(&mut self, id: &AccountId, amount: Balance) -> Result<Balance> {
        let balance = self
            .balances
            .get_mut(id)
            .ok_or_else(|| Error::AccountNotFound(id.clone()))?;

        *balance = *balance + amount;
        Ok(*balance)
    }

    pub fn balance(&self, id: &AccountId) -> Result<Balance> {
        self.balances
            .get(id)
            .copied()
            .ok_or_else(|| Error::AccountNotFound(id.clone()))
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}
