//! Account storage and management

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::number::generate_unique;
use super::types::{Account, AccountUpdate, NewAccount};
use super::validation::{
    validate_age, validate_amount, validate_mobile_number, validate_name, validate_pin,
    ValidationError,
};
use crate::storage::{Storage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum AccountStoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("No account found with provided credentials.")]
    AccountNotFound,
    #[error("Insufficient balance: requested {requested}, available {available}.")]
    InsufficientFunds { requested: Decimal, available: Decimal },
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Owns every account record and writes the full collection back to
/// storage after each mutation.
///
/// Records are only reachable through an (account number, pin) pair. A
/// wrong pin and an unknown account number both yield
/// [`AccountStoreError::AccountNotFound`].
pub struct AccountStore<S: Storage> {
    accounts: Vec<Account>,
    storage: S,
}

impl<S: Storage> AccountStore<S> {
    /// Load the collection from storage.
    ///
    /// Unreadable storage is not fatal: the store starts empty and the
    /// failure is logged.
    pub fn open(storage: S) -> Self {
        let accounts = match storage.load() {
            Ok(Some(accounts)) => {
                debug!("Loaded {} account(s)", accounts.len());
                accounts
            }
            Ok(None) => {
                info!("No account data found. It will be created on first change.");
                Vec::new()
            }
            Err(e) => {
                warn!("Error loading account data: {}. Starting empty.", e);
                Vec::new()
            }
        };
        Self { accounts, storage }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Create a new account with a fresh account number and zero balance
    pub fn create_account(&mut self, new: NewAccount) -> Result<Account, AccountStoreError> {
        let name = validate_name(&new.name)?.to_string();
        validate_age(new.age)?;
        validate_pin(&new.pin)?;
        validate_mobile_number(&new.mobile_number)?;

        let account_number = generate_unique(&mut rand::thread_rng(), |candidate| {
            self.accounts.iter().any(|a| a.account_number == candidate)
        });

        let account = Account {
            name,
            age: new.age,
            address: new.address.trim().to_string(),
            mobile_number: new.mobile_number,
            guardian_name: new.guardian_name.trim().to_string(),
            pin: new.pin,
            account_number,
            balance: Decimal::ZERO,
        };

        let mut staged = self.accounts.clone();
        staged.push(account.clone());
        self.commit(staged)?;

        info!("Created account {}", account.account_number);
        Ok(account)
    }

    /// Add funds. Returns the new balance.
    pub fn deposit(
        &mut self,
        account_number: &str,
        pin: &str,
        amount: Decimal,
    ) -> Result<Decimal, AccountStoreError> {
        validate_amount(amount)?;
        let idx = self.position(account_number, pin)?;

        let mut staged = self.accounts.clone();
        staged[idx].balance += amount;
        let balance = staged[idx].balance;
        self.commit(staged)?;

        debug!("Deposited {} into {}", amount, account_number);
        Ok(balance)
    }

    /// Remove funds. Returns the new balance.
    pub fn withdraw(
        &mut self,
        account_number: &str,
        pin: &str,
        amount: Decimal,
    ) -> Result<Decimal, AccountStoreError> {
        validate_amount(amount)?;
        let idx = self.position(account_number, pin)?;

        let available = self.accounts[idx].balance;
        if amount > available {
            return Err(AccountStoreError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        let mut staged = self.accounts.clone();
        staged[idx].balance = available - amount;
        let balance = staged[idx].balance;
        self.commit(staged)?;

        debug!("Withdrew {} from {}", amount, account_number);
        Ok(balance)
    }

    /// Snapshot of one record
    pub fn get_details(&self, account_number: &str, pin: &str) -> Result<Account, AccountStoreError> {
        let idx = self.position(account_number, pin)?;
        Ok(self.accounts[idx].clone())
    }

    /// Apply the provided profile fields.
    ///
    /// Every provided field is checked before any is written, so a
    /// rejected update leaves the record as it was.
    pub fn update_details(
        &mut self,
        account_number: &str,
        pin: &str,
        update: AccountUpdate,
    ) -> Result<Account, AccountStoreError> {
        let idx = self.position(account_number, pin)?;

        let name = update.name.as_deref().map(validate_name).transpose()?;
        if let Some(mobile_number) = &update.mobile_number {
            validate_mobile_number(mobile_number)?;
        }
        if let Some(new_pin) = &update.pin {
            validate_pin(new_pin)?;
        }

        let mut staged = self.accounts.clone();
        let account = &mut staged[idx];
        if let Some(name) = name {
            account.name = name.to_string();
        }
        if let Some(address) = &update.address {
            account.address = address.trim().to_string();
        }
        if let Some(mobile_number) = update.mobile_number {
            account.mobile_number = mobile_number;
        }
        if let Some(guardian_name) = &update.guardian_name {
            account.guardian_name = guardian_name.trim().to_string();
        }
        if let Some(new_pin) = update.pin {
            account.pin = new_pin;
        }
        let updated = account.clone();
        self.commit(staged)?;

        info!("Updated details for {}", account_number);
        Ok(updated)
    }

    /// Remove an account permanently
    pub fn delete_account(&mut self, account_number: &str, pin: &str) -> Result<(), AccountStoreError> {
        let idx = self.position(account_number, pin)?;

        let mut staged = self.accounts.clone();
        staged.remove(idx);
        self.commit(staged)?;

        info!("Deleted account {}", account_number);
        Ok(())
    }

    fn position(&self, account_number: &str, pin: &str) -> Result<usize, AccountStoreError> {
        self.accounts
            .iter()
            .position(|a| a.matches(account_number, pin))
            .ok_or(AccountStoreError::AccountNotFound)
    }

    // In-memory state only moves forward once the write succeeded.
    fn commit(&mut self, staged: Vec<Account>) -> Result<(), AccountStoreError> {
        self.storage.save(&staged)?;
        self.accounts = staged;
        Ok(())
    }
}
