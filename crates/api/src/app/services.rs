use std::sync::RwLock;

use chrono::NaiveDate;

use tally_accounts::{AccountDirectory, Customer};
use tally_core::{CustomerId, DomainResult};
use tally_ledger::Transaction;

/// Shared application state: the account directory behind a lock.
///
/// The directory lives for the process lifetime and is injected into the
/// router (no global mutable state). Each method takes the lock for the
/// whole call, so the directory's check-then-act sequences (duplicate-key
/// check before insert, balance check before append) stay atomic under the
/// multi-threaded runtime.
#[derive(Debug, Default)]
pub struct AppServices {
    directory: RwLock<AccountDirectory>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, cpf: String, name: String) -> DomainResult<CustomerId> {
        self.directory.write().unwrap().register(cpf, name)
    }

    /// Guard lookup: key → customer id.
    pub fn resolve(&self, cpf: &str) -> DomainResult<CustomerId> {
        Ok(self.directory.read().unwrap().lookup(cpf)?.id)
    }

    pub fn account(&self, cpf: &str) -> DomainResult<Customer> {
        Ok(self.directory.read().unwrap().lookup(cpf)?.clone())
    }

    pub fn rename(&self, cpf: &str, name: String) -> DomainResult<()> {
        self.directory.write().unwrap().rename(cpf, name)
    }

    pub fn remove(&self, cpf: &str) -> DomainResult<()> {
        self.directory.write().unwrap().remove(cpf)
    }

    pub fn statements(&self, cpf: &str) -> DomainResult<Vec<Transaction>> {
        Ok(self.directory.read().unwrap().statements(cpf)?.to_vec())
    }

    pub fn statements_on(&self, cpf: &str, day: NaiveDate) -> DomainResult<Vec<Transaction>> {
        self.directory.read().unwrap().statements_on(cpf, day)
    }

    pub fn deposit(&self, cpf: &str, amount: i64, description: Option<String>) -> DomainResult<()> {
        self.directory.write().unwrap().deposit(cpf, amount, description)
    }

    pub fn withdraw(&self, cpf: &str, amount: i64) -> DomainResult<()> {
        self.directory.write().unwrap().withdraw(cpf, amount)
    }

    pub fn balance(&self, cpf: &str) -> DomainResult<i64> {
        self.directory.read().unwrap().balance(cpf)
    }
}
