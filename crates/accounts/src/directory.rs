use chrono::NaiveDate;

use tally_core::{CustomerId, DomainError, DomainResult};
use tally_ledger::Transaction;

use crate::customer::Customer;

/// The in-memory account directory: every operation on a customer account
/// goes through it.
///
/// Customers are held in insertion order and keyed by their unique `cpf`.
/// The directory enforces key uniqueness on registration and the no-overdraft
/// rule on withdrawal; callers that need atomicity across check-then-act
/// sequences must hold exclusive access for the whole call (the HTTP layer
/// wraps the directory in a `RwLock` for exactly this reason).
#[derive(Debug, Default)]
pub struct AccountDirectory {
    customers: Vec<Customer>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new customer under `cpf`.
    ///
    /// Fails with `DuplicateKey` when the key is already taken; the
    /// directory is unchanged in that case.
    pub fn register(
        &mut self,
        cpf: impl Into<String>,
        name: impl Into<String>,
    ) -> DomainResult<CustomerId> {
        let cpf = cpf.into();
        if self.customers.iter().any(|c| c.cpf == cpf) {
            return Err(DomainError::duplicate_key(cpf));
        }

        let customer = Customer::new(cpf, name);
        let id = customer.id;
        self.customers.push(customer);
        Ok(id)
    }

    /// Resolve a customer by key. The shared guard for every per-customer
    /// operation; a failure here is terminal for the request.
    pub fn lookup(&self, cpf: &str) -> DomainResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.cpf == cpf)
            .ok_or(DomainError::NotFound)
    }

    fn lookup_mut(&mut self, cpf: &str) -> DomainResult<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.cpf == cpf)
            .ok_or(DomainError::NotFound)
    }

    /// Update the customer's display name. Names carry no uniqueness
    /// constraint.
    pub fn rename(&mut self, cpf: &str, name: impl Into<String>) -> DomainResult<()> {
        self.lookup_mut(cpf)?.name = name.into();
        Ok(())
    }

    /// Remove the customer (and transitively their statements).
    ///
    /// Removal is by key identity via an explicit position scan.
    pub fn remove(&mut self, cpf: &str) -> DomainResult<()> {
        let position = self
            .customers
            .iter()
            .position(|c| c.cpf == cpf)
            .ok_or(DomainError::NotFound)?;
        self.customers.remove(position);
        Ok(())
    }

    /// Append a credit entry. Credits are never rejected for amount value;
    /// the amount is trusted as provided.
    pub fn deposit(
        &mut self,
        cpf: &str,
        amount: i64,
        description: Option<String>,
    ) -> DomainResult<()> {
        let customer = self.lookup_mut(cpf)?;
        customer.statements.push(Transaction::credit(amount, description));
        Ok(())
    }

    /// Append a debit entry after checking funds.
    ///
    /// Fails with `InsufficientFunds` when `amount` exceeds the current
    /// balance; the ledger is untouched in that case.
    pub fn withdraw(&mut self, cpf: &str, amount: i64) -> DomainResult<()> {
        let customer = self.lookup_mut(cpf)?;
        if amount > customer.balance() {
            return Err(DomainError::InsufficientFunds);
        }
        customer.statements.push(Transaction::debit(amount));
        Ok(())
    }

    /// Current balance for the customer's ledger.
    pub fn balance(&self, cpf: &str) -> DomainResult<i64> {
        Ok(self.lookup(cpf)?.balance())
    }

    /// All statement entries for the customer, in insertion order.
    pub fn statements(&self, cpf: &str) -> DomainResult<&[Transaction]> {
        Ok(self.lookup(cpf)?.statements.as_slice())
    }

    /// Statement entries whose timestamp falls on the given UTC calendar day.
    pub fn statements_on(&self, cpf: &str, day: NaiveDate) -> DomainResult<Vec<Transaction>> {
        let customer = self.lookup(cpf)?;
        Ok(tally_ledger::on_day(&customer.statements, day)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Insertion-ordered view of every registered customer.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_ledger::TransactionKind;

    #[test]
    fn register_assigns_fresh_id_and_empty_statements() {
        let mut dir = AccountDirectory::new();
        let id = dir.register("111", "Alice").unwrap();

        let customer = dir.lookup("111").unwrap();
        assert_eq!(customer.id, id);
        assert_eq!(customer.name, "Alice");
        assert!(customer.statements.is_empty());
    }

    #[test]
    fn register_rejects_duplicate_key_and_keeps_first_record() {
        let mut dir = AccountDirectory::new();
        dir.register("222", "Bob").unwrap();

        let err = dir.register("222", "Carol").unwrap_err();
        assert_eq!(err, DomainError::duplicate_key("222"));

        // Directory unchanged by the failed call.
        assert_eq!(dir.customers().len(), 1);
        assert_eq!(dir.lookup("222").unwrap().name, "Bob");
    }

    #[test]
    fn lookup_of_unregistered_key_is_not_found() {
        let dir = AccountDirectory::new();
        assert_eq!(dir.lookup("999").unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn guarded_operations_fail_with_not_found_for_unknown_key() {
        let mut dir = AccountDirectory::new();

        assert_eq!(dir.rename("999", "X").unwrap_err(), DomainError::NotFound);
        assert_eq!(dir.remove("999").unwrap_err(), DomainError::NotFound);
        assert_eq!(dir.deposit("999", 1, None).unwrap_err(), DomainError::NotFound);
        assert_eq!(dir.withdraw("999", 1).unwrap_err(), DomainError::NotFound);
        assert_eq!(dir.balance("999").unwrap_err(), DomainError::NotFound);
        assert_eq!(dir.statements("999").unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn rename_updates_name_only() {
        let mut dir = AccountDirectory::new();
        let id = dir.register("111", "Alice").unwrap();

        dir.rename("111", "Alicia").unwrap();

        let customer = dir.lookup("111").unwrap();
        assert_eq!(customer.name, "Alicia");
        assert_eq!(customer.id, id);
        assert_eq!(customer.cpf, "111");
    }

    #[test]
    fn remove_deletes_by_key_identity_and_spares_others() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();
        dir.register("222", "Bob").unwrap();
        dir.register("333", "Carol").unwrap();

        dir.remove("222").unwrap();

        assert_eq!(dir.customers().len(), 2);
        assert_eq!(dir.lookup("222").unwrap_err(), DomainError::NotFound);

        // Remaining customers keep their insertion order.
        let keys: Vec<&str> = dir.customers().iter().map(|c| c.cpf.as_str()).collect();
        assert_eq!(keys, vec!["111", "333"]);
    }

    #[test]
    fn deposit_appends_exactly_one_credit() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();

        dir.deposit("111", 100, Some("salary".to_string())).unwrap();

        let statements = dir.statements("111").unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].kind, TransactionKind::Credit);
        assert_eq!(statements[0].amount, 100);
        assert_eq!(statements[0].description.as_deref(), Some("salary"));
        assert_eq!(dir.balance("111").unwrap(), 100);
    }

    #[test]
    fn deposit_of_zero_is_accepted() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();

        dir.deposit("111", 0, None).unwrap();
        assert_eq!(dir.statements("111").unwrap().len(), 1);
        assert_eq!(dir.balance("111").unwrap(), 0);
    }

    #[test]
    fn withdraw_appends_exactly_one_debit_without_description() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();
        dir.deposit("111", 100, None).unwrap();

        dir.withdraw("111", 40).unwrap();

        let statements = dir.statements("111").unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].kind, TransactionKind::Debit);
        assert_eq!(statements[1].amount, 40);
        assert_eq!(statements[1].description, None);
        assert_eq!(dir.balance("111").unwrap(), 60);
    }

    #[test]
    fn withdraw_of_exact_balance_is_allowed() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();
        dir.deposit("111", 100, None).unwrap();

        dir.withdraw("111", 100).unwrap();
        assert_eq!(dir.balance("111").unwrap(), 0);
    }

    #[test]
    fn overdraft_is_rejected_and_ledger_is_unchanged() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();
        dir.deposit("111", 100, None).unwrap();

        let before = dir.statements("111").unwrap().to_vec();
        let err = dir.withdraw("111", 101).unwrap_err();
        assert_eq!(err, DomainError::InsufficientFunds);

        assert_eq!(dir.statements("111").unwrap(), before.as_slice());
        assert_eq!(dir.balance("111").unwrap(), 100);
    }

    #[test]
    fn deposit_withdraw_sequence_yields_expected_balance() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();

        dir.deposit("111", 100, Some("first".to_string())).unwrap();
        dir.withdraw("111", 40).unwrap();
        assert_eq!(dir.balance("111").unwrap(), 60);

        let err = dir.withdraw("111", 1000).unwrap_err();
        assert_eq!(err, DomainError::InsufficientFunds);
        assert_eq!(dir.balance("111").unwrap(), 60);
    }

    #[test]
    fn statements_on_returns_only_entries_from_that_day() {
        let mut dir = AccountDirectory::new();
        dir.register("111", "Alice").unwrap();
        dir.deposit("111", 10, None).unwrap();
        dir.deposit("111", 20, None).unwrap();

        let today = chrono::Utc::now().date_naive();
        let on_today = dir.statements_on("111", today).unwrap();
        assert_eq!(on_today.len(), 2);
        assert_eq!(on_today[0].amount, 10);
        assert_eq!(on_today[1].amount, 20);

        let other_day = today.pred_opt().unwrap();
        assert!(dir.statements_on("111", other_day).unwrap().is_empty());
    }
}
