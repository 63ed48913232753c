use serde::{Deserialize, Serialize};

use tally_core::CustomerId;
use tally_ledger::Transaction;

/// A registered customer and their statement history.
///
/// The `cpf` key is caller-supplied, unique across the directory, and
/// immutable after registration. `statements` is append-only; entries are
/// never mutated or removed individually, only the whole customer can be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub cpf: String,
    pub name: String,
    pub statements: Vec<Transaction>,
}

impl Customer {
    /// Fresh customer with an empty statement history.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            cpf: cpf.into(),
            name: name.into(),
            statements: Vec::new(),
        }
    }

    /// Current balance of this customer's ledger.
    pub fn balance(&self) -> i64 {
        tally_ledger::balance(&self.statements)
    }
}
