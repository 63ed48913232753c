use tally_core::CustomerId;

/// Resolved customer identity for a guarded request.
///
/// Inserted by the account guard middleware after a successful directory
/// lookup; present for all cpf-guarded routes. Handlers re-resolve through
/// the directory inside their own lock scope, so the record referenced here
/// may have been removed in the window between guard and handler — handlers
/// surface `NotFound` themselves in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContext {
    customer_id: CustomerId,
    cpf: String,
}

impl CustomerContext {
    pub fn new(customer_id: CustomerId, cpf: String) -> Self {
        Self { customer_id, cpf }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }
}
