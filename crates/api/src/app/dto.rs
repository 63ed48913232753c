use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------
//
// Amounts are integer minor units (cents) end to end; see `tally-ledger`.

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: i64,
}

/// Query for `GET /statement/date`. Kept as a string so a malformed date can
/// be answered with the API's own validation error shape.
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: String,
}
