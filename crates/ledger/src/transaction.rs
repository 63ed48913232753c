use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a statement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// One statement entry (immutable once appended).
///
/// Amounts are integer minor units (e.g. cents); the balance path never
/// touches floating point. Deposits carry the caller-supplied description,
/// withdrawals never populate one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Credit entry stamped with the current time.
    pub fn credit(amount: i64, description: Option<String>) -> Self {
        Self {
            kind: TransactionKind::Credit,
            amount,
            description,
            created_at: Utc::now(),
        }
    }

    /// Debit entry stamped with the current time. Debits carry no description.
    pub fn debit(amount: i64) -> Self {
        Self {
            kind: TransactionKind::Debit,
            amount,
            description: None,
            created_at: Utc::now(),
        }
    }
}

/// Balance of a statement sequence: left fold starting at 0, adding credit
/// amounts and subtracting debit amounts in insertion order.
pub fn balance(entries: &[Transaction]) -> i64 {
    entries.iter().fold(0, |acc, entry| match entry.kind {
        TransactionKind::Credit => acc + entry.amount,
        TransactionKind::Debit => acc - entry.amount,
    })
}

/// Entries whose `created_at` falls on the given UTC calendar day,
/// in insertion order.
///
/// Day equality is evaluated against the UTC calendar, not any local zone.
pub fn on_day(entries: &[Transaction], day: NaiveDate) -> Vec<&Transaction> {
    entries
        .iter()
        .filter(|entry| entry.created_at.date_naive() == day)
        .collect()
}
