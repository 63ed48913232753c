//! Ledger module (per-customer statement entries and balance).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod transaction;

pub use transaction::{Transaction, TransactionKind, balance, on_day};
