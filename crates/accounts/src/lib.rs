//! Accounts domain module (customer records and the account directory).
//!
//! This crate contains the business rules for customer accounts,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod customer;
pub mod directory;

pub use customer::Customer;
pub use directory::AccountDirectory;
