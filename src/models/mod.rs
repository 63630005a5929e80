//! Core data models for Pocketbook
//!
//! Plain values shared by every layer: transaction ids, money amounts, and
//! the transaction record itself.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{month_from_date, Transaction};
