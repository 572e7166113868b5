//! Core data models for banco-cli
//!
//! The account aggregate, its identifier, and the exact-decimal money type
//! it carries.

pub mod account;
pub mod ids;
pub mod money;

pub use account::Account;
pub use ids::AccountId;
pub use money::{Money, MoneyParseError};
