//! Business logic layer

pub mod account;

pub use account::AccountService;
