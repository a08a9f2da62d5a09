//! Account Analytics Core - queries over collections of account records
//!
//! Layout:
//!
//! - **domain**: the `Account` record, tie-break strategies and error types
//! - **services**: pure query functions and the `AccountAnalytics` service
//! - **adapters**: fixture data
//! - **config**: settings file and environment configuration
//!
//! All queries borrow their input and never mutate it. Balances are exact
//! decimals (`rust_decimal::Decimal`).

pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::result::{Error, Result};
pub use domain::{lower_id, lower_last_name, Account, Sex, TieBreakPolicy};
pub use services::{
    find_richest, find_richest_default, group_by_email_domain, partition_by_sex, sort_by_name,
    total_balance, AccountAnalytics,
};
