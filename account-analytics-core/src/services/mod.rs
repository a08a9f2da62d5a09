//! Service layer - account queries
//!
//! `statistics` holds the pure query functions; `AccountAnalytics` wraps
//! them with a configured tie-break policy.

mod analytics;
pub mod statistics;

pub use analytics::AccountAnalytics;
pub use statistics::{
    find_richest, find_richest_default, group_by_email_domain, partition_by_sex, sort_by_name,
    total_balance,
};
