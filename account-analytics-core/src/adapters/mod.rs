//! Adapters - concrete data sources
//!
//! Only the in-memory fixture set lives here; the crate itself never loads
//! or persists accounts.

pub mod fixtures;
