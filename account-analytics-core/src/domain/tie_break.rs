//! Tie-break strategies for accounts with equal balances
//!
//! A tie-break (merge) function takes two accounts that share a balance and
//! returns the one that wins. Both built-in strategies favor `right` unless
//! `left` is strictly lower on their key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::result::Error;

/// Keep the account with the lower id
pub fn lower_id<'a>(left: &'a Account, right: &'a Account) -> &'a Account {
    if left.id < right.id {
        left
    } else {
        right
    }
}

/// Keep the account whose last name sorts first in byte order
pub fn lower_last_name<'a>(left: &'a Account, right: &'a Account) -> &'a Account {
    if left.last_name < right.last_name {
        left
    } else {
        right
    }
}

/// Named tie-break strategy, selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakPolicy {
    #[default]
    LowerId,
    LowerLastName,
}

impl TieBreakPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreakPolicy::LowerId => "lower_id",
            TieBreakPolicy::LowerLastName => "lower_last_name",
        }
    }

    /// Resolve a tie between two accounts with this policy
    pub fn resolve<'a>(&self, left: &'a Account, right: &'a Account) -> &'a Account {
        match self {
            TieBreakPolicy::LowerId => lower_id(left, right),
            TieBreakPolicy::LowerLastName => lower_last_name(left, right),
        }
    }
}

impl fmt::Display for TieBreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreakPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower_id" => Ok(TieBreakPolicy::LowerId),
            "lower_last_name" => Ok(TieBreakPolicy::LowerLastName),
            other => Err(Error::config(format!("unknown tie-break policy: {}", other))),
        }
    }
}
