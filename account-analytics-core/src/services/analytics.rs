//! Analytics service - account queries with a configured tie-break policy

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::statistics;
use crate::config::Config;
use crate::domain::{Account, TieBreakPolicy};

/// Stateless query service over account slices
///
/// Holds only the tie-break policy used by [`AccountAnalytics::find_richest`];
/// every other query is delegated unchanged to [`statistics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountAnalytics {
    tie_break: TieBreakPolicy,
}

impl AccountAnalytics {
    pub fn new(tie_break: TieBreakPolicy) -> Self {
        Self { tie_break }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tie_break)
    }

    pub fn tie_break(&self) -> TieBreakPolicy {
        self.tie_break
    }

    pub fn partition_by_sex<'a>(&self, accounts: &'a [Account]) -> HashMap<bool, Vec<&'a Account>> {
        statistics::partition_by_sex(accounts)
    }

    pub fn group_by_email_domain<'a>(
        &self,
        accounts: &'a [Account],
    ) -> HashMap<&'a str, Vec<&'a Account>> {
        statistics::group_by_email_domain(accounts)
    }

    pub fn sort_by_name<'a>(&self, accounts: &'a [Account]) -> Vec<&'a Account> {
        statistics::sort_by_name(accounts)
    }

    pub fn total_balance(&self, accounts: &[Account]) -> Option<Decimal> {
        statistics::total_balance(accounts)
    }

    /// Richest account, ties resolved by the configured policy
    pub fn find_richest<'a>(&self, accounts: &'a [Account]) -> Option<&'a Account> {
        let policy = self.tie_break;
        statistics::find_richest(accounts, |left, right| policy.resolve(left, right))
    }

    /// Richest account, ties resolved by a caller-supplied merge function
    pub fn find_richest_with<'a, F>(&self, accounts: &'a [Account], merge: F) -> Option<&'a Account>
    where
        F: FnMut(&'a Account, &'a Account) -> &'a Account,
    {
        statistics::find_richest(accounts, merge)
    }
}
