//! Account statistics - pure queries over a slice of accounts
//!
//! Every function here borrows its input and returns new containers of
//! references into it. Empty input is the "no data" case: map-returning
//! queries give an empty map and scalar queries give `None`.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{lower_id, Account};

/// Split accounts by sex: `true` holds men, `false` holds women
///
/// A key is present only when at least one account of that sex exists.
/// Input order is preserved inside each bucket.
pub fn partition_by_sex(accounts: &[Account]) -> HashMap<bool, Vec<&Account>> {
    let mut partitioned: HashMap<bool, Vec<&Account>> = HashMap::new();
    for account in accounts {
        partitioned
            .entry(account.sex.is_male())
            .or_default()
            .push(account);
    }

    tracing::debug!(
        accounts = accounts.len(),
        buckets = partitioned.len(),
        "Partitioned accounts by sex"
    );
    partitioned
}

/// Group accounts by the part of their email after the first `@`
///
/// Accounts whose email has no `@` are skipped.
pub fn group_by_email_domain(accounts: &[Account]) -> HashMap<&str, Vec<&Account>> {
    let mut grouped: HashMap<&str, Vec<&Account>> = HashMap::new();
    for account in accounts {
        match account.email_domain() {
            Some(domain) => grouped.entry(domain).or_default().push(account),
            None => tracing::trace!(id = account.id, "Skipping account with malformed email"),
        }
    }

    tracing::debug!(
        accounts = accounts.len(),
        domains = grouped.len(),
        "Grouped accounts by email domain"
    );
    grouped
}

/// Accounts ordered by last name, then first name (byte order, stable)
pub fn sort_by_name(accounts: &[Account]) -> Vec<&Account> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
    sorted
}

/// Exact sum of all balances, `None` for an empty slice
///
/// If a running sum leaves the `Decimal` range, the result saturates to
/// `Decimal::MAX` (or `Decimal::MIN` when the overflowing balance is
/// negative) and the remaining balances are not added.
pub fn total_balance(accounts: &[Account]) -> Option<Decimal> {
    if accounts.is_empty() {
        return None;
    }

    let mut total = Decimal::ZERO;
    for account in accounts {
        match total.checked_add(account.balance) {
            Some(sum) => total = sum,
            None => {
                let saturated = if account.balance.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                };
                tracing::warn!(
                    accounts = accounts.len(),
                    id = account.id,
                    %saturated,
                    "Total balance overflowed, saturating"
                );
                return Some(saturated);
            }
        }
    }

    tracing::debug!(accounts = accounts.len(), %total, "Computed total balance");
    Some(total)
}

/// Find the account with the highest balance
///
/// Scans left to right keeping a current best. A strictly higher balance
/// replaces it; an equal balance is handed to `merge(best, candidate)` and
/// the result becomes the new best. `merge` only ever sees two accounts at
/// a time, so with three or more tied accounts the outcome of a
/// non-associative `merge` depends on input order.
///
/// Returns `None` for an empty slice.
pub fn find_richest<'a, F>(accounts: &'a [Account], mut merge: F) -> Option<&'a Account>
where
    F: FnMut(&'a Account, &'a Account) -> &'a Account,
{
    let mut iter = accounts.iter();
    let first = iter.next()?;

    let richest = iter.fold(first, |best, candidate| {
        match candidate.balance.cmp(&best.balance) {
            Ordering::Greater => candidate,
            Ordering::Equal => merge(best, candidate),
            Ordering::Less => best,
        }
    });

    tracing::debug!(
        accounts = accounts.len(),
        id = richest.id,
        balance = %richest.balance,
        "Found richest account"
    );
    Some(richest)
}

/// [`find_richest`] with ties going to the lower id
pub fn find_richest_default(accounts: &[Account]) -> Option<&Account> {
    find_richest(accounts, lower_id)
}
