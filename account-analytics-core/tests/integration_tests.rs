//! Integration tests for account-analytics-core
//!
//! These run every query against the fixture account set and check the
//! cross-query properties (partition sums vs total, richest vs every
//! balance, sort idempotence).
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use account_analytics_core::adapters::fixtures::{conflicting_account, sample_accounts};
use account_analytics_core::config::TIE_BREAK_ENV;
use account_analytics_core::{
    find_richest, find_richest_default, group_by_email_domain, lower_last_name,
    partition_by_sex, sort_by_name, total_balance, Account, AccountAnalytics, Config,
    TieBreakPolicy,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn ids(accounts: &[&Account]) -> Vec<i64> {
    accounts.iter().map(|a| a.id).collect()
}

fn sum(accounts: &[&Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

/// Fixture accounts followed by the account that ties with the richest one
fn accounts_with_balance_collision() -> Vec<Account> {
    let mut accounts = sample_accounts();
    accounts.push(conflicting_account());
    accounts
}

// ============================================================================
// Richest Account Tests
// ============================================================================

#[test]
fn test_finds_richest_among_fixtures() {
    let accounts = sample_accounts();
    let richest = find_richest_default(&accounts).unwrap();
    assert_eq!(richest, &accounts[3]);
    assert_eq!(richest.balance, dec!(700000.30));
}

#[test]
fn test_richest_balance_bounds_every_balance() {
    let accounts = accounts_with_balance_collision();
    for end in 1..=accounts.len() {
        let slice = &accounts[..end];
        let richest = find_richest_default(slice).unwrap();
        assert!(slice.iter().all(|a| richest.balance >= a.balance));
    }
}

#[test]
fn test_richest_among_negative_balances() {
    let accounts = sample_accounts();
    let negative = &accounts[6..9];
    assert_eq!(find_richest_default(negative).unwrap().id, 7);
    assert_eq!(find_richest_default(&negative[..1]).unwrap().id, 6);
}

#[test]
fn test_zero_balance_beats_negative_balances() {
    let accounts = sample_accounts();
    let mut subset: Vec<Account> = accounts[6..9].to_vec();
    subset.push(accounts[9].clone());

    let richest = find_richest_default(&subset).unwrap();
    assert_eq!(richest.id, 9);
    assert_eq!(richest.balance, Decimal::ZERO);
}

#[test]
fn test_collision_resolved_by_default_merge() {
    let accounts = accounts_with_balance_collision();
    let richest = find_richest_default(&accounts).unwrap();
    assert_eq!(richest, &conflicting_account());
}

#[test]
fn test_collision_resolved_by_custom_merge() {
    let accounts = accounts_with_balance_collision();
    let richest = find_richest(&accounts, lower_last_name).unwrap();
    assert_eq!(richest, &conflicting_account());
}

#[test]
fn test_lower_id_wins_tie_with_distinct_ids() {
    let accounts = sample_accounts();
    let mut other = accounts[3].clone();
    other.id = 99;
    let tied = vec![other, accounts[3].clone()];

    assert_eq!(find_richest_default(&tied).unwrap().id, 3);
}

#[test]
fn test_empty_input_has_no_result() {
    assert!(find_richest_default(&[]).is_none());
    assert!(total_balance(&[]).is_none());
}

// ============================================================================
// Partition / Group / Sort Tests
// ============================================================================

#[test]
fn test_partitions_fixtures_by_sex() {
    let accounts = sample_accounts();
    let partitioned = partition_by_sex(&accounts);

    assert_eq!(partitioned.len(), 2);
    assert_eq!(ids(&partitioned[&true]), vec![0, 2, 3, 4, 5, 6]);
    assert_eq!(ids(&partitioned[&false]), vec![1, 7, 8, 9]);
}

#[test]
fn test_partition_sums_match_total() {
    let accounts = sample_accounts();
    let partitioned = partition_by_sex(&accounts);
    let partition_total: Decimal = partitioned.values().map(|bucket| sum(bucket)).sum();

    assert_eq!(Some(partition_total), total_balance(&accounts));
}

#[test]
fn test_groups_fixtures_by_email_domain() {
    let accounts = sample_accounts();
    let grouped = group_by_email_domain(&accounts);

    let expected: HashMap<&str, Vec<i64>> = HashMap::from([
        ("gmail.com", vec![0, 5, 7, 9]),
        ("icloud.com", vec![1, 8]),
        ("yahoo.com", vec![2]),
        ("outlook.com", vec![3]),
        ("hotmail.com", vec![4, 6]),
    ]);
    let actual: HashMap<&str, Vec<i64>> = grouped
        .iter()
        .map(|(domain, group)| (*domain, ids(group)))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_grouping_ignores_corrupted_emails() {
    let mut accounts = sample_accounts();
    let mut corrupted = Account::default();
    corrupted.email = "bademail".to_string();
    accounts.push(corrupted);

    let grouped = group_by_email_domain(&accounts);
    assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), 10);
    assert!(grouped.values().flatten().all(|a| a.email.contains('@')));
}

#[test]
fn test_sorts_fixtures_by_last_then_first_name() {
    let accounts = sample_accounts();
    let sorted = sort_by_name(&accounts);
    assert_eq!(ids(&sorted), vec![5, 9, 2, 6, 0, 8, 1, 4, 3, 7]);
}

#[test]
fn test_sort_is_permutation_and_idempotent() {
    let accounts = sample_accounts();
    let sorted: Vec<Account> = sort_by_name(&accounts).into_iter().cloned().collect();
    assert_eq!(sorted.len(), accounts.len());

    let mut sorted_ids: Vec<i64> = sorted.iter().map(|a| a.id).collect();
    sorted_ids.sort();
    assert_eq!(sorted_ids, (0..10).collect::<Vec<i64>>());

    let resorted: Vec<&Account> = sort_by_name(&sorted);
    assert!(resorted.iter().zip(&sorted).all(|(a, b)| *a == b));
}

// ============================================================================
// Total Balance Tests
// ============================================================================

#[test]
fn test_total_balance_of_fixtures() {
    let accounts = sample_accounts();
    assert_eq!(total_balance(&accounts), Some(dec!(1985001.65)));
}

// ============================================================================
// Service + Configuration Tests
// ============================================================================

#[test]
fn test_service_honors_env_tie_break_override() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"analytics": {"tieBreak": "lower_id"}}"#,
    )
    .unwrap();

    std::env::set_var(TIE_BREAK_ENV, "lower_last_name");
    let overridden = Config::load(dir.path()).unwrap();
    std::env::set_var(TIE_BREAK_ENV, "not-a-policy");
    let invalid = Config::load(dir.path()).unwrap();
    std::env::remove_var(TIE_BREAK_ENV);

    assert_eq!(overridden.tie_break, TieBreakPolicy::LowerLastName);
    assert_eq!(invalid.tie_break, TieBreakPolicy::LowerId);

    let tied = vec![
        sample_accounts()[3].clone(),
        Account::new(99, "Ana", "Alvarez", "ana@outlook.com").with_balance(dec!(700000.30)),
    ];
    let by_name = AccountAnalytics::from_config(&overridden);
    let by_id = AccountAnalytics::from_config(&invalid);
    assert_eq!(by_name.find_richest(&tied).unwrap().id, 99);
    assert_eq!(by_id.find_richest(&tied).unwrap().id, 3);
}

#[test]
fn test_service_queries_match_free_functions() {
    let accounts = sample_accounts();
    let analytics = AccountAnalytics::default();

    assert_eq!(analytics.total_balance(&accounts), total_balance(&accounts));
    assert_eq!(ids(&analytics.sort_by_name(&accounts)), ids(&sort_by_name(&accounts)));
    assert_eq!(
        analytics.partition_by_sex(&accounts).len(),
        partition_by_sex(&accounts).len()
    );
    assert_eq!(
        analytics.group_by_email_domain(&accounts).keys().len(),
        group_by_email_domain(&accounts).keys().len()
    );
    assert_eq!(
        analytics.find_richest(&accounts).map(|a| a.id),
        find_richest_default(&accounts).map(|a| a.id)
    );
}
