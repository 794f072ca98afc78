//! Ranking queries over the per-account aggregates
//!
//! Every query recomputes from the entry slice it is given; nothing is
//! cached between calls, so repeated calls on the same input are
//! idempotent. All sorts are stable: tied amounts keep first-appearance
//! order, which keeps the output deterministic.

use bigdecimal::BigDecimal;

use crate::aggregate::aggregate_by_cpf;
use crate::types::{AccountBalance, LedgerEntry};

/// Maximum number of accounts returned by the top-N queries
pub const RANKING_LIMIT: usize = 3;

/// Current balance of every account, in first-appearance order.
pub fn balances_by_account(entries: &[LedgerEntry]) -> Vec<AccountBalance> {
    aggregate_by_cpf(entries)
        .into_iter()
        .map(|aggregate| AccountBalance::new(aggregate.cpf, aggregate.total_amount))
        .collect()
}

/// Smallest and largest entry recorded for one account.
///
/// Returns an empty vec when the account has no entries. A single entry
/// collapses min and max into two identical projections. Otherwise the
/// account's entries are sorted ascending by amount (stable, so equal
/// amounts keep their original relative order) and the two extremes are
/// returned as `[min, max]`.
pub fn min_max_for_account(cpf: &str, entries: &[LedgerEntry]) -> Vec<AccountBalance> {
    let mut account_entries: Vec<&LedgerEntry> =
        entries.iter().filter(|entry| entry.cpf == cpf).collect();

    if account_entries.is_empty() {
        return Vec::new();
    }

    if let [only] = account_entries.as_slice() {
        return vec![AccountBalance::from(*only), AccountBalance::from(*only)];
    }

    account_entries.sort_by(|a, b| a.amount.cmp(&b.amount));
    let min = account_entries[0];
    let max = account_entries[account_entries.len() - 1];
    vec![AccountBalance::from(min), AccountBalance::from(max)]
}

/// The up-to-three accounts with the highest balances, descending.
///
/// Fewer than three accounts is a truncation, not an error.
pub fn top_balances(entries: &[LedgerEntry]) -> Vec<AccountBalance> {
    let mut balances = balances_by_account(entries);
    balances.sort_by(|a, b| b.amount.cmp(&a.amount));
    balances.truncate(RANKING_LIMIT);
    balances
}

/// The up-to-three accounts with the highest average transaction value,
/// descending.
pub fn top_averages(entries: &[LedgerEntry]) -> Vec<AccountBalance> {
    let mut averages: Vec<AccountBalance> = aggregate_by_cpf(entries)
        .into_iter()
        .map(|aggregate| {
            let average = &aggregate.total_amount / BigDecimal::from(aggregate.transaction_count);
            AccountBalance::new(aggregate.cpf, average)
        })
        .collect();
    averages.sort_by(|a, b| b.amount.cmp(&a.amount));
    averages.truncate(RANKING_LIMIT);
    averages
}
