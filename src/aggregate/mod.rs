//! Per-account aggregation of ledger entries

use std::collections::HashMap;

use crate::types::{AccountAggregate, LedgerEntry};

/// Fold an ordered entry sequence into per-CPF aggregates.
///
/// Grouping keys on exact CPF string equality: two entries belong to the
/// same account iff their CPF strings are character-identical. The output
/// preserves first-appearance order; a side index keeps the per-entry
/// lookup O(1) amortized. An empty input yields an empty vec.
///
/// The sum of `total_amount` over all aggregates equals the sum of all
/// input amounts.
pub fn aggregate_by_cpf(entries: &[LedgerEntry]) -> Vec<AccountAggregate> {
    let mut aggregates: Vec<AccountAggregate> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match positions.get(entry.cpf.as_str()) {
            Some(&position) => {
                let aggregate = &mut aggregates[position];
                aggregate.total_amount += &entry.amount;
                aggregate.transaction_count += 1;
            }
            None => {
                positions.insert(entry.cpf.clone(), aggregates.len());
                aggregates.push(AccountAggregate {
                    cpf: entry.cpf.clone(),
                    total_amount: entry.amount.clone(),
                    transaction_count: 1,
                });
            }
        }
    }

    aggregates
}
