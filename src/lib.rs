//! # CPF Ledger Core
//!
//! Validation and per-account analytics for financial ledger entries keyed
//! by CPF, the Brazilian individual taxpayer ID.
//!
//! ## Features
//!
//! - **CPF validation**: the two-pass weighted-checksum check-digit
//!   algorithm over 11-digit taxpayer IDs
//! - **Entry validation**: all violations of a submission reported at once,
//!   never one per resubmit cycle
//! - **Account aggregation**: a single fold of the entry sequence into
//!   per-CPF totals and transaction counts
//! - **Ranking queries**: balances per account, min/max entry for an
//!   account, top-3 balances, top-3 average transaction values
//!
//! The crate performs no I/O and keeps no state between calls; sourcing,
//! storing, and presenting entries belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpf_ledger_core::{
//!     top_balances, validate_entry, EntrySubmission, LedgerEntry,
//! };
//! use bigdecimal::BigDecimal;
//!
//! let submission = EntrySubmission::new("11144477735", "100.50");
//! assert!(validate_entry(&submission).is_valid());
//!
//! let entries = vec![LedgerEntry::new("11144477735", BigDecimal::from(100))];
//! let top = top_balances(&entries);
//! assert_eq!(top.len(), 1);
//! ```

pub mod aggregate;
pub mod cpf;
pub mod rankings;
pub mod types;
pub mod validation;

// Re-export commonly used types and operations
pub use aggregate::aggregate_by_cpf;
pub use cpf::{check_digits, is_valid_cpf, CPF_LENGTH};
pub use rankings::{
    balances_by_account, min_max_for_account, top_averages, top_balances, RANKING_LIMIT,
};
pub use types::*;
pub use validation::validate_entry;
