//! Core types and data structures for the ledger system

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::validation::{parse_number, validate_entry};

/// Raw ledger-entry submission as received from a caller.
///
/// Both fields arrive as untyped text and may be missing entirely; this is
/// the input to [`validate_entry`](crate::validation::validate_entry). A
/// field that is present but empty counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySubmission {
    /// Taxpayer ID as submitted, digits expected but not guaranteed
    pub cpf: Option<String>,
    /// Amount as submitted, decimal text expected but not guaranteed
    pub amount: Option<String>,
}

impl EntrySubmission {
    /// Create a submission with both fields present
    pub fn new(cpf: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
            amount: Some(amount.into()),
        }
    }
}

/// A validated ledger entry tied to one account (CPF).
///
/// Immutable once created; the aggregation and ranking queries never
/// mutate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// 11-digit taxpayer ID identifying the account
    pub cpf: String,
    /// Signed transaction amount
    pub amount: BigDecimal,
}

impl LedgerEntry {
    /// Create a new ledger entry
    pub fn new(cpf: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            cpf: cpf.into(),
            amount,
        }
    }
}

impl TryFrom<EntrySubmission> for LedgerEntry {
    type Error = LedgerError;

    /// Validate a raw submission and convert it into a typed entry.
    ///
    /// Fails with [`LedgerError::InvalidEntry`] carrying every violated
    /// rule, in the order the validator reports them.
    fn try_from(submission: EntrySubmission) -> LedgerResult<Self> {
        match validate_entry(&submission) {
            ValidationResult::Invalid(messages) => Err(LedgerError::InvalidEntry(messages)),
            ValidationResult::Valid => {
                // Validation guarantees both fields are present and parseable.
                let cpf = submission.cpf.unwrap_or_default();
                let amount = submission
                    .amount
                    .as_deref()
                    .and_then(parse_number)
                    .unwrap_or_default();
                Ok(LedgerEntry::new(cpf, amount))
            }
        }
    }
}

/// Derived per-account balance projection returned by the ranking queries.
///
/// Recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Taxpayer ID identifying the account
    pub cpf: String,
    /// Projected amount (total, extreme, or average depending on the query)
    pub amount: BigDecimal,
}

impl AccountBalance {
    /// Create a new balance projection
    pub fn new(cpf: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            cpf: cpf.into(),
            amount,
        }
    }
}

impl From<&LedgerEntry> for AccountBalance {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            cpf: entry.cpf.clone(),
            amount: entry.amount.clone(),
        }
    }
}

/// Accumulated total and transaction count for one account.
///
/// Produced by [`aggregate_by_cpf`](crate::aggregate::aggregate_by_cpf)
/// during a single fold over the entry sequence; the ranking queries
/// re-derive it per call rather than caching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAggregate {
    /// Taxpayer ID identifying the account
    pub cpf: String,
    /// Sum of all entry amounts for this account
    pub total_amount: BigDecimal,
    /// Number of entries folded into the total, always at least 1
    pub transaction_count: u64,
}

/// Outcome of validating one [`EntrySubmission`].
///
/// `Invalid` always carries at least one message; results are built through
/// [`ValidationResult::from_messages`], so an `Invalid` with an empty list
/// is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// Every check passed
    Valid,
    /// One or more checks failed; messages are in check order
    Invalid(Vec<String>),
}

impl ValidationResult {
    /// Build a result from accumulated messages: empty means valid
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(messages)
        }
    }

    /// Whether the submission passed every check
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The accumulated messages, empty when the result is `Valid`
    pub fn messages(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(messages) => messages,
        }
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid entry: {}", .0.join("; "))]
    InvalidEntry(Vec<String>),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
