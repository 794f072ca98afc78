//! Ledger-entry submission validation
//!
//! Every check runs regardless of earlier failures, so a caller sees all
//! violations of a submission at once instead of one per resubmit cycle.
//! The check order is fixed and determines the order of the messages in
//! an [`Invalid`](ValidationResult::Invalid) result.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::cpf::{is_valid_cpf, CPF_LENGTH};
use crate::types::{EntrySubmission, ValidationResult};

/// One or both required fields are absent or empty
pub const MSG_MISSING_FIELDS: &str = "missing required fields";
/// CPF field does not parse as a number
pub const MSG_CPF_NOT_NUMERIC: &str = "cpf must contain only numeric characters";
/// CPF check digits do not match the computed ones
pub const MSG_CPF_INVALID_CHECK_DIGITS: &str = "invalid cpf check digits";
/// CPF is not exactly 11 digits long
pub const MSG_CPF_WRONG_LENGTH: &str = "cpf must be exactly 11 numeric characters";
/// Amount field does not parse as a number
pub const MSG_AMOUNT_NOT_A_NUMBER: &str = "amount must be a number";
/// Amount falls outside the accepted range
pub const MSG_AMOUNT_OUT_OF_RANGE: &str = "amount must be between -2000.00 and 15000.00";

const AMOUNT_UPPER_BOUND: i64 = 15_000;
const AMOUNT_LOWER_BOUND: i64 = -2_000;

/// Parse a raw field as a decimal number.
///
/// `None` means the text is not a number; this is the tagged parse step the
/// checks below branch on. Surrounding whitespace is tolerated, an empty
/// string is not a number.
pub fn parse_number(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}

/// Validate a single ledger-entry submission.
///
/// Checks run in a fixed order with no short-circuiting:
///
/// 1. both fields must be present and non-empty
/// 2. the CPF must parse as a number
/// 3. for a present, numeric CPF: check digits must match and the length
///    must be exactly 11 (both messages can fire together)
/// 4. the amount must parse as a number and fall within
///    [-2000.00, 15000.00]
///
/// Returns [`ValidationResult::Valid`] when no message accumulated.
pub fn validate_entry(submission: &EntrySubmission) -> ValidationResult {
    let mut messages = Vec::new();

    let cpf = submission
        .cpf
        .as_deref()
        .filter(|value| !value.is_empty());
    let amount = submission
        .amount
        .as_deref()
        .filter(|value| !value.is_empty());

    if cpf.is_none() || amount.is_none() {
        messages.push(MSG_MISSING_FIELDS.to_string());
    }

    let cpf_is_numeric = cpf.is_some_and(|value| parse_number(value).is_some());

    if !cpf_is_numeric {
        messages.push(MSG_CPF_NOT_NUMERIC.to_string());
    }

    if let Some(cpf) = cpf {
        if cpf_is_numeric {
            if !is_valid_cpf(cpf) {
                messages.push(MSG_CPF_INVALID_CHECK_DIGITS.to_string());
            }

            if cpf.len() != CPF_LENGTH {
                messages.push(MSG_CPF_WRONG_LENGTH.to_string());
            }
        }
    }

    match amount.and_then(parse_number) {
        None => messages.push(MSG_AMOUNT_NOT_A_NUMBER.to_string()),
        Some(value) => {
            if value > BigDecimal::from(AMOUNT_UPPER_BOUND)
                || value < BigDecimal::from(AMOUNT_LOWER_BOUND)
            {
                messages.push(MSG_AMOUNT_OUT_OF_RANGE.to_string());
            }
        }
    }

    ValidationResult::from_messages(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let submission = EntrySubmission::new("11144477735", "100.50");
        assert_eq!(validate_entry(&submission), ValidationResult::Valid);
    }

    #[test]
    fn test_negative_amount_within_range_is_valid() {
        let submission = EntrySubmission::new("12345678909", "-2000");
        assert!(validate_entry(&submission).is_valid());
    }

    #[test]
    fn test_boundary_amounts_are_inclusive() {
        assert!(validate_entry(&EntrySubmission::new("11144477735", "15000")).is_valid());
        assert!(validate_entry(&EntrySubmission::new("11144477735", "15000.01"))
            .messages()
            .contains(&MSG_AMOUNT_OUT_OF_RANGE.to_string()));
        assert!(validate_entry(&EntrySubmission::new("11144477735", "-2000.01"))
            .messages()
            .contains(&MSG_AMOUNT_OUT_OF_RANGE.to_string()));
    }

    #[test]
    fn test_empty_fields_report_missing() {
        let submission = EntrySubmission::new("", "");
        let result = validate_entry(&submission);
        assert!(!result.is_valid());
        assert!(result
            .messages()
            .contains(&MSG_MISSING_FIELDS.to_string()));
    }

    #[test]
    fn test_absent_fields_report_missing() {
        let result = validate_entry(&EntrySubmission::default());
        assert!(result.messages().contains(&MSG_MISSING_FIELDS.to_string()));
    }

    #[test]
    fn test_non_numeric_cpf() {
        let submission = EntrySubmission::new("111444777ab", "50");
        let result = validate_entry(&submission);
        assert!(result
            .messages()
            .contains(&MSG_CPF_NOT_NUMERIC.to_string()));
        // Check digits and length are only judged for numeric CPFs
        assert!(!result
            .messages()
            .contains(&MSG_CPF_INVALID_CHECK_DIGITS.to_string()));
        assert!(!result
            .messages()
            .contains(&MSG_CPF_WRONG_LENGTH.to_string()));
    }

    #[test]
    fn test_short_cpf_fires_both_cpf_messages() {
        let submission = EntrySubmission::new("123", "50");
        let messages = validate_entry(&submission).messages().to_vec();
        assert!(messages.contains(&MSG_CPF_INVALID_CHECK_DIGITS.to_string()));
        assert!(messages.contains(&MSG_CPF_WRONG_LENGTH.to_string()));
    }

    #[test]
    fn test_checks_do_not_short_circuit() {
        // A short CPF and an out-of-range amount must both be reported
        let submission = EntrySubmission::new("123", "20000");
        let messages = validate_entry(&submission).messages().to_vec();
        assert!(messages.contains(&MSG_CPF_INVALID_CHECK_DIGITS.to_string()));
        assert!(messages.contains(&MSG_AMOUNT_OUT_OF_RANGE.to_string()));
    }

    #[test]
    fn test_message_order_matches_check_order() {
        let submission = EntrySubmission::new("abc", "oops");
        let result = validate_entry(&submission);
        assert_eq!(
            result.messages(),
            &[
                MSG_CPF_NOT_NUMERIC.to_string(),
                MSG_AMOUNT_NOT_A_NUMBER.to_string(),
            ]
        );
    }

    #[test]
    fn test_non_numeric_amount() {
        let submission = EntrySubmission::new("11144477735", "12x");
        assert!(validate_entry(&submission)
            .messages()
            .contains(&MSG_AMOUNT_NOT_A_NUMBER.to_string()));
    }

    #[test]
    fn test_valid_cpf_with_wrong_check_digits() {
        let submission = EntrySubmission::new("11144477736", "10");
        let messages = validate_entry(&submission).messages().to_vec();
        assert_eq!(messages, vec![MSG_CPF_INVALID_CHECK_DIGITS.to_string()]);
    }

    #[test]
    fn test_zero_amount_is_present_not_missing() {
        let submission = EntrySubmission::new("11144477735", "0");
        assert!(validate_entry(&submission).is_valid());
    }
}
