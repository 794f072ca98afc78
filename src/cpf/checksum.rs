//! Weighted-checksum computation for CPF check digits
//!
//! A CPF is 9 base digits followed by 2 check digits. Each check digit is
//! a weighted sum of the digits before it, reduced modulo 11:
//!
//! - First digit: weights 10 down to 2 over the 9 base digits.
//! - Second digit: weights 11 down to 2 over the 9 base digits plus the
//!   first check digit.
//!
//! In both passes, a remainder below 2 yields digit 0; otherwise the digit
//! is 11 minus the remainder.

/// Number of base digits preceding the check digits
pub const PREFIX_LENGTH: usize = 9;

const FIRST_DIGIT_STARTING_WEIGHT: u32 = 10;
const SECOND_DIGIT_STARTING_WEIGHT: u32 = 11;

/// Compute both check digits for a 9-digit CPF prefix.
///
/// Digits are values 0..=9; the caller guarantees well-formed input, so
/// there is no failure path. Deterministic and side-effect free.
pub fn check_digits(first_nine: &[u8; PREFIX_LENGTH]) -> (u8, u8) {
    let first = weighted_check_digit(first_nine, FIRST_DIGIT_STARTING_WEIGHT);

    let mut with_first_digit = [0u8; PREFIX_LENGTH + 1];
    with_first_digit[..PREFIX_LENGTH].copy_from_slice(first_nine);
    with_first_digit[PREFIX_LENGTH] = first;
    let second = weighted_check_digit(&with_first_digit, SECOND_DIGIT_STARTING_WEIGHT);

    (first, second)
}

/// One checksum pass: descending weights from `starting_weight`, mod 11,
/// remainder < 2 collapses to 0.
fn weighted_check_digit(digits: &[u8], starting_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| (starting_weight - index as u32) * u32::from(digit))
        .sum();

    let remainder = sum % 11;

    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}
