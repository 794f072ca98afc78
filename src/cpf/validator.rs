//! CPF string validation against the check-digit algorithm

use crate::cpf::checksum::{check_digits, PREFIX_LENGTH};

/// A CPF is a fixed-width string of exactly 11 decimal digits
pub const CPF_LENGTH: usize = 11;

const FIRST_CHECK_DIGIT_INDEX: usize = 9;
const SECOND_CHECK_DIGIT_INDEX: usize = 10;

/// Validate a CPF string against its two check digits.
///
/// Returns false unless the input is exactly 11 ASCII digits whose last two
/// characters match the digits computed from the first nine. Leading zeros
/// are significant; the string is never parsed as a number.
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != CPF_LENGTH || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u8> = cpf.bytes().map(|b| b - b'0').collect();
    let mut prefix = [0u8; PREFIX_LENGTH];
    prefix.copy_from_slice(&digits[..PREFIX_LENGTH]);

    let (first, second) = check_digits(&prefix);

    digits[FIRST_CHECK_DIGIT_INDEX] == first && digits[SECOND_CHECK_DIGIT_INDEX] == second
}
