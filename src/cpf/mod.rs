//! CPF check-digit computation and validation

pub mod checksum;
pub mod validator;

pub use checksum::check_digits;
pub use validator::{is_valid_cpf, CPF_LENGTH};
