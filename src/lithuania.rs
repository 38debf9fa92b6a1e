//! Lithuanian personal code (asmens kodas).
//!
//! Same layout, century digit and check digit as the Estonian code; only the
//! table's country differs.

use crate::table::LITHUANIA;
use crate::{CountryValidator, NinError, ParsedIdentifier};

pub static VALIDATOR: CountryValidator = CountryValidator::new(&LITHUANIA);

pub fn is_pattern_valid(value: &str) -> bool {
    VALIDATOR.is_pattern_valid(value)
}

pub fn validate(value: &str) -> bool {
    VALIDATOR.validate(value)
}

pub fn validate_strict(value: &str) -> bool {
    VALIDATOR.validate_strict(value)
}

/// # Errors
/// Returns a [`NinError`] describing the first failing stage.
pub fn parse(value: &str) -> Result<ParsedIdentifier, NinError> {
    VALIDATOR.parse(value)
}
