//! Estonian personal identification code (isikukood).
//!
//! Eleven digits, `GYYMMDDSSSC`. The first digit gives sex and century
//! (1–2: 1800s, 3–4: 1900s, 5–6: 2000s, 7–8: 2100s), followed by the birth
//! date, a three-digit serial and a check digit. Lithuania uses the same
//! scheme, see [`crate::lithuania`].

use crate::table::ESTONIA;
use crate::{CountryValidator, NinError, ParsedIdentifier};

pub static VALIDATOR: CountryValidator = CountryValidator::new(&ESTONIA);

pub fn is_pattern_valid(value: &str) -> bool {
    VALIDATOR.is_pattern_valid(value)
}

/// Shape and date ranges. The check digit is not enforced.
pub fn validate(value: &str) -> bool {
    VALIDATOR.validate(value)
}

/// Shape, calendar date and the two-round mod 11 check digit.
pub fn validate_strict(value: &str) -> bool {
    VALIDATOR.validate_strict(value)
}

/// # Errors
/// Returns a [`NinError`] describing the first failing stage.
pub fn parse(value: &str) -> Result<ParsedIdentifier, NinError> {
    VALIDATOR.parse(value)
}
