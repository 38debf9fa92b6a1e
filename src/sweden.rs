//! Swedish personal identity number (personnummer).
//!
//! `YYMMDD-SSSC` in the short form, where the separator turns to `+` once the
//! holder is a hundred years old, or `YYYYMMDD-SSSC`/`YYYYMMDDSSSC` with the
//! century written out. The check digit is the Luhn digit of the ten-digit
//! short form.

use chrono::NaiveDate;

use crate::table::SWEDEN;
use crate::{CountryValidator, Mode, NinError, ParsedIdentifier};

pub static VALIDATOR: CountryValidator = CountryValidator::new(&SWEDEN);

pub fn is_pattern_valid(value: &str) -> bool {
    VALIDATOR.is_pattern_valid(value)
}

/// Shape, calendar date and Luhn digit; short forms are dated relative to
/// today.
pub fn validate(value: &str) -> bool {
    VALIDATOR.validate(value)
}

/// [`validate`] with short forms dated relative to `today`.
pub fn validate_at(value: &str, today: NaiveDate) -> bool {
    VALIDATOR.validate_at(value, today)
}

pub fn validate_strict(value: &str) -> bool {
    VALIDATOR.validate_strict(value)
}

/// [`validate_strict`] with short forms dated relative to `today`.
pub fn validate_strict_at(value: &str, today: NaiveDate) -> bool {
    VALIDATOR.validate_strict_at(value, today)
}

/// # Errors
/// Returns a [`NinError`] describing the first failing stage.
pub fn parse(value: &str) -> Result<ParsedIdentifier, NinError> {
    VALIDATOR.parse(value)
}

/// [`parse`] with short forms dated relative to `today`.
///
/// # Errors
/// Returns a [`NinError`] describing the first failing stage.
pub fn parse_at(value: &str, today: NaiveDate) -> Result<ParsedIdentifier, NinError> {
    VALIDATOR.parse_at(value, Mode::Standard, today)
}
