use crate::prelude::*;
use crate::{Country, MAX_MONTH, MAX_YEAR};

/// Date component errors raised while building a [`crate::BirthDate`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Unknown century marker: {_0:?}")]
    UnknownCentury(char),
}

impl std::error::Error for ParseError {}

/// Reason an identifier was rejected.
///
/// The boolean entry points collapse every variant to `false`; this type is
/// only surfaced by the `parse` family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NinError {
    /// The input does not have the lexical shape of any accepted layout.
    #[error("Not a valid identity code for {country}")]
    Pattern { country: Country },

    /// The encoded birth date does not exist.
    #[error(transparent)]
    Date(#[from] ParseError),

    /// The check symbol does not match the one computed from the body.
    #[error("Check symbol mismatch for {country}: expected {expected:?}, found {found:?}")]
    Checksum {
        country: Country,
        expected: char,
        found: char,
    },
}

/// Country name or code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported country: {0}")]
pub struct UnknownCountry(pub String);
