//! Parsing and validation of national identification numbers (personal
//! identity codes) of Estonia, Finland, Latvia, Lithuania and Sweden.
//!
//! Every country module exposes the same boolean contract:
//!
//! ```
//! use nin_validator::{finland, latvia};
//!
//! assert!(finland::is_pattern_valid("300723A348A"));
//! assert!(!finland::validate("300723A348A"));
//! assert!(latvia::validate("121296-10246"));
//! ```
//!
//! `validate` applies the checks each country's table enforces; Estonian,
//! Lithuanian and pre-2017 Latvian codes are accepted on shape and date
//! ranges alone. `validate_strict` additionally requires a real calendar date
//! and a matching check symbol everywhere one exists.

mod consts;
mod error;
mod prelude;
mod types;

pub mod checksum;
pub mod date;
pub mod pattern;
pub mod table;
pub mod validator;

pub mod estonia;
pub mod finland;
pub mod latvia;
pub mod lithuania;
pub mod sweden;

pub use consts::*;
pub use error::{NinError, ParseError, UnknownCountry};
pub use table::FormatTable;
pub use types::{BirthDate, Day, Month, Year, days_in_month, is_leap_year};
pub use validator::{CountryValidator, Mode, ParsedIdentifier};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A supported issuing country.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Country {
    #[serde(rename = "EE")]
    Estonia,
    #[serde(rename = "FI")]
    Finland,
    #[serde(rename = "LV")]
    Latvia,
    #[serde(rename = "LT")]
    Lithuania,
    #[serde(rename = "SE")]
    Sweden,
}

impl Country {
    pub const ALL: [Self; 5] = [
        Self::Estonia,
        Self::Finland,
        Self::Latvia,
        Self::Lithuania,
        Self::Sweden,
    ];

    /// ISO 3166-1 alpha-2 code
    pub const fn iso_code(self) -> &'static str {
        match self {
            Self::Estonia => "EE",
            Self::Finland => "FI",
            Self::Latvia => "LV",
            Self::Lithuania => "LT",
            Self::Sweden => "SE",
        }
    }

    /// Translation key the form layer shows when `validate` fails
    pub const fn error_key(self) -> &'static str {
        match self {
            Self::Estonia => "errorValidationEstSsn",
            Self::Finland => "errorValidationFinSsn",
            Self::Latvia => "errorValidationLvaSsn",
            Self::Lithuania => "errorValidationLtuSsn",
            Self::Sweden => "errorValidationSweSsn",
        }
    }

    pub fn validator(self) -> CountryValidator {
        CountryValidator::new(FormatTable::for_country(self))
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    /// Accepts the English name or the alpha-2 code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|country| {
                wanted.eq_ignore_ascii_case(country.iso_code())
                    || wanted.eq_ignore_ascii_case(&country.to_string())
            })
            .ok_or_else(|| UnknownCountry(wanted.to_owned()))
    }
}

/// Shape check for `country`; see [`CountryValidator::is_pattern_valid`].
pub fn is_pattern_valid(country: Country, value: &str) -> bool {
    country.validator().is_pattern_valid(value)
}

/// Full check for `country`; see [`CountryValidator::validate`].
pub fn validate(country: Country, value: &str) -> bool {
    country.validator().validate(value)
}
