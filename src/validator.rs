//! Composition of pattern, date and checksum stages.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::date::{self, EncodedDate};
use crate::pattern::{self, Fields};
use crate::table::{DateCheck, FormatTable};
use crate::types::BirthDate;
use crate::{Country, NinError};

/// Which checks a validation run enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The country table's policy, the behavior of `validate`.
    #[default]
    Standard,
    /// Calendar date and check symbol for every dated layout.
    Strict,
}

/// Transient result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedIdentifier {
    pub country: Country,
    /// First year of the birth century; `None` for undated formats
    pub century: Option<u16>,
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub serial: String,
    pub check_symbol: Option<char>,
    /// Digits the check symbol is computed from
    pub digits_without_check: String,
    /// Outcome of the check symbol comparison; `None` when the format has no
    /// check symbol. Under [`Mode::Standard`] a country that does not enforce
    /// its checksum reports `Some(false)` here instead of failing.
    pub checksum_valid: Option<bool>,
}

impl ParsedIdentifier {
    /// Birth date, if the identifier encodes one that exists in the calendar
    pub fn birth_date(&self) -> Option<BirthDate> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => BirthDate::new(year, month, day).ok(),
            _ => None,
        }
    }
}

/// Validator of one country, driven entirely by its [`FormatTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryValidator {
    table: &'static FormatTable,
}

impl CountryValidator {
    pub const fn new(table: &'static FormatTable) -> Self {
        Self { table }
    }

    pub const fn country(&self) -> Country {
        self.table.country
    }

    pub const fn table(&self) -> &'static FormatTable {
        self.table
    }

    /// Shape only: length, character classes, markers and date ranges.
    pub fn is_pattern_valid(&self, value: &str) -> bool {
        pattern::is_match(self.table, value)
    }

    /// Shape and the date/checksum checks the country's table enforces.
    pub fn validate(&self, value: &str) -> bool {
        self.validate_at(value, today())
    }

    /// Like [`Self::validate`] with an explicit reference date for relative
    /// centuries.
    pub fn validate_at(&self, value: &str, today: NaiveDate) -> bool {
        self.accept(self.parse_at(value, Mode::Standard, today))
    }

    /// Shape, calendar date and check symbol, whatever the table's policy.
    pub fn validate_strict(&self, value: &str) -> bool {
        self.validate_strict_at(value, today())
    }

    /// Like [`Self::validate_strict`] with an explicit reference date for
    /// relative centuries.
    pub fn validate_strict_at(&self, value: &str, today: NaiveDate) -> bool {
        self.accept(self.parse_at(value, Mode::Strict, today))
    }

    /// Absent input is invalid.
    pub fn validate_opt(&self, value: Option<&str>) -> bool {
        value.is_some_and(|value| self.validate(value))
    }

    /// Parses under [`Mode::Standard`] against today's date.
    ///
    /// # Errors
    /// See [`Self::parse_at`].
    pub fn parse(&self, value: &str) -> Result<ParsedIdentifier, NinError> {
        self.parse_at(value, Mode::Standard, today())
    }

    /// Runs the pattern, date and checksum stages.
    ///
    /// # Errors
    /// Returns `NinError::Pattern` if no layout matches, `NinError::Date` if
    /// the century is unknown or the date fails the mode's date check, and
    /// `NinError::Checksum` if the mode enforces a check symbol that differs.
    pub fn parse_at(
        &self,
        value: &str,
        mode: Mode,
        today: NaiveDate,
    ) -> Result<ParsedIdentifier, NinError> {
        let country = self.country();
        let fields =
            pattern::match_table(self.table, value).ok_or(NinError::Pattern { country })?;

        let encoded = date::extract(&fields, today)?;
        if let Some(encoded) = encoded {
            encoded.check(self.date_check(mode))?;
        }

        let checksum_valid = match fields.check {
            Some(found) => {
                match fields.layout.checksum.verify(&fields.body, found) {
                    Ok(()) => Some(true),
                    Err((expected, found)) if self.checksum_enforced(mode) => {
                        return Err(NinError::Checksum {
                            country,
                            expected,
                            found,
                        });
                    }
                    Err(_) => Some(false),
                }
            }
            None => None,
        };

        Ok(build(country, &fields, encoded, checksum_valid))
    }

    fn date_check(&self, mode: Mode) -> DateCheck {
        match mode {
            Mode::Standard => self.table.date_check,
            Mode::Strict => DateCheck::Calendar,
        }
    }

    fn checksum_enforced(&self, mode: Mode) -> bool {
        match mode {
            Mode::Standard => self.table.checksum_enforced,
            Mode::Strict => true,
        }
    }

    fn accept(&self, result: Result<ParsedIdentifier, NinError>) -> bool {
        match result {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(country = %self.country(), %error, "identity code rejected");
                false
            }
        }
    }
}

fn build(
    country: Country,
    fields: &Fields,
    encoded: Option<EncodedDate>,
    checksum_valid: Option<bool>,
) -> ParsedIdentifier {
    ParsedIdentifier {
        country,
        century: encoded.map(|date| date.century),
        year: encoded.map(|date| date.year),
        month: encoded.map(|date| date.month),
        day: encoded.map(|date| date.day),
        serial: fields.serial.clone(),
        check_symbol: fields.check,
        digits_without_check: fields
            .body
            .iter()
            .map(|&digit| char::from(b'0' + digit))
            .collect(),
        checksum_valid,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
