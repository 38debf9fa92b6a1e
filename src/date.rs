//! Century resolution and birth date extraction.

use chrono::{Datelike, NaiveDate};

use crate::ParseError;
use crate::consts::CENTURY_CYCLE;
use crate::pattern::Fields;
use crate::table::{CenturyRule, DateCheck};
use crate::types::BirthDate;

/// Year, month and day as encoded, with the century resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedDate {
    /// First year of the resolved century, e.g. `1900`
    pub century: u16,
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl EncodedDate {
    /// Checks the date against the real calendar.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` for days the month does not have.
    pub fn to_birth_date(self) -> Result<BirthDate, ParseError> {
        BirthDate::new(self.year, self.month, self.day)
    }

    /// Applies a [`DateCheck`]. Month and day ranges were already enforced by
    /// the pattern, so [`DateCheck::Range`] always passes.
    ///
    /// # Errors
    /// Returns the calendar error under [`DateCheck::Calendar`].
    pub fn check(self, date_check: DateCheck) -> Result<(), ParseError> {
        match date_check {
            DateCheck::Range => Ok(()),
            DateCheck::Calendar => self.to_birth_date().map(|_| ()),
        }
    }
}

/// Resolves the century of matched fields, `None` for undated layouts.
///
/// `today` is only read by [`CenturyRule::Relative`] layouts.
///
/// # Errors
/// Returns `ParseError::UnknownCentury` if the marker is missing from the
/// layout's table, and `ParseError::InvalidYear` if a relative year would
/// fall before year 1.
pub fn extract(fields: &Fields, today: NaiveDate) -> Result<Option<EncodedDate>, ParseError> {
    let two_digit = u16::from(fields.year);
    let year = match fields.layout.century {
        CenturyRule::Undated => return Ok(None),
        CenturyRule::Absolute => marker_value(fields)? + two_digit,
        CenturyRule::Explicit => {
            let hundreds = fields.hundreds.ok_or(ParseError::InvalidYear(two_digit))?;
            hundreds * CENTURY_CYCLE + two_digit
        }
        CenturyRule::Relative => {
            let back = marker_value(fields)?;
            relative_year(two_digit, fields.month, fields.day, today)
                .checked_sub(i32::from(back))
                .and_then(|year| u16::try_from(year).ok())
                .filter(|&year| year > 0)
                .ok_or(ParseError::InvalidYear(two_digit))?
        }
    };

    Ok(Some(EncodedDate {
        century: year - year % CENTURY_CYCLE,
        year,
        month: fields.month,
        day: fields.day,
    }))
}

fn marker_value(fields: &Fields) -> Result<u16, ParseError> {
    let marker = fields.marker.unwrap_or('?');
    fields
        .layout
        .marker_value(marker)
        .ok_or(ParseError::UnknownCentury(marker))
}

/// Latest year not after `today` that ends in `two_digit`, counting a
/// birthday later this year as last century.
fn relative_year(two_digit: u16, month: u8, day: u8, today: NaiveDate) -> i32 {
    let cycle = i32::from(CENTURY_CYCLE);
    let current = today.year();
    let mut year = current - (current - i32::from(two_digit)).rem_euclid(cycle);
    if year == current && (u32::from(month), u32::from(day)) > (today.month(), today.day()) {
        year -= cycle;
    }
    year
}
