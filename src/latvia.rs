//! Latvian personal code (personas kods).
//!
//! Two generations are in use. Codes issued before July 2017 are
//! `DDMMYY-GSSSC`, with the hyphen optional, a century digit (`0` 1800s,
//! `1` 1900s, `2` 2000s) and a weighted mod 11 check digit. Newer codes start
//! with `32`, which can never be a day, and carry neither date nor a check
//! digit this crate knows how to verify: they are accepted on shape alone.

use crate::consts::LATVIAN_NEW_PREFIX;
use crate::table::LATVIA;
use crate::{CountryValidator, NinError, ParsedIdentifier};

pub static VALIDATOR: CountryValidator = CountryValidator::new(&LATVIA);

pub fn is_pattern_valid(value: &str) -> bool {
    VALIDATOR.is_pattern_valid(value)
}

/// Shape and date ranges. The pre-2017 check digit is not enforced.
pub fn validate(value: &str) -> bool {
    VALIDATOR.validate(value)
}

/// Shape, calendar date and, for pre-2017 codes, the check digit.
pub fn validate_strict(value: &str) -> bool {
    VALIDATOR.validate_strict(value)
}

/// # Errors
/// Returns a [`NinError`] describing the first failing stage.
pub fn parse(value: &str) -> Result<ParsedIdentifier, NinError> {
    VALIDATOR.parse(value)
}

/// Whether `value` has the shape of a post-2017 code
pub fn is_new_format(value: &str) -> bool {
    value.starts_with(LATVIAN_NEW_PREFIX) && is_pattern_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[(&str, &str)] = &[
        ("32746539878", "new format"),
        ("327465-39878", "new format, hyphen"),
        ("121199-00246", "old format 19th century"),
        ("121196-10246", "old format 20th century"),
        ("121196-20246", "old format 21st century"),
        ("12119610246", "old format, no hyphen"),
        ("311196-10246", "old format day max"),
        ("011196-10246", "old format day min"),
        ("121296-10246", "old format month max"),
        ("120196-10246", "old format month min"),
    ];

    const INVALID: &[(&str, &str)] = &[
        ("327465-398787", "malformed"),
        ("32746-539878", "malformed hyphen"),
        ("331196-10246", "old format day over"),
        ("001196-10246", "old format day under"),
        ("121396-10246", "old format month over"),
        ("120096-10246", "old format month under"),
        ("121196-30246", "old format century over"),
        ("00119610246", "old format day under, no hyphen"),
    ];

    #[test]
    fn test_valid_codes() {
        for (code, case) in VALID {
            assert!(is_pattern_valid(code), "{code} pattern should be valid ({case})");
            assert!(validate(code), "{code} should be valid ({case})");
        }
    }

    #[test]
    fn test_invalid_codes() {
        for (code, case) in INVALID {
            assert!(!is_pattern_valid(code), "{code} pattern should be invalid ({case})");
            assert!(!validate(code), "{code} should be invalid ({case})");
        }
    }

    #[test]
    fn test_new_format_is_shape_only() {
        // no checksum is defined for post-2017 codes, any final digit passes
        for last in '0'..='9' {
            let code = format!("3274653987{last}");
            assert!(validate(&code), "{code}");
            assert!(validate_strict(&code), "{code}");
        }
        assert!(is_new_format("327465-39878"));
        assert!(!is_new_format("121196-10246"));
        assert!(!is_new_format("32746-539878"));
    }

    #[test]
    fn test_strict_old_format() {
        assert!(validate_strict("161175-19997"));
        assert!(validate_strict("16117519997"));
        assert!(!validate_strict("161175-19998"));
        // weighted check digit of 121196-1024? is 3
        assert!(validate_strict("121196-10243"));
        assert!(!validate_strict("121196-10246"));
        // 31 November passes the ranges but not the calendar
        assert!(validate("311196-10246"));
        assert!(!validate_strict("311196-10246"));
    }

    #[test]
    fn test_parse_reports_checksum_outcome() {
        let parsed = parse("121196-10246").unwrap();
        assert_eq!(parsed.century, Some(1900));
        assert_eq!(parsed.year, Some(1996));
        assert_eq!(parsed.checksum_valid, Some(false));

        let parsed = parse("161175-19997").unwrap();
        assert_eq!(parsed.checksum_valid, Some(true));
        assert_eq!(parsed.digits_without_check, "1611751999");
    }
}
