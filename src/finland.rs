//! Finnish personal identity code (henkilötunnus).
//!
//! `DDMMYYGSSSC`: birth date, century sign (`+` 1800s, `-` 1900s, `A`
//! 2000s), individual number and a check character. The check character is
//! `FINNISH_CHECK_ALPHABET[DDMMYYSSS mod 31]`, compared without regard to
//! case.

use crate::table::FINLAND;
use crate::{CountryValidator, NinError, ParsedIdentifier};

pub static VALIDATOR: CountryValidator = CountryValidator::new(&FINLAND);

/// Shape only; any character of the check alphabet passes.
pub fn is_pattern_valid(value: &str) -> bool {
    VALIDATOR.is_pattern_valid(value)
}

/// Shape, calendar date and check character.
pub fn validate(value: &str) -> bool {
    VALIDATOR.validate(value)
}

/// Same checks as [`validate`]; Finland enforces everything by default.
pub fn validate_strict(value: &str) -> bool {
    VALIDATOR.validate_strict(value)
}

/// # Errors
/// Returns a [`NinError`] describing the first failing stage.
pub fn parse(value: &str) -> Result<ParsedIdentifier, NinError> {
    VALIDATOR.parse(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &[
        "310394-9134",
        "010394-9532",
        "151294-953B",
        "150194-9457",
        "040499+789T",
        "300723A3485",
        "240902-3374",
        "131052-308T",
        "240777-712Y",
        "280151-398V",
        "211150-6808",
        "220674-161A",
        "291028A013D",
        "030616A514F",
        "300199+034T",
        "290100A005N",
        "110119A639D",
    ];

    #[test]
    fn test_valid_codes() {
        for code in VALID {
            assert!(is_pattern_valid(code), "{code} pattern should be valid");
            assert!(validate(code), "{code} should be valid");
            assert!(validate_strict(code), "{code} should be strictly valid");
        }
    }

    #[test]
    fn test_invalid_dates() {
        for code in ["320394-9134", "000394-9532", "151394-953B", "150094-9457"] {
            assert!(!is_pattern_valid(code), "{code} pattern should be invalid");
            assert!(!validate(code), "{code} should be invalid");
        }
    }

    #[test]
    fn test_invalid_check_character() {
        assert!(is_pattern_valid("300723A348A"));
        assert!(!validate("300723A348A"));
    }

    #[test]
    fn test_lowercase_check_character() {
        assert!(is_pattern_valid("151294-953b"));
        assert!(validate("151294-953b"));
    }

    #[test]
    fn test_lowercase_century_sign_is_rejected() {
        assert!(!is_pattern_valid("300723a3485"));
    }

    #[test]
    fn test_excluded_letters_are_not_check_characters() {
        for letter in ['G', 'I', 'O', 'Q', 'Z'] {
            let code = format!("040499+789{letter}");
            assert!(!is_pattern_valid(&code), "{code}");
        }
    }

    #[test]
    fn test_impossible_calendar_day() {
        // 30 February 1994 passes the ranges but not the calendar
        let code = "300294-913N";
        assert!(is_pattern_valid(code));
        assert!(!validate(code));
    }

    #[test]
    fn test_every_other_check_character_fails() {
        let alphabet = crate::FINNISH_CHECK_ALPHABET;
        for symbol in alphabet.chars().filter(|&c| c != 'T') {
            let code = format!("040499+789{symbol}");
            assert!(is_pattern_valid(&code));
            assert!(!validate(&code), "{code}");
        }
    }

    #[test]
    fn test_parse_nineteenth_century() {
        let parsed = parse("040499+789T").unwrap();
        assert_eq!(parsed.century, Some(1800));
        assert_eq!(parsed.birth_date().unwrap().to_string(), "1899-04-04");
        assert_eq!(parsed.serial, "789");
    }
}
