//! Check symbol algorithms.
//!
//! Every function takes the body digits (values `0..=9`, check symbol
//! excluded) in the order the layout collects them and returns `None` when
//! the body has the wrong length.

use crate::consts::{
    BALTIC_WEIGHTS_ROUND_1, BALTIC_WEIGHTS_ROUND_2, FINNISH_CHECK_ALPHABET, FINNISH_MODULUS,
    LATVIAN_WEIGHTS, MOD_11,
};

/// Check symbol scheme of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checksum {
    /// Estonian and Lithuanian two-round mod 11 over `GYYMMDDSSS`.
    BalticMod11,
    /// Finnish `DDMMYYSSS mod 31`, looked up in the check alphabet.
    FinnishMod31,
    /// Pre-2017 Latvian weighted mod 11 over `DDMMYYGSSS`.
    LatvianWeighted,
    /// Swedish Luhn over the ten-digit short form `YYMMDDSSS`.
    Luhn,
    /// No check symbol. Post-2017 Latvian codes are shape-checked only.
    None,
}

impl Checksum {
    /// Expected check symbol for `body`, or `None` for [`Checksum::None`] and
    /// malformed bodies.
    pub fn expected(self, body: &[u8]) -> Option<char> {
        match self {
            Self::BalticMod11 => baltic_mod11(body).map(digit_char),
            Self::FinnishMod31 => finnish_mod31(body),
            Self::LatvianWeighted => latvian_weighted(body).map(digit_char),
            Self::Luhn => luhn(body).map(digit_char),
            Self::None => None,
        }
    }

    /// Compares `found` with the expected symbol, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns the `(expected, found)` pair on mismatch. A scheme without a
    /// check symbol always matches.
    pub fn verify(self, body: &[u8], found: char) -> Result<(), (char, char)> {
        if self == Self::None {
            return Ok(());
        }
        let found = found.to_ascii_uppercase();
        match self.expected(body) {
            Some(expected) if expected == found => Ok(()),
            Some(expected) => Err((expected, found)),
            None => Err(('?', found)),
        }
    }
}

fn digit_char(value: u8) -> char {
    char::from(b'0' + value % 10)
}

fn weighted_sum(body: &[u8], weights: &[u32]) -> u32 {
    body.iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum()
}

/// Estonian/Lithuanian check digit.
///
/// ```
/// use nin_validator::checksum::baltic_mod11;
///
/// // first round: 170 mod 11 = 5
/// assert_eq!(baltic_mod11(&[5, 2, 0, 1, 2, 1, 9, 8, 1, 5]), Some(5));
/// ```
pub fn baltic_mod11(body: &[u8]) -> Option<u8> {
    if body.len() != BALTIC_WEIGHTS_ROUND_1.len() {
        return None;
    }
    let first = weighted_sum(body, &BALTIC_WEIGHTS_ROUND_1) % MOD_11;
    if first != 10 {
        return u8::try_from(first).ok();
    }
    match weighted_sum(body, &BALTIC_WEIGHTS_ROUND_2) % MOD_11 {
        10 => Some(0),
        second => u8::try_from(second).ok(),
    }
}

/// Finnish check character: the nine digits read as one number, mod 31.
pub fn finnish_mod31(body: &[u8]) -> Option<char> {
    if body.len() != 9 {
        return None;
    }
    let number = body
        .iter()
        .fold(0_u32, |acc, &digit| acc * 10 + u32::from(digit));
    let remainder = usize::try_from(number % FINNISH_MODULUS).ok()?;
    FINNISH_CHECK_ALPHABET.chars().nth(remainder)
}

/// Pre-2017 Latvian check digit: `(1 - Σ dᵢwᵢ) mod 11 mod 10`.
pub fn latvian_weighted(body: &[u8]) -> Option<u8> {
    if body.len() != LATVIAN_WEIGHTS.len() {
        return None;
    }
    let sum = i64::from(weighted_sum(body, &LATVIAN_WEIGHTS));
    let check = (1 - sum).rem_euclid(i64::from(MOD_11)) % 10;
    u8::try_from(check).ok()
}

/// Luhn check digit for the nine digits preceding it.
///
/// Digits at even positions (0-based, from the left) are doubled, with 9
/// subtracted from results above 9.
pub fn luhn(body: &[u8]) -> Option<u8> {
    if body.len() != 9 {
        return None;
    }
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            let digit = u32::from(digit);
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    u8::try_from((10 - sum % 10) % 10).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_baltic_first_round() {
        assert_eq!(baltic_mod11(&digits("5201219815")), Some(5));
        assert_eq!(baltic_mod11(&digits("4710231230")), Some(0));
        assert_eq!(baltic_mod11(&digits("3850730033")), Some(7));
        assert_eq!(baltic_mod11(&digits("4930505079")), Some(9));
    }

    #[test]
    fn test_baltic_second_round() {
        // both rounds leave remainder 10
        assert_eq!(baltic_mod11(&digits("5000101004")), Some(0));
    }

    #[test]
    fn test_baltic_wrong_length() {
        assert_eq!(baltic_mod11(&digits("520121981")), None);
        assert_eq!(baltic_mod11(&digits("52012198155")), None);
    }

    #[test]
    fn test_finnish_digit_and_letter() {
        assert_eq!(finnish_mod31(&digits("300723348")), Some('5'));
        assert_eq!(finnish_mod31(&digits("040499789")), Some('T'));
        assert_eq!(finnish_mod31(&digits("151294953")), Some('B'));
        assert_eq!(finnish_mod31(&digits("240777712")), Some('Y'));
    }

    #[test]
    fn test_finnish_remainder_zero() {
        assert_eq!(finnish_mod31(&digits("000000000")), Some('0'));
    }

    #[test]
    fn test_latvian_weighted() {
        assert_eq!(latvian_weighted(&digits("1611751999")), Some(7));
        assert_eq!(latvian_weighted(&digits("1211961024")), Some(3));
        assert_eq!(latvian_weighted(&digits("1212961024")), Some(7));
    }

    #[test]
    fn test_luhn() {
        assert_eq!(luhn(&digits("970331496")), Some(4));
        assert_eq!(luhn(&digits("971001496")), Some(1));
        assert_eq!(luhn(&digits("000127496")), Some(8));
        assert_eq!(luhn(&digits("980623496")), Some(0));
    }

    #[test]
    fn test_verify_is_case_insensitive() {
        assert!(Checksum::FinnishMod31.verify(&digits("040499789"), 't').is_ok());
        assert!(Checksum::FinnishMod31.verify(&digits("040499789"), 'T').is_ok());
    }

    #[test]
    fn test_verify_reports_mismatch() {
        assert_eq!(
            Checksum::FinnishMod31.verify(&digits("300723348"), 'A'),
            Err(('5', 'A'))
        );
        assert_eq!(Checksum::Luhn.verify(&digits("980623496"), '4'), Err(('0', '4')));
    }

    #[test]
    fn test_none_always_matches() {
        assert_eq!(Checksum::None.expected(&digits("3274653987")), None);
        assert!(Checksum::None.verify(&digits("3274653987"), '8').is_ok());
    }
}
