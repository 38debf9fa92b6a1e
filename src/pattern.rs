//! Lexical matching of raw input against a country's layouts.

use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY};
use crate::table::{FormatTable, Layout};

/// Raw fields pulled out of an input that matched a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub layout: &'static Layout,
    /// Character found in the `G` slot
    pub marker: Option<char>,
    /// Value of the `H` slots
    pub hundreds: Option<u16>,
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub serial: String,
    pub check: Option<char>,
    /// Every digit the check symbol is computed from, in input order
    pub body: Vec<u8>,
}

/// Returns the fields of the first layout of `table` that `value` matches.
pub fn match_table(table: &'static FormatTable, value: &str) -> Option<Fields> {
    table
        .layouts
        .iter()
        .find_map(|layout| match_layout(table, layout, value))
}

/// Matches `value` against a single layout.
///
/// Besides the character classes, a dated layout requires the day to be in
/// `01..=31` and the month in `01..=12`, and written-out hundreds must be
/// listed in [`Layout::hundreds`].
pub fn match_layout(table: &FormatTable, layout: &'static Layout, value: &str) -> Option<Fields> {
    if value.chars().count() != layout.template.len() {
        return None;
    }

    let mut fields = Fields {
        layout,
        marker: None,
        hundreds: None,
        year: 0,
        month: 0,
        day: 0,
        serial: String::new(),
        check: None,
        body: Vec::with_capacity(layout.template.len()),
    };

    for (slot, ch) in layout.template.chars().zip(value.chars()) {
        match slot {
            'G' => {
                layout.marker_value(ch)?;
                fields.marker = Some(ch);
                if let Some(digit) = digit_value(ch) {
                    fields.body.push(digit);
                }
            }
            'H' => {
                let digit = digit_value(ch)?;
                fields.hundreds = Some(fields.hundreds.unwrap_or(0) * 10 + u16::from(digit));
            }
            'Y' | 'M' | 'D' => {
                let digit = digit_value(ch)?;
                let target = match slot {
                    'Y' => &mut fields.year,
                    'M' => &mut fields.month,
                    _ => &mut fields.day,
                };
                *target = *target * 10 + digit;
                fields.body.push(digit);
            }
            'S' => {
                fields.body.push(digit_value(ch)?);
                fields.serial.push(ch);
            }
            'N' => fields.body.push(digit_value(ch)?),
            'C' => {
                if !table.is_check_symbol(ch) {
                    return None;
                }
                fields.check = Some(ch);
            }
            literal => {
                if ch != literal {
                    return None;
                }
                if let Some(digit) = digit_value(ch) {
                    fields.body.push(digit);
                }
            }
        }
    }

    if layout.is_dated() && !is_plausible_date(fields.month, fields.day) {
        return None;
    }
    match fields.hundreds {
        Some(hundreds) if !layout.hundreds.contains(&hundreds) => None,
        _ => Some(fields),
    }
}

/// Whether `value` matches any layout of `table`
pub fn is_match(table: &'static FormatTable, value: &str) -> bool {
    match_table(table, value).is_some()
}

fn digit_value(ch: char) -> Option<u8> {
    ch.to_digit(10)
        .filter(|_| ch.is_ascii_digit())
        .and_then(|digit| u8::try_from(digit).ok())
}

const fn is_plausible_date(month: u8, day: u8) -> bool {
    month >= 1 && month <= MAX_MONTH && day >= MIN_DAY && day <= MAX_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ESTONIA, FINLAND, LATVIA, SWEDEN};

    #[test]
    fn test_estonian_fields() {
        let fields = match_table(&ESTONIA, "52012198155").unwrap();
        assert_eq!(fields.marker, Some('5'));
        assert_eq!((fields.year, fields.month, fields.day), (20, 12, 19));
        assert_eq!(fields.serial, "815");
        assert_eq!(fields.check, Some('5'));
        assert_eq!(fields.body, vec![5, 2, 0, 1, 2, 1, 9, 8, 1, 5]);
    }

    #[test]
    fn test_finnish_marker_is_not_a_body_digit() {
        let fields = match_table(&FINLAND, "040499+789T").unwrap();
        assert_eq!(fields.marker, Some('+'));
        assert_eq!((fields.year, fields.month, fields.day), (99, 4, 4));
        assert_eq!(fields.body, vec![0, 4, 0, 4, 9, 9, 7, 8, 9]);
        assert_eq!(fields.check, Some('T'));
    }

    #[test]
    fn test_swedish_long_form_hundreds_stay_out_of_body() {
        let fields = match_table(&SWEDEN, "19970331-4964").unwrap();
        assert_eq!(fields.hundreds, Some(19));
        assert_eq!(fields.marker, Some('-'));
        assert_eq!(fields.body, vec![9, 7, 0, 3, 3, 1, 4, 9, 6]);

        let fields = match_table(&SWEDEN, "199703314964").unwrap();
        assert_eq!(fields.hundreds, Some(19));
        assert_eq!(fields.marker, None);
    }

    #[test]
    fn test_unlisted_hundreds_are_rejected() {
        for value in ["00970331-4964", "17970331-4964", "21970331-4964", "009703314964"] {
            assert!(!is_match(&SWEDEN, value), "{value}");
        }
        assert!(is_match(&SWEDEN, "18980623+4960"));
        assert!(is_match(&SWEDEN, "202005274960"));
    }

    #[test]
    fn test_latvian_layout_order() {
        let old = match_table(&LATVIA, "121196-10246").unwrap();
        assert_eq!(old.layout.template, "DDMMYY-GSSSC");
        assert_eq!(old.marker, Some('1'));

        let bare = match_table(&LATVIA, "12119610246").unwrap();
        assert_eq!(bare.layout.template, "DDMMYYGSSSC");

        let new = match_table(&LATVIA, "327465-39878").unwrap();
        assert_eq!(new.layout.template, "32NNNN-NNNNN");
        assert_eq!(new.check, None);
        assert_eq!(new.body, vec![3, 2, 7, 4, 6, 5, 3, 9, 8, 7, 8]);
    }

    #[test]
    fn test_lexical_date_ranges() {
        assert!(is_match(&ESTONIA, "47102312300"));
        assert!(!is_match(&ESTONIA, "47102322300"));
        assert!(!is_match(&ESTONIA, "47102002300"));
        assert!(!is_match(&ESTONIA, "48413283407"));
        assert!(!is_match(&ESTONIA, "48400283407"));
    }

    #[test]
    fn test_rejects_wrong_length_and_classes() {
        assert!(!is_match(&ESTONIA, ""));
        assert!(!is_match(&ESTONIA, "2012198155"));
        assert!(!is_match(&ESTONIA, "520121981555"));
        assert!(!is_match(&ESTONIA, "7201219815A"));
        assert!(!is_match(&FINLAND, "040499*789T"));
        assert!(!is_match(&FINLAND, "040499+789G"));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_match(&ESTONIA, "٥٢٠١٢١٩٨١٥٥"));
        assert!(!is_match(&FINLAND, "040499+789Ť"));
    }
}
