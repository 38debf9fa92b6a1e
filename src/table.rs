//! Static format tables, one per supported country.
//!
//! A table lists the layouts an identifier may take. A layout is a template
//! string read one character per input character:
//!
//! | slot | accepts |
//! |------|---------|
//! | `G`  | a century marker from [`Layout::markers`] |
//! | `H`  | a digit of the written-out hundreds of the birth year |
//! | `Y`, `M`, `D` | digits of the two-digit year, month and day |
//! | `S`  | a serial digit |
//! | `N`  | a digit without date meaning |
//! | `C`  | the check symbol, one of [`FormatTable::check_alphabet`] |
//!
//! Any other template character must appear literally.

use crate::Country;
use crate::checksum::Checksum;
use crate::consts::{CENTENARIAN_SEPARATOR, DECIMAL_ALPHABET, FINNISH_CHECK_ALPHABET, HYPHEN};

/// How the century of a layout's two-digit year is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenturyRule {
    /// The `G` marker maps to the first year of the century.
    Absolute,
    /// The `G` marker maps to a number of years to count back from the
    /// latest past year ending in the two-digit year.
    Relative,
    /// The hundreds are written out in the `H` slots; a `G` marker, if
    /// present, is only a separator.
    Explicit,
    /// The layout carries no birth date.
    Undated,
}

/// How strictly the plain `validate` entry point checks the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// Day `01..=31` and month `01..=12`, as already required by the pattern.
    Range,
    /// The day must exist in the resolved month and year.
    Calendar,
}

/// One accepted lexical shape of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub template: &'static str,
    pub markers: &'static [(char, u16)],
    pub century: CenturyRule,
    /// Accepted values of the `H` slots; empty when the layout has none
    pub hundreds: &'static [u16],
    pub checksum: Checksum,
}

impl Layout {
    /// Value the marker maps to, `None` for characters outside the table.
    pub fn marker_value(&self, marker: char) -> Option<u16> {
        self.markers
            .iter()
            .find(|(symbol, _)| *symbol == marker)
            .map(|&(_, value)| value)
    }

    /// Whether the layout encodes a birth date
    pub const fn is_dated(&self) -> bool {
        !matches!(self.century, CenturyRule::Undated)
    }
}

/// Everything the validator needs to know about one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTable {
    pub country: Country,
    /// Tried in order; the first layout that matches wins.
    pub layouts: &'static [Layout],
    pub check_alphabet: &'static str,
    /// Date check applied by `validate`; `validate_strict` always uses
    /// [`DateCheck::Calendar`].
    pub date_check: DateCheck,
    /// Whether `validate` rejects a check symbol mismatch; `validate_strict`
    /// always does.
    pub checksum_enforced: bool,
}

impl FormatTable {
    /// Returns the table of a country
    pub fn for_country(country: Country) -> &'static Self {
        match country {
            Country::Estonia => &ESTONIA,
            Country::Finland => &FINLAND,
            Country::Latvia => &LATVIA,
            Country::Lithuania => &LITHUANIA,
            Country::Sweden => &SWEDEN,
        }
    }

    /// Whether `symbol` belongs to the check alphabet, ignoring ASCII case
    pub fn is_check_symbol(&self, symbol: char) -> bool {
        self.check_alphabet.contains(symbol.to_ascii_uppercase())
    }
}

/// First digit of an Estonian or Lithuanian code: century and sex.
pub const BALTIC_MARKERS: &[(char, u16)] = &[
    ('1', 1800),
    ('2', 1800),
    ('3', 1900),
    ('4', 1900),
    ('5', 2000),
    ('6', 2000),
    ('7', 2100),
    ('8', 2100),
];

pub const FINNISH_MARKERS: &[(char, u16)] = &[('+', 1800), ('-', 1900), ('A', 2000)];

pub const LATVIAN_MARKERS: &[(char, u16)] = &[('0', 1800), ('1', 1900), ('2', 2000)];

/// Years to count back: `-` under a hundred years old, `+` a hundred or more.
pub const SWEDISH_AGE_MARKERS: &[(char, u16)] = &[(HYPHEN, 0), (CENTENARIAN_SEPARATOR, 100)];

/// Separators of the long Swedish form, where the century is written out.
pub const SWEDISH_SEPARATORS: &[(char, u16)] = &[(HYPHEN, 0), (CENTENARIAN_SEPARATOR, 0)];

/// Centuries a long Swedish number may spell out.
pub const SWEDISH_HUNDREDS: &[u16] = &[18, 19, 20];

const BALTIC_LAYOUTS: &[Layout] = &[Layout {
    template: "GYYMMDDSSSC",
    markers: BALTIC_MARKERS,
    century: CenturyRule::Absolute,
    hundreds: &[],
    checksum: Checksum::BalticMod11,
}];

const FINNISH_LAYOUTS: &[Layout] = &[Layout {
    template: "DDMMYYGSSSC",
    markers: FINNISH_MARKERS,
    century: CenturyRule::Absolute,
    hundreds: &[],
    checksum: Checksum::FinnishMod31,
}];

// Pre-2017 codes start with a day, so they never begin with "32".
const LATVIAN_LAYOUTS: &[Layout] = &[
    Layout {
        template: "DDMMYY-GSSSC",
        markers: LATVIAN_MARKERS,
        century: CenturyRule::Absolute,
        hundreds: &[],
        checksum: Checksum::LatvianWeighted,
    },
    Layout {
        template: "DDMMYYGSSSC",
        markers: LATVIAN_MARKERS,
        century: CenturyRule::Absolute,
        hundreds: &[],
        checksum: Checksum::LatvianWeighted,
    },
    Layout {
        template: "32NNNN-NNNNN",
        markers: &[],
        century: CenturyRule::Undated,
        hundreds: &[],
        checksum: Checksum::None,
    },
    Layout {
        template: "32NNNNNNNNN",
        markers: &[],
        century: CenturyRule::Undated,
        hundreds: &[],
        checksum: Checksum::None,
    },
];

const SWEDISH_LAYOUTS: &[Layout] = &[
    Layout {
        template: "YYMMDDGSSSC",
        markers: SWEDISH_AGE_MARKERS,
        century: CenturyRule::Relative,
        hundreds: &[],
        checksum: Checksum::Luhn,
    },
    Layout {
        template: "HHYYMMDDGSSSC",
        markers: SWEDISH_SEPARATORS,
        century: CenturyRule::Explicit,
        hundreds: SWEDISH_HUNDREDS,
        checksum: Checksum::Luhn,
    },
    Layout {
        template: "HHYYMMDDSSSC",
        markers: &[],
        century: CenturyRule::Explicit,
        hundreds: SWEDISH_HUNDREDS,
        checksum: Checksum::Luhn,
    },
];

pub static ESTONIA: FormatTable = FormatTable {
    country: Country::Estonia,
    layouts: BALTIC_LAYOUTS,
    check_alphabet: DECIMAL_ALPHABET,
    date_check: DateCheck::Range,
    checksum_enforced: false,
};

pub static LITHUANIA: FormatTable = FormatTable {
    country: Country::Lithuania,
    layouts: BALTIC_LAYOUTS,
    check_alphabet: DECIMAL_ALPHABET,
    date_check: DateCheck::Range,
    checksum_enforced: false,
};

pub static FINLAND: FormatTable = FormatTable {
    country: Country::Finland,
    layouts: FINNISH_LAYOUTS,
    check_alphabet: FINNISH_CHECK_ALPHABET,
    date_check: DateCheck::Calendar,
    checksum_enforced: true,
};

pub static LATVIA: FormatTable = FormatTable {
    country: Country::Latvia,
    layouts: LATVIAN_LAYOUTS,
    check_alphabet: DECIMAL_ALPHABET,
    date_check: DateCheck::Range,
    checksum_enforced: false,
};

pub static SWEDEN: FormatTable = FormatTable {
    country: Country::Sweden,
    layouts: SWEDISH_LAYOUTS,
    check_alphabet: DECIMAL_ALPHABET,
    date_check: DateCheck::Calendar,
    checksum_enforced: true,
};
