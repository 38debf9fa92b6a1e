/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum day number any month can carry
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator used by the hyphenated Latvian and Swedish forms
pub const HYPHEN: char = '-';

/// Swedish separator for holders aged 100 or more
pub const CENTENARIAN_SEPARATOR: char = '+';

/// Finnish check characters, indexed by `(date ++ serial) mod 31`.
/// G, I, O, Q and Z are left out so the symbol never reads as a digit.
pub const FINNISH_CHECK_ALPHABET: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Modulus of the Finnish check character
pub const FINNISH_MODULUS: u32 = 31;

/// Check symbols of every decimal scheme
pub const DECIMAL_ALPHABET: &str = "0123456789";

/// First-round weights of the Estonian/Lithuanian check digit
pub const BALTIC_WEIGHTS_ROUND_1: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
/// Second-round weights, used when the first round leaves remainder 10
pub const BALTIC_WEIGHTS_ROUND_2: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Weights of the pre-2017 Latvian check digit
pub const LATVIAN_WEIGHTS: [u32; 10] = [1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Modulus shared by the Baltic schemes
pub const MOD_11: u32 = 11;

/// Leading digits of every post-2017 Latvian code
pub const LATVIAN_NEW_PREFIX: &str = "32";
