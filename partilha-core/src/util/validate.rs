use lazy_static::lazy_static;
use regex::Regex;

pub use fast_chemail::is_valid_email;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9(][0-9 ()\-]{6,18}[0-9]$").unwrap();
}

// The federative units of Brazil
const STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

pub fn is_positive_integer(s: &str) -> bool {
    s.trim().parse::<u64>().map(|n| n > 0).unwrap_or(false)
}

pub fn is_valid_phone(s: &str) -> bool {
    PHONE_REGEX.is_match(s.trim())
}

/// Expects the upper case two-letter code, e.g. "SP".
pub fn is_valid_state(s: &str) -> bool {
    STATES.contains(&s)
}

/// Coerces query strings like "true", "1", "yes" into a boolean.
///
/// Anything unrecognized (including `None`) yields the default.
pub fn parse_bool_or(s: Option<&str>, default: bool) -> bool {
    match s.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("true" | "1" | "yes" | "on") => true,
        Some("false" | "0" | "no" | "off") => false,
        _ => default,
    }
}
