// file: src/catalog/patterns.rs
// description: compiled regex patterns for filename date detection
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 2025-01-24
    pub static ref YEAR_MONTH_DAY: Regex = Regex::new(
        r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})"
    ).expect("YEAR_MONTH_DAY regex is valid");

    // 01-24-2025
    pub static ref MONTH_DAY_YEAR: Regex = Regex::new(
        r"([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})"
    ).expect("MONTH_DAY_YEAR regex is valid");

    // June-17-2025, jun-17-2025
    pub static ref MONTH_NAME_DAY_YEAR: Regex = Regex::new(
        r"([A-Za-z]+)-([0-9]{1,2})-([0-9]{4})"
    ).expect("MONTH_NAME_DAY_YEAR regex is valid");

    // 2025_01_24
    pub static ref YEAR_MONTH_DAY_UNDERSCORE: Regex = Regex::new(
        r"([0-9]{4})_([0-9]{1,2})_([0-9]{1,2})"
    ).expect("YEAR_MONTH_DAY_UNDERSCORE regex is valid");

    // 20250124
    pub static ref COMPACT_DATE: Regex = Regex::new(
        r"([0-9]{4})([0-9]{2})([0-9]{2})"
    ).expect("COMPACT_DATE regex is valid");
}

/// Month number for an english month name or three letter abbreviation.
pub fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}
