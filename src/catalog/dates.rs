// file: src/catalog/dates.rs
// description: best-effort calendar date extraction from filenames
// reference: ordered pattern matching over catalog::patterns

use super::patterns::{
    COMPACT_DATE, MONTH_DAY_YEAR, MONTH_NAME_DAY_YEAR, YEAR_MONTH_DAY,
    YEAR_MONTH_DAY_UNDERSCORE, month_from_name,
};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::debug;

/// Filename date layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    YearMonthDay,
    MonthDayYear,
    MonthNameDayYear,
    YearMonthDayUnderscore,
    Compact,
}

impl DatePattern {
    pub const ORDER: [DatePattern; 5] = [
        DatePattern::YearMonthDay,
        DatePattern::MonthDayYear,
        DatePattern::MonthNameDayYear,
        DatePattern::YearMonthDayUnderscore,
        DatePattern::Compact,
    ];

    fn regex(&self) -> &'static Regex {
        match self {
            DatePattern::YearMonthDay => &*YEAR_MONTH_DAY,
            DatePattern::MonthDayYear => &*MONTH_DAY_YEAR,
            DatePattern::MonthNameDayYear => &*MONTH_NAME_DAY_YEAR,
            DatePattern::YearMonthDayUnderscore => &*YEAR_MONTH_DAY_UNDERSCORE,
            DatePattern::Compact => &*COMPACT_DATE,
        }
    }

    /// Reads (year, month, day) in this pattern's own field order.
    fn fields(&self, caps: &Captures<'_>) -> Option<(i32, u32, u32)> {
        let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

        match self {
            DatePattern::MonthDayYear => {
                Some((num(3)? as i32, num(1)?, num(2)?))
            }
            DatePattern::MonthNameDayYear => {
                let month = month_from_name(caps.get(1)?.as_str())?;
                Some((num(3)? as i32, month, num(2)?))
            }
            DatePattern::YearMonthDay
            | DatePattern::YearMonthDayUnderscore
            | DatePattern::Compact => Some((num(1)? as i32, num(2)?, num(3)?)),
        }
    }
}

/// Returns the first pattern that structurally matches, without validating values.
pub fn matching_pattern(filename: &str) -> Option<(DatePattern, Captures<'_>)> {
    DatePattern::ORDER
        .iter()
        .find_map(|pattern| pattern.regex().captures(filename).map(|caps| (*pattern, caps)))
}

/// Extracts a date from a filename.
///
/// Only the first structurally matching pattern is considered. If its values are out
/// of range (month 1-12, day 1-31, or not a real calendar day) the result is `None`
/// even when a later pattern would have produced a valid date.
///
/// Impossible days are not rolled over: `2023-02-30` is `None`, not March 2nd.
pub fn extract_date(filename: &str) -> Option<NaiveDate> {
    let (pattern, caps) = matching_pattern(filename)?;

    let Some((year, month, day)) = pattern.fields(&caps) else {
        debug!("Unrecognized month name in {}", filename);
        return None;
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        debug!(
            "Rejected date {}-{}-{} in {} ({:?})",
            year, month, day, filename, pattern
        );
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
