use chrono::NaiveDate;
use std::fmt;

/// Message attached to the end date while the range is reversed.
pub const END_BEFORE_START: &str = "Tarikh tamat mesti selepas tarikh mula";

/// Inclusive length of an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationResult {
    /// One of the dates is missing.
    Unset,
    /// End date falls before the start date.
    Invalid,
    /// Number of calendar days covered, both endpoints included.
    Days(i64),
}

impl DurationResult {
    pub fn is_invalid(&self) -> bool {
        matches!(self, DurationResult::Invalid)
    }

    /// Text shown in the duration badge.
    pub fn display(&self) -> String {
        match self {
            DurationResult::Unset => "-".to_string(),
            DurationResult::Invalid => "Tarikh tidak sah".to_string(),
            DurationResult::Days(n) => format!("{n} hari"),
        }
    }
}

impl fmt::Display for DurationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Inclusive day count between two dates.
///
/// Dates carry no time of day, so the difference is always a whole number of
/// days and `d..=d` counts as one day.
pub fn compute(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DurationResult {
    match (start, end) {
        (Some(s), Some(e)) if e < s => DurationResult::Invalid,
        (Some(s), Some(e)) => DurationResult::Days((e - s).num_days().abs() + 1),
        _ => DurationResult::Unset,
    }
}

/// Custom validity message for the end-date control; `None` clears it.
pub fn end_date_validity(result: DurationResult) -> Option<&'static str> {
    if result.is_invalid() {
        Some(END_BEFORE_START)
    } else {
        None
    }
}
