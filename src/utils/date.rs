use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, SecondsFormat, Utc};

/// Local calendar date; the earliest date a report may start on.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

/// ISO form used on the wire (`YYYY-MM-DD`).
pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Malaysian form used in messages (`DD/MM/YYYY`).
pub fn format_dmy(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Submission instant, e.g. `2024-03-05T01:02:03.456Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
