//! GEDCOM date normalization.
//!
//! GEDCOM dates are free-form text (`17 MAR 1990`, `MAR 1990`, `1990`). This
//! module turns them into comparable calendar values while keeping the raw
//! text around for display. Anything that does not parse is treated as an
//! unknown date rather than an error; callers skip comparisons involving
//! unknown dates.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Accepted date shapes, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePrecision {
    /// `17 MAR 1990`
    Day,
    /// `MAR 1990` (normalized to the first of the month)
    Month,
    /// `1990` (normalized to January 1st)
    Year,
    /// `1990-03-17`
    Iso,
}

/// A date as written in the source file plus its normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GedDate {
    raw: String,
    value: Option<NaiveDate>,
}

impl GedDate {
    /// Normalize a raw date string. Never fails; unparseable input yields an
    /// unknown date that still renders its raw text.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = normalize_date(&raw);
        Self { raw, value }
    }

    /// Build a date from an already known calendar value.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%-d %b %Y").to_string().to_uppercase(),
            value: Some(date),
        }
    }

    /// The text exactly as it appeared after the `DATE` tag.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized value, or `None` when the text was not understood.
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn is_known(&self) -> bool {
        self.value.is_some()
    }

    /// Render the normalized value as ISO 8601 (`YYYY-MM-DD`).
    pub fn to_iso(&self) -> Option<String> {
        self.value.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for GedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Normalize a GEDCOM date string into a calendar date.
///
/// Formats are tried in priority order: day-month-year, month-year, year,
/// then ISO `YYYY-MM-DD`. Month names are matched case-insensitively and may
/// be abbreviated (`MAR`) or spelled out (`March`).
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    parse_with_precision(value).map(|(date, _)| date)
}

/// Like [`normalize_date`] but also reports which format matched.
pub fn parse_with_precision(value: &str) -> Option<(NaiveDate, DatePrecision)> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d %B %Y") {
        return Some((date, DatePrecision::Day));
    }

    if starts_with_month_name(trimmed) {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %B %Y") {
            return Some((date, DatePrecision::Month));
        }
    }

    if let Some(date) = parse_year(trimmed) {
        return Some((date, DatePrecision::Year));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| (date, DatePrecision::Iso))
}

fn starts_with_month_name(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

fn parse_year(value: &str) -> Option<NaiveDate> {
    if value.is_empty() || value.len() > 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = value.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Whole months from `start` to `end`, truncated toward zero.
///
/// Negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if months > 0 && end.day() < start.day() {
        months -= 1;
    } else if months < 0 && end.day() > start.day() {
        months += 1;
    }
    months
}

/// Whole years from `start` to `end`, truncated toward zero.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    months_between(start, end) / 12
}

/// Shift a date forward by whole years. Feb 29 lands on Feb 28 in common years.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(
            parse_with_precision("17 MAR 1990"),
            Some((ymd(1990, 3, 17), DatePrecision::Day))
        );
        assert_eq!(normalize_date("17 Mar 1990"), Some(ymd(1990, 3, 17)));
        assert_eq!(normalize_date("5 march 1990"), Some(ymd(1990, 3, 5)));
    }

    #[test]
    fn parses_month_year_as_first_of_month() {
        assert_eq!(
            parse_with_precision("Mar 1990"),
            Some((ymd(1990, 3, 1), DatePrecision::Month))
        );
    }

    #[test]
    fn parses_year_only_as_january_first() {
        assert_eq!(
            parse_with_precision("1990"),
            Some((ymd(1990, 1, 1), DatePrecision::Year))
        );
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_with_precision("2005-01-01"),
            Some((ymd(2005, 1, 1), DatePrecision::Iso))
        );
    }

    #[test]
    fn unparseable_is_unknown() {
        assert_eq!(normalize_date("not-a-date"), None);
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("ABT 1990"), None);
        assert_eq!(normalize_date("31 FEB 1990"), None);

        let date = GedDate::parse("not-a-date");
        assert!(!date.is_known());
        assert_eq!(date.raw(), "not-a-date");
        assert_eq!(date.to_string(), "not-a-date");
    }

    #[test]
    fn round_trip_keeps_year() {
        for raw in ["17 Mar 1990", "Mar 1990", "1990"] {
            let date = GedDate::parse(raw);
            let iso = date.to_iso().expect("known date");
            assert!(iso.starts_with("1990-"), "{raw} -> {iso}");
            let again = GedDate::parse(iso);
            assert_eq!(again.value().map(|d| d.year()), Some(1990));
        }
    }

    #[test]
    fn from_naive_renders_gedcom_style() {
        let date = GedDate::from_naive(ymd(2010, 3, 3));
        assert_eq!(date.raw(), "3 MAR 2010");
        assert_eq!(GedDate::parse(date.raw()), date);
    }

    #[test]
    fn month_and_year_differences() {
        assert_eq!(months_between(ymd(2010, 3, 3), ymd(2010, 11, 2)), 7);
        assert_eq!(months_between(ymd(2010, 3, 3), ymd(2010, 11, 3)), 8);
        assert_eq!(months_between(ymd(2010, 11, 3), ymd(2010, 3, 3)), -8);
        assert_eq!(years_between(ymd(1985, 2, 2), ymd(2045, 2, 1)), 59);
        assert_eq!(years_between(ymd(1985, 2, 2), ymd(2045, 2, 2)), 60);
    }

    #[test]
    fn add_years_clamps_leap_day() {
        assert_eq!(add_years(ymd(2000, 2, 29), 14), Some(ymd(2014, 2, 28)));
        assert_eq!(add_years(ymd(1980, 1, 1), 14), Some(ymd(1994, 1, 1)));
    }
}
