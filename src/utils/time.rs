use crate::error::{invalid_date, FteResult};
use chrono::{Datelike, Duration, NaiveDate};

/// ISO calendar date format used for every date crossing the crate boundary
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string, treating blank input as absent
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).ok()
}

/// Parse a `YYYY-MM-DD` string, failing on anything else
pub fn parse_iso_date_strict(value: &str) -> FteResult<NaiveDate> {
    parse_iso_date(value).ok_or_else(|| invalid_date(value))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Sunday on or before `date`
pub fn week_start_sunday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date.checked_sub_signed(Duration::days(offset))
        .unwrap_or(date)
}

/// Move `date` forward by `weeks` whole weeks
pub fn add_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::weeks(weeks))
}

/// First week of the strip for `year`: the Sunday on or before January 1
pub fn year_start_week(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(week_start_sunday)
}
