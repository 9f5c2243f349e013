//! Date helper functions

use chrono::NaiveDate;

/// Format an ISO `YYYY-MM-DD` date string as a long US English date,
/// e.g. "Monday, January 15, 2024".
///
/// Works on a plain calendar date with no timezone component, so the
/// rendered weekday and day always match the input date whatever the
/// host timezone is. Unparseable input is returned unchanged.
pub fn long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
