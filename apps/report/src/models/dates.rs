use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses the date shapes the audit payload is known to carry:
/// `YYYY-MM-DD`, RFC 3339 timestamps, and naive `YYYY-MM-DDTHH:MM:SS[.f]`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

/// Formats a payload date as `Mar 5, 2024`. Unparseable input is returned verbatim.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
