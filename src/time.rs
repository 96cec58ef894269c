//! Time Formatting
//!
//! Relative labels for the activity feed and date helpers for form inputs.

use chrono::{DateTime, NaiveDate, Utc};

/// Relative label for `then`, as seen at `now`.
///
/// Buckets: under a minute, minutes, hours, days. The unit is always
/// plural, matching the wording the deployed client shows. Times in the
/// future count as "just now".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Gerade eben".to_string();
    }
    if minutes < 60 {
        return format!("Vor {} Minuten", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("Vor {} Stunden", hours);
    }
    format!("Vor {} Tagen", hours / 24)
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`) as midnight UTC.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Format a timestamp for an `<input type="date">`
pub fn to_date_input(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Display format for due dates in lists
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(now: DateTime<Utc>, ago: Duration) -> String {
        format_relative(now - ago, now)
    }

    #[test]
    fn test_relative_buckets() {
        let now = Utc::now();
        assert_eq!(at(now, Duration::zero()), "Gerade eben");
        assert_eq!(at(now, Duration::seconds(59)), "Gerade eben");
        assert_eq!(at(now, Duration::minutes(1)), "Vor 1 Minuten");
        assert_eq!(at(now, Duration::minutes(59)), "Vor 59 Minuten");
        assert_eq!(at(now, Duration::minutes(60)), "Vor 1 Stunden");
        assert_eq!(at(now, Duration::hours(23) + Duration::minutes(59)), "Vor 23 Stunden");
        assert_eq!(at(now, Duration::hours(24)), "Vor 1 Tagen");
        assert_eq!(at(now, Duration::days(12)), "Vor 12 Tagen");
    }

    #[test]
    fn test_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative(now + Duration::minutes(5), now), "Gerade eben");
    }

    #[test]
    fn test_date_input_round_trip() {
        let parsed = parse_date_input("2024-03-09").unwrap();
        assert_eq!(to_date_input(parsed), "2024-03-09");
        assert_eq!(format_date(parsed), "09.03.2024");
    }

    #[test]
    fn test_date_input_rejects_garbage() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("09.03.2024"), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
    }
}
