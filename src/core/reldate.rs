// src/core/reldate.rs
// Registry timestamps and "3 weeks ago" style phrases.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse the registry's `last_updated` value, e.g. `2024-01-15 10:21am GMT`.
/// Falls back to a bare `YYYY-MM-DD` (midnight UTC). Anything else → `None`.
pub fn parse_registry_date(s: &str) -> Option<DateTime<Utc>> {
    let t = s.trim();
    let t = t.strip_suffix("GMT").unwrap_or(t).trim_end();

    for fmt in ["%Y-%m-%d %I:%M%p", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(dt.and_utc());
        }
    }

    let date_part = t.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn phrase(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}

/// Human phrase for the distance from `then` to `now`.
/// Timestamps in the future (clock skew) read as "just now".
pub fn relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return s!("just now");
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if mins < 60 {
        phrase(mins, "minute")
    } else if hours < 24 {
        phrase(hours, "hour")
    } else if days < 7 {
        phrase(days, "day")
    } else if days < 35 {
        phrase(days / 7, "week")
    } else if days < 365 {
        phrase(days / 30, "month")
    } else {
        phrase(days / 365, "year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_registry_format() {
        let dt = parse_registry_date("2024-01-15 10:21am GMT").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 21, 0).unwrap());

        let pm = parse_registry_date("2024-01-15 3:05pm GMT").unwrap();
        assert_eq!(pm, Utc.with_ymd_and_hms(2024, 1, 15, 15, 5, 0).unwrap());
    }

    #[test]
    fn parses_bare_date_and_rejects_garbage() {
        let dt = parse_registry_date("2023-12-31").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap());
        assert!(parse_registry_date("yesterday").is_none());
        assert!(parse_registry_date("").is_none());
    }

    #[test]
    fn phrases() {
        let n = now();
        assert_eq!(relative_to(n - Duration::seconds(5), n), "just now");
        assert_eq!(relative_to(n + Duration::hours(2), n), "just now");
        assert_eq!(relative_to(n - Duration::minutes(1), n), "1 minute ago");
        assert_eq!(relative_to(n - Duration::hours(5), n), "5 hours ago");
        assert_eq!(relative_to(n - Duration::days(1), n), "1 day ago");
        assert_eq!(relative_to(n - Duration::days(21), n), "3 weeks ago");
        assert_eq!(relative_to(n - Duration::days(40), n), "1 month ago");
        assert_eq!(relative_to(n - Duration::days(200), n), "6 months ago");
        assert_eq!(relative_to(n - Duration::days(800), n), "2 years ago");
    }
}
