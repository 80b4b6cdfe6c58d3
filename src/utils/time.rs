//! Timestamp helpers
//!
//! Clear timestamps are stored as epoch milliseconds and shown to users in
//! local time as "Today at 3:42 PM", "Yesterday at 9:05 AM", or
//! "Mar 5 at 11:30 PM".

use chrono::{DateTime, Datelike, Local, Timelike, Utc};

/// Current time as epoch milliseconds
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a persisted clear timestamp for display
///
/// An absent or unrepresentable timestamp renders as "Never".
#[must_use]
pub fn format_last_cleared(timestamp_ms: Option<i64>) -> String {
    let Some(ms) = timestamp_ms else {
        return "Never".to_string();
    };
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(ms) else {
        return "Never".to_string();
    };

    let local = utc.with_timezone(&Local);
    let date = local.date_naive();
    let today = Local::now().date_naive();

    let prefix = if date == today {
        "Today".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        format!("{} {}", local.format("%b"), local.day())
    };

    let (is_pm, hour) = local.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{prefix} at {hour}:{:02} {meridiem}", local.minute())
}

/// "1 time" / "3 times" phrasing for the clear counter
#[must_use]
pub fn format_clear_count(count: u32) -> String {
    if count == 1 {
        format!("{count} time")
    } else {
        format!("{count} times")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_absent_timestamp_is_never() {
        assert_eq!(format_last_cleared(None), "Never");
    }

    #[test]
    fn test_today_prefix() {
        let formatted = format_last_cleared(Some(now_millis()));
        assert!(formatted.starts_with("Today at "), "got {formatted:?}");
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }

    #[test]
    fn test_yesterday_prefix() {
        let yesterday = Local::now() - Duration::days(1);
        let formatted = format_last_cleared(Some(yesterday.timestamp_millis()));
        assert!(formatted.starts_with("Yesterday at "), "got {formatted:?}");
    }

    #[test]
    fn test_older_dates_use_month_and_day() {
        let older = Local::now() - Duration::days(30);
        let formatted = format_last_cleared(Some(older.timestamp_millis()));
        let expected_prefix = format!("{} {}", older.format("%b"), older.day());
        assert!(
            formatted.starts_with(&expected_prefix),
            "got {formatted:?}, expected prefix {expected_prefix:?}"
        );
    }

    #[test]
    fn test_minutes_are_zero_padded() {
        // 12:05 AM local time today
        let midnight_five = Local::now()
            .date_naive()
            .and_hms_opt(0, 5, 0)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap();
        let formatted = format_last_cleared(Some(midnight_five.timestamp_millis()));
        assert_eq!(formatted, "Today at 12:05 AM");
    }

    #[test]
    fn test_clear_count_pluralization() {
        assert_eq!(format_clear_count(0), "0 times");
        assert_eq!(format_clear_count(1), "1 time");
        assert_eq!(format_clear_count(5), "5 times");
    }
}
