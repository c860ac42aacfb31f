use chrono::{DateTime, Datelike, Utc};

/// Format how long ago something happened, relative to `now`:
/// - "just now", "5 minutes ago", "2 hours ago", "Yesterday", "3 days ago"
/// - Absolute after a week: "Jan 15", "Dec 3, 2024"
pub fn format_relative(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_age(duration.num_seconds().max(0))
    } else {
        format_absolute(timestamp, now)
    }
}

fn format_age(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 1 {
        format!("{} days ago", days)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if hours > 0 {
        format!("{} {} ago", hours, plural(hours, "hour"))
    } else if minutes > 0 {
        format!("{} {} ago", minutes, plural(minutes, "minute"))
    } else {
        "just now".to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        let now = fixed_now();
        assert_eq!(format_relative(&(now - Duration::seconds(30)), &now), "just now");
        // Clock skew shouldn't produce negative ages
        assert_eq!(format_relative(&(now + Duration::seconds(5)), &now), "just now");
    }

    #[test]
    fn test_minutes_and_hours() {
        let now = fixed_now();
        assert_eq!(format_relative(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative(&(now - Duration::minutes(45)), &now), "45 minutes ago");
        assert_eq!(format_relative(&(now - Duration::hours(2)), &now), "2 hours ago");
        assert_eq!(format_relative(&(now - Duration::hours(1)), &now), "1 hour ago");
    }

    #[test]
    fn test_days() {
        let now = fixed_now();
        assert_eq!(format_relative(&(now - Duration::hours(30)), &now), "Yesterday");
        assert_eq!(format_relative(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(format_relative(&(now - Duration::days(6)), &now), "6 days ago");
    }

    #[test]
    fn test_absolute() {
        let now = fixed_now();
        assert_eq!(format_relative(&(now - Duration::days(30)), &now), "May 16");
        assert_eq!(format_relative(&(now - Duration::days(400)), &now), "May 11, 2024");
    }
}
