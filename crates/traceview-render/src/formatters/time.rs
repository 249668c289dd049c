use chrono::{DateTime, Utc};

/// Local time-of-day for the step metadata line.
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string()
}

// Beyond this the i64 nanosecond path would overflow; fall back to plain
// float formatting.
const MAX_EXACT_SECONDS: f64 = 4.0e9;

/// Fixed two-decimal duration with an `s` suffix.
///
/// Rounds half-up on a short decimal expansion of the value, so a runtime
/// written as `1.005` formats as `"1.01s"` even though its nearest binary
/// representation sits just below the midpoint.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() || !(0.0..=MAX_EXACT_SECONDS).contains(&seconds) {
        return format!("{:.2}s", seconds);
    }

    let nanos = (seconds * 1e9).round() as i64;
    let cents = (nanos + 5_000_000) / 10_000_000;
    format!("{}.{:02}s", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_time_is_a_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap();
        let out = format_time(ts);
        assert_eq!(out.len(), 8);
        assert_eq!(out.matches(':').count(), 2);
    }

    #[test]
    fn format_seconds_fixes_two_decimals() {
        assert_eq!(format_seconds(3.5), "3.50s");
        assert_eq!(format_seconds(1.23), "1.23s");
        assert_eq!(format_seconds(0.0), "0.00s");
        assert_eq!(format_seconds(12.0), "12.00s");
    }

    #[test]
    fn format_seconds_rounds_half_up_at_the_boundary() {
        assert_eq!(format_seconds(1.005), "1.01s");
        assert_eq!(format_seconds(1.235), "1.24s");
        assert_eq!(format_seconds(0.0049999), "0.00s");
        assert_eq!(format_seconds(0.005), "0.01s");
    }
}
