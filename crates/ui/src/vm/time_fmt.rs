use chrono::{DateTime, Local, Utc};

/// Countdown label, zero-padded minutes and seconds.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Timestamp in the viewer's local time.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    #[test]
    fn mmss_pads_both_parts() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(45), "00:45");
        assert_eq!(format_mmss(60), "01:00");
        assert_eq!(format_mmss(125), "02:05");
    }

    #[test]
    fn datetime_is_minute_precision() {
        assert_eq!(format_datetime(fixed_now()).len(), "2023-11-14 22:13".len());
    }
}
