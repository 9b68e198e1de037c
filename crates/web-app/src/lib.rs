#![warn(clippy::pedantic)]

use chrono::{DateTime, Local, TimeZone, Utc};

pub mod clipboard;
pub mod clock;
pub mod copied;
pub mod log;

pub use clock::SystemClock;
pub use copied::{COPIED_TIMEOUT_MS, CopiedIndicator};

/// Human-readable time of the last update in the local time zone.
#[must_use]
pub fn format_updated_at(updated_at: DateTime<Utc>) -> String {
    format_in(updated_at, &Local)
}

fn format_in<Tz: TimeZone>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(tz)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "2024-03-01 23:30:00")]
    #[case(2 * 3600, "2024-03-02 01:30:00")]
    #[case(-5 * 3600, "2024-03-01 18:30:00")]
    fn test_format_in(#[case] offset: i32, #[case] expected: &str) {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();

        assert_eq!(
            format_in(time, &FixedOffset::east_opt(offset).unwrap()),
            expected
        );
    }
}
