//! crates/logging/src/format.rs
//! Timestamp, elapsed-time and argument formatting.
//!
//! Every formatted message has the shape
//! `Www Mmm dd hh:mm:ss yyyy +S.mmm s <arguments>`: a fixed-width calendar
//! stamp, the time since the previous message, and the caller's arguments
//! concatenated without separators.

use std::fmt::{self, Display, Write as _};
use std::time::{Duration, Instant, SystemTime};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// Width of the calendar timestamp produced by [`calendar_timestamp`].
pub const TIMESTAMP_WIDTH: usize = 24;

/// `ctime`-style layout: `Thu Jul 31 14:02:09 2025`.
const CALENDAR_FORMAT: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day padding:space] [hour padding:zero]:[minute padding:zero]:[second padding:zero] [year]"
);

const CALENDAR_FALLBACK: &str = "Thu Jan  1 00:00:00 1970";

/// Formats `time` as a fixed-width calendar string.
///
/// The stamp is rendered in UTC, not the local time zone.
pub fn calendar_timestamp(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(CALENDAR_FORMAT)
        .unwrap_or_else(|_| CALENDAR_FALLBACK.to_owned())
}

/// Renders a duration as seconds with millisecond precision, e.g. `0.123`.
pub fn seconds_millis(duration: Duration) -> String {
    let millis = duration.as_millis();
    format!("{}.{:03}", millis / 1000, millis % 1000)
}

/// Appends every argument's `Display` output to `buffer`, in order, without separators.
pub fn concat_into(buffer: &mut String, args: &[&dyn Display]) {
    for arg in args {
        let _ = write!(buffer, "{arg}");
    }
}

/// Concatenates arguments into a fresh string.
pub fn concat(args: &[&dyn Display]) -> String {
    let mut buffer = String::new();
    concat_into(&mut buffer, args);
    buffer
}

/// Stateful formatter remembering when the previous message was formatted.
#[derive(Debug)]
pub struct MessageFormatter {
    last_log: Instant,
}

impl MessageFormatter {
    /// Creates a formatter whose first elapsed value is measured from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_log: Instant::now(),
        }
    }

    /// Instant of the most recently formatted message (or construction).
    #[must_use]
    pub const fn last_log(&self) -> Instant {
        self.last_log
    }

    /// Formats `args` and records now as the last log time.
    pub fn format(&mut self, args: &[&dyn Display]) -> String {
        self.format_at(Instant::now(), SystemTime::now(), args)
    }

    /// Formats `args` against explicit clock readings.
    ///
    /// `now` earlier than the previous message (never the case for
    /// [`Instant`]) saturates to a zero elapsed time.
    pub fn format_at(
        &mut self,
        now: Instant,
        wall_clock: SystemTime,
        args: &[&dyn Display],
    ) -> String {
        let elapsed = now.saturating_duration_since(self.last_log);
        if now > self.last_log {
            self.last_log = now;
        }

        let mut buffer = String::with_capacity(TIMESTAMP_WIDTH + 16);
        buffer.push_str(&calendar_timestamp(wall_clock));
        let _ = write!(buffer, " +{} s ", seconds_millis(elapsed));
        concat_into(&mut buffer, args);
        buffer
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a pre-formatted [`fmt::Arguments`] so it can join an argument list.
pub struct Preformatted<'a>(pub fmt::Arguments<'a>);

impl Display for Preformatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn calendar_timestamp_matches_ctime_layout() {
        // 2025-07-31 14:02:09 UTC
        let time = UNIX_EPOCH + Duration::from_secs(1_753_970_529);
        assert_eq!(calendar_timestamp(time), "Thu Jul 31 14:02:09 2025");
    }

    #[test]
    fn calendar_timestamp_pads_single_digit_days_with_space() {
        let time = UNIX_EPOCH + Duration::from_secs(86_400 * 4);
        let stamp = calendar_timestamp(time);
        assert_eq!(stamp, "Mon Jan  5 00:00:00 1970");
        assert_eq!(stamp.len(), TIMESTAMP_WIDTH);
    }

    #[test]
    fn seconds_millis_keeps_three_decimals() {
        assert_eq!(seconds_millis(Duration::ZERO), "0.000");
        assert_eq!(seconds_millis(Duration::from_millis(123)), "0.123");
        assert_eq!(seconds_millis(Duration::from_millis(61_005)), "61.005");
        assert_eq!(seconds_millis(Duration::from_micros(1_999)), "0.001");
    }

    #[test]
    fn concat_inserts_no_separator() {
        let count = 3;
        let ratio = 0.5;
        assert_eq!(concat(&[&"count=", &count, &" ratio=", &ratio]), "count=3 ratio=0.5");
        assert_eq!(concat(&[]), "");
    }

    #[test]
    fn format_at_reports_elapsed_and_updates_last_log() {
        let mut formatter = MessageFormatter::new();
        let start = formatter.last_log();
        let later = start + Duration::from_millis(250);
        let wall = UNIX_EPOCH + Duration::from_secs(1_753_970_529);

        let line = formatter.format_at(later, wall, &[&"hello"]);
        assert_eq!(line, "Thu Jul 31 14:02:09 2025 +0.250 s hello");
        assert_eq!(formatter.last_log(), later);

        let line = formatter.format_at(later, wall, &[&"again"]);
        assert!(line.contains(" +0.000 s again"));
    }

    #[test]
    fn format_at_saturates_backwards_clock() {
        let mut formatter = MessageFormatter::new();
        let start = formatter.last_log();
        let later = start + Duration::from_millis(10);
        formatter.format_at(later, SystemTime::now(), &[]);

        let line = formatter.format_at(start, SystemTime::now(), &[]);
        assert!(line.ends_with(" +0.000 s "));
        assert_eq!(formatter.last_log(), later);
    }

    #[test]
    fn preformatted_renders_arguments() {
        let value = 42;
        let rendered = concat(&[&Preformatted(format_args!("{value:>4}"))]);
        assert_eq!(rendered, "  42");
    }
}
