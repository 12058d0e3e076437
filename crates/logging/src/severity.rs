//! crates/logging/src/severity.rs
//! Severity enumeration, ordering and stream routing.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Ordered classification of a log message's importance.
///
/// Lower numeric values are more severe. A message is emitted when its
/// severity is numerically less than or equal to the logger's threshold, so
/// [`Severity::Off`] as a threshold suppresses everything and
/// [`Severity::Trace`] permits everything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// No messages.
    Off = 0,
    /// Unrecoverable condition; emitting terminates the process.
    Critical = 1,
    /// Recoverable error.
    Error = 2,
    /// Advisory condition.
    Warning = 3,
    /// Normal operational output.
    Info = 4,
    /// Extra detail for interested users.
    Verbose = 5,
    /// Developer diagnostics.
    Debug = 6,
    /// Maximally verbose tracing.
    #[default]
    Trace = 7,
}

/// Output stream a severity is routed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Standard output; receives INFO and the progress bar.
    Standard,
    /// Diagnostic output; receives every other severity.
    Diagnostic,
}

impl Severity {
    /// Every severity in ascending numeric order.
    pub const ALL: [Self; 8] = [
        Self::Off,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Verbose,
        Self::Debug,
        Self::Trace,
    ];

    /// Column width of the bracketed tag, including trailing padding.
    pub const TAG_WIDTH: usize = 11;

    /// Numeric value of the severity.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric value back into a severity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Critical),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            4 => Some(Self::Info),
            5 => Some(Self::Verbose),
            6 => Some(Self::Debug),
            7 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Returns `true` when a message of severity `self` passes `threshold`.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        (self as u8) <= (threshold as u8)
    }

    /// Upper-case name used inside the bracketed tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Bracketed tag padded to [`Severity::TAG_WIDTH`] columns, e.g. `"[INFO]     "`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Off => "[OFF]      ",
            Self::Critical => "[CRITICAL] ",
            Self::Error => "[ERROR]    ",
            Self::Warning => "[WARNING]  ",
            Self::Info => "[INFO]     ",
            Self::Verbose => "[VERBOSE]  ",
            Self::Debug => "[DEBUG]    ",
            Self::Trace => "[TRACE]    ",
        }
    }

    /// Stream messages of this severity are written to. Fixed per severity.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Info => Stream::Standard,
            _ => Stream::Diagnostic,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: u8) -> Result<Self, ParseSeverityError> {
        Self::from_u8(value).ok_or_else(|| ParseSeverityError::new(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name (case-insensitive) or its numeric value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(value) = token.parse::<u8>() {
            return Self::try_from(value);
        }

        let severity = match token.to_ascii_lowercase().as_str() {
            "off" | "none" => Self::Off,
            "critical" | "fatal" => Self::Critical,
            "error" => Self::Error,
            "warning" | "warn" => Self::Warning,
            "info" => Self::Info,
            "verbose" => Self::Verbose,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => return Err(ParseSeverityError::new(token)),
        };
        Ok(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ordering_tests {
        use super::*;

        #[test]
        fn numeric_values_match_enumeration() {
            for (index, severity) in Severity::ALL.iter().enumerate() {
                assert_eq!(severity.as_u8() as usize, index);
                assert_eq!(Severity::from_u8(index as u8), Some(*severity));
            }
            assert_eq!(Severity::from_u8(8), None);
        }

        #[test]
        fn off_is_lowest_and_trace_highest() {
            assert!(Severity::Off < Severity::Critical);
            assert!(Severity::Debug < Severity::Trace);
            assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Trace));
        }

        #[test]
        fn passes_cross_product() {
            for message in Severity::ALL {
                for threshold in Severity::ALL {
                    assert_eq!(
                        message.passes(threshold),
                        message.as_u8() <= threshold.as_u8(),
                        "{message} against {threshold}"
                    );
                }
            }
        }
    }

    mod rendering_tests {
        use super::*;

        #[test]
        fn tags_share_fixed_width() {
            for severity in Severity::ALL {
                let tag = severity.tag();
                assert_eq!(tag.len(), Severity::TAG_WIDTH);
                assert!(tag.starts_with(&format!("[{}]", severity.name())));
            }
        }

        #[test]
        fn only_info_goes_to_standard_stream() {
            for severity in Severity::ALL {
                let expected = if severity == Severity::Info {
                    Stream::Standard
                } else {
                    Stream::Diagnostic
                };
                assert_eq!(severity.stream(), expected);
            }
        }

        #[test]
        fn display_uses_upper_case_name() {
            assert_eq!(Severity::Warning.to_string(), "WARNING");
        }
    }

    mod parsing_tests {
        use super::*;

        #[test]
        fn try_from_u8_accepts_enumeration_range() {
            assert_eq!(Severity::try_from(2_u8), Ok(Severity::Error));
            assert_eq!(Severity::try_from(7_u8), Ok(Severity::Trace));
            let error = Severity::try_from(8_u8).expect_err("out of range");
            assert_eq!(error.token(), "8");
        }

        #[test]
        fn parses_names_and_aliases() {
            assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
            assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
            assert_eq!(" Trace ".parse::<Severity>(), Ok(Severity::Trace));
            assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Critical));
        }

        #[test]
        fn parses_numeric_values() {
            assert_eq!("0".parse::<Severity>(), Ok(Severity::Off));
            assert_eq!("5".parse::<Severity>(), Ok(Severity::Verbose));
            assert!("9".parse::<Severity>().is_err());
        }

        #[test]
        fn rejects_unknown_names() {
            let error = "loud".parse::<Severity>().unwrap_err();
            assert!(error.to_string().contains("loud"));
        }
    }
}
