//! crates/logging/src/line_mode.rs
//! Line termination used when writing to a [`Sink`](crate::Sink).

/// Controls how a [`Sink`](crate::Sink) terminates each write.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum LineMode {
    /// Append a newline after the rendered text; used for log lines.
    #[default]
    Newline,
    /// Append a carriage return so the next write overwrites the line; used
    /// by the progress bar.
    CarriageReturn,
}

impl LineMode {
    /// Terminator bytes written after the rendered text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinylog::LineMode;
    ///
    /// assert_eq!(LineMode::Newline.terminator(), b"\n");
    /// assert_eq!(LineMode::CarriageReturn.terminator(), b"\r");
    /// ```
    #[must_use]
    pub const fn terminator(self) -> &'static [u8] {
        match self {
            Self::Newline => b"\n",
            Self::CarriageReturn => b"\r",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineMode;

    #[test]
    fn default_terminates_with_newline() {
        assert_eq!(LineMode::default(), LineMode::Newline);
        assert_eq!(LineMode::default().terminator(), b"\n");
    }
}
