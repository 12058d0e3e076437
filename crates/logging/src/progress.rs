//! crates/logging/src/progress.rs
//! Progress bar state, redraw policy and rendering.
//!
//! The bar reflects `current / (total - 1)` and is redrawn only when the
//! percentage advanced by at least one point since the last redraw, when the
//! total changed (a new session), or on the final iteration. Totals of `0` or
//! `1` leave no room for intermediate steps: such sessions are reported as
//! complete (100 %) and every call redraws.

use crate::severity::Severity;

/// Width of the bar between the brackets, in characters.
pub const BAR_WIDTH: usize = 50;

/// A displayed `(current, total)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Zero-based iteration index.
    pub current: usize,
    /// Number of iterations in the session.
    pub total: usize,
}

impl ProgressSnapshot {
    /// Completion percentage in `0.0..=100.0`.
    #[must_use]
    pub fn percentage(self) -> f64 {
        let denominator = self.total.saturating_sub(1);
        if denominator == 0 {
            return 100.0;
        }
        (self.current as f64 / denominator as f64 * 100.0).min(100.0)
    }

    /// `true` on (or past) the last iteration of the session.
    #[must_use]
    pub const fn is_final(self) -> bool {
        self.current.saturating_add(1) >= self.total
    }

    /// Renders the bar without a line terminator.
    ///
    /// The bar is indented so it lines up with the text of log lines.
    #[must_use]
    pub fn render(self) -> String {
        let percentage = self.percentage();
        let filled = ((BAR_WIDTH as f64 * percentage / 100.0) as usize).min(BAR_WIDTH);
        format!(
            "{:indent$}[{}{}] {}%",
            "",
            "=".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            percentage as u32,
            indent = Severity::TAG_WIDTH,
        )
    }
}

/// Last displayed progress, used to suppress redundant redraws.
#[derive(Debug, Default)]
pub struct ProgressState {
    last: Option<ProgressSnapshot>,
}

impl ProgressState {
    /// Creates a state with nothing displayed.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Most recently displayed snapshot.
    #[must_use]
    pub const fn last(&self) -> Option<ProgressSnapshot> {
        self.last
    }

    /// Decides whether `(current, total)` should be drawn.
    #[must_use]
    pub fn should_redraw(&self, current: usize, total: usize) -> bool {
        let next = ProgressSnapshot { current, total };
        let Some(last) = self.last else {
            return true;
        };

        next.percentage() - last.percentage() >= 1.0 || total != last.total || next.is_final()
    }

    /// Records `(current, total)` and returns the rendered bar when it must be redrawn.
    pub fn advance(&mut self, current: usize, total: usize) -> Option<String> {
        if !self.should_redraw(current, total) {
            return None;
        }

        let snapshot = ProgressSnapshot { current, total };
        self.last = Some(snapshot);
        Some(snapshot.render())
    }

    /// Forgets the displayed snapshot so the next call always redraws.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
