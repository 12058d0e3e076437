//! crates/logging/src/flags.rs
//! Named timers ("flags") measuring the interval between two points.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Map from flag name to the instant it was armed.
///
/// The tracker owns its own lock, independent of the logger's emission lock.
/// Callers that report through the logger must do so after the tracker
/// method returns, so the flag lock is never held while emitting.
#[derive(Debug, Default)]
pub struct FlagTracker {
    flags: Mutex<HashMap<String, Instant>>,
}

impl FlagTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Instant>> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Arms `name` at `now`. Returns `true` when an existing flag was overwritten.
    pub fn add_at(&self, name: &str, now: Instant) -> bool {
        self.lock().insert(name.to_owned(), now).is_some()
    }

    /// Arms `name` at the current instant.
    pub fn add(&self, name: &str) -> bool {
        self.add_at(name, Instant::now())
    }

    /// Removes `name`, returning the time elapsed between arming and `now`.
    pub fn release_at(&self, name: &str, now: Instant) -> Option<Duration> {
        self.lock()
            .remove(name)
            .map(|started| now.saturating_duration_since(started))
    }

    /// Removes `name`, returning the time elapsed since it was armed.
    pub fn release(&self, name: &str) -> Option<Duration> {
        self.release_at(name, Instant::now())
    }

    /// Reports whether `name` is currently armed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Number of armed flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no flag is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
