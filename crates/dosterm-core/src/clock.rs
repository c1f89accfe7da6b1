//! Wall-clock access for `time`, `date` and history timestamps.
//!
//! The core never reads the system clock itself; front ends pass an
//! implementation in with each submitted line.

/// Source of the current wall-clock time.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;

    /// Locale-formatted time of day, e.g. `3:04:05 PM`.
    fn time_string(&self) -> String;

    /// Locale-formatted date, e.g. `10/14/2026`.
    fn date_string(&self) -> String;
}

/// A clock that always reports the same instant.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedClock {
    pub now_ms: f64,
    pub time: String,
    pub date: String,
}

impl FixedClock {
    pub fn new(now_ms: f64, time: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            now_ms,
            time: time.into(),
            date: date.into(),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(0.0, "12:00:00 AM", "1/1/1970")
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn time_string(&self) -> String {
        self.time.clone()
    }

    fn date_string(&self) -> String {
        self.date.clone()
    }
}
