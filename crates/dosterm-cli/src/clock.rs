use chrono::{Local, Utc};

use dosterm_core::Clock;

/// The system clock, formatted like a US-English locale.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now_ms(&self) -> f64 {
        Utc::now().timestamp_millis() as f64
    }

    fn time_string(&self) -> String {
        Local::now().format("%-I:%M:%S %p").to_string()
    }

    fn date_string(&self) -> String {
        Local::now().format("%-m/%-d/%Y").to_string()
    }
}
