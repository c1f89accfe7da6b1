//! Output line types handed to the rendering layer.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Represents a single line of command output with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Plain text output
    Text(String),
    /// Error report
    Error(String),
    /// Blank line
    Empty,
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    /// Plain text line. An empty string becomes [`OutputLineData::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Self::empty()
        } else {
            Self::new(OutputLineData::Text(s))
        }
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// The text of the line as it is displayed.
    pub fn as_str(&self) -> &str {
        match &self.data {
            OutputLineData::Text(s) | OutputLineData::Error(s) => s,
            OutputLineData::Empty => "",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, OutputLineData::Error(_))
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl Eq for OutputLine {}
