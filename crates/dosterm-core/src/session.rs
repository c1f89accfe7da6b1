//! Per-terminal session state: working directory, history and recall cursor.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{PATH_SEPARATOR, PROMPT_MARKER, ROOT_NAME};
use crate::models::OutputLine;

static HISTORY_RECORD_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// One executed command and what it printed.
#[derive(Clone, Debug)]
pub struct HistoryRecord {
    /// Unique ID for keyed rendering
    pub id: usize,
    /// Prompt that was shown when the command was entered
    pub prompt: String,
    /// Raw input line
    pub command: String,
    pub output: Vec<OutputLine>,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: f64,
}

impl HistoryRecord {
    pub fn new(
        prompt: impl Into<String>,
        command: impl Into<String>,
        output: Vec<OutputLine>,
        timestamp_ms: f64,
    ) -> Self {
        Self {
            id: HISTORY_RECORD_COUNTER.fetch_add(1, Ordering::Relaxed),
            prompt: prompt.into(),
            command: command.into(),
            output,
            timestamp_ms,
        }
    }
}

impl PartialEq for HistoryRecord {
    fn eq(&self, other: &Self) -> bool {
        self.prompt == other.prompt
            && self.command == other.command
            && self.output == other.output
            && self.timestamp_ms == other.timestamp_ms
    }
}

/// What a history recall does to the caller's input buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Leave the buffer as it is.
    Keep,
    /// Replace the buffer with this text.
    Set(String),
}

/// Mutable state of one running terminal.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellSession {
    current_path: Vec<String>,
    history: Vec<HistoryRecord>,
    history_cursor: Option<usize>,
}

impl ShellSession {
    /// A session at the root with empty history.
    pub fn new() -> Self {
        Self {
            current_path: vec![ROOT_NAME.to_string()],
            history: Vec::new(),
            history_cursor: None,
        }
    }

    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    pub fn is_at_root(&self) -> bool {
        self.current_path.len() <= 1
    }

    /// Current path joined with the separator, e.g. `C:\DOS`.
    pub fn display_path(&self) -> String {
        self.current_path.join(PATH_SEPARATOR)
    }

    /// Prompt string, e.g. `C:\DOS>`.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.display_path(), PROMPT_MARKER)
    }

    /// Descend into `name`. The caller has checked that it is a directory.
    pub fn push_dir(&mut self, name: impl Into<String>) {
        self.current_path.push(name.into());
    }

    /// Go up one level. A no-op at the root.
    pub fn pop_dir(&mut self) {
        if !self.is_at_root() {
            self.current_path.pop();
        }
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Append a record and stop any recall in progress.
    pub fn record(&mut self, record: HistoryRecord) {
        self.history.push(record);
        self.history_cursor = None;
    }

    /// Drop every record and stop any recall in progress.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history_cursor = None;
    }

    /// Step back through history (ArrowUp).
    pub fn recall_previous(&mut self) -> Recall {
        if self.history.is_empty() {
            return Recall::Keep;
        }

        let index = match self.history_cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(index);
        Recall::Set(self.history[index].command.clone())
    }

    /// Step forward through history (ArrowDown).
    ///
    /// Moving past the newest record ends the recall and clears the buffer.
    pub fn recall_next(&mut self) -> Recall {
        let Some(current) = self.history_cursor else {
            return Recall::Keep;
        };

        let index = current + 1;
        match self.history.get(index) {
            Some(record) => {
                self.history_cursor = Some(index);
                Recall::Set(record.command.clone())
            }
            None => {
                self.history_cursor = None;
                Recall::Set(String::new())
            }
        }
    }
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}
