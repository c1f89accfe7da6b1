//! Command execution result type.

use crate::models::OutputLine;

/// Session change requested by a command.
///
/// Handlers never mutate the session; the shell applies the effect after the
/// handler returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Record the command, nothing else changes.
    None,
    /// Descend into the named child directory.
    PushDir(String),
    /// Go up one level.
    PopDir,
    /// Clear history and do not record this command (`cls`).
    ClearScreen,
    /// Clear history, then record this command (`read` full-screen view).
    TakeOver,
    /// Leave the terminal view; nothing is recorded (`exit`).
    Exit,
}

/// Result of executing a command.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Change to apply to the session
    pub effect: Effect,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: Effect::None,
        }
    }

    /// Create a result with a single text line.
    pub fn line(text: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::text(text)])
    }

    /// Create a result that only requests a session change.
    pub fn effect(effect: Effect) -> Self {
        Self {
            output: vec![],
            effect,
        }
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self::output(vec![])
    }

    /// Attach an effect to this result.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Output as plain strings.
    pub fn texts(&self) -> Vec<&str> {
        self.output.iter().map(OutputLine::as_str).collect()
    }
}
