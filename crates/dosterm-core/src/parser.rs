//! Input line tokenizer.

/// One parsed input line: a lowercased command name and its arguments.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Lowercased first token, empty for blank input.
    pub name: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

impl Invocation {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Split `line` on runs of whitespace.
pub fn parse_line(line: &str) -> Invocation {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().map(str::to_lowercase).unwrap_or_default();
    let args = tokens.map(str::to_string).collect();
    Invocation { name, args }
}
