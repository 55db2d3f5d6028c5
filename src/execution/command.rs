//! Command line representation and tokenization.

/// A single shell command line, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    line: String,
}

impl CommandSpec {
    /// Create a spec from a raw command line.
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The original command text.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Split the command line into a program and its arguments.
    ///
    /// Tokenization is plain whitespace splitting with no shell quoting or
    /// escaping: `grep "a b"` becomes `grep`, `"a`, `b"`. This is how hook
    /// commands have always been split; quote-aware parsing would change
    /// behavior for existing commands containing literal quotes.
    ///
    /// Returns `None` for an empty or all-whitespace line.
    pub fn tokenize(&self) -> Option<(&str, Vec<&str>)> {
        let mut tokens = self.line.split_whitespace();
        let program = tokens.next()?;
        Some((program, tokens.collect()))
    }
}

impl From<&str> for CommandSpec {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl From<String> for CommandSpec {
    fn from(line: String) -> Self {
        Self::new(line)
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}
