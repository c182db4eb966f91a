use std::fmt;

use serde::{Deserialize, Serialize};

/// A single token from the source text
///
/// The token text is a verbatim, non-empty slice of the source. Tokens carry
/// no kind tag: the reader classifies each one by its leading character(s).
/// Line and column are kept for error reporting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Verbatim source text of the token
    pub text: String,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
    /// Column number just past the token (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(text: String, line: usize, column: usize) -> Self {
        Token { text, line, column }
    }

    /// The token text as a string slice
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
