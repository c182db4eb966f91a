//! Error types for the Mallow reader

use thiserror::Error;

/// Reader errors
///
/// Every variant is fatal to the current parse call; nothing is retried
/// internally and no partial tree is returned. The REPL is the only
/// recovery point: it catches this family, prints the message, and moves
/// on to the next input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Scanner errors
    /// String literal missing its closing quote before end of input
    ///
    /// **Triggered by:** `"abc` (opening quote never closed)
    #[error("unbalanced string delimiter; for string {literal}")]
    UnbalancedString {
        /// The partial literal scanned so far, including the opening quote
        literal: String,
        /// Line number where the literal starts (1-indexed)
        line: usize,
    },

    /// A `\` in a string literal followed by a character outside `\`, `"`, `n`
    ///
    /// **Triggered by:** `"a\qb"` (`\q` is not a recognized escape)
    #[error("unrecognized escape sequence; for string {literal}")]
    UnrecognizedEscape {
        /// The partial literal scanned so far, including the opening quote
        literal: String,
        /// Line number where the escape appears (1-indexed)
        line: usize,
    },

    // Parser errors
    /// Parser expected a specific opening delimiter and found something else
    ///
    /// Defensive: unreachable as long as `read_form` dispatch is correct.
    #[error("expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token text
        expected: String,
        /// Actual token text received
        got: String,
    },

    /// A composite form's closing delimiter was never found
    ///
    /// **Triggered by:** `(1 2`, `[1 2`, `{` (tokens ran out first)
    #[error("end of input")]
    EndOfInput,
}

/// Result type for Mallow reader operations
pub type Result<T> = std::result::Result<T, Error>;
