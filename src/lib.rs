//! # Mallow - a small LISP reader and printer
//!
//! [![Crates.io](https://img.shields.io/crates/v/mallow.svg)](https://crates.io/crates/mallow)
//! [![Documentation](https://docs.rs/mallow/badge.svg)](https://docs.rs/mallow)
//! [![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)
//!
//! The reader front-end of a small LISP-family interpreter: source text goes
//! in, a tree of tagged value forms comes out, and every form renders back
//! to canonical text. Evaluation is an identity pass-through for now; the
//! shipped binary is a read-print loop.
//!
//! ## Quick Start
//!
//! Parse a form and render it back:
//!
//! ```rust
//! use mallow::Reader;
//!
//! # fn main() -> mallow::Result<()> {
//! let ast = Reader::parse("(+ 1 (+ 2 3))")?;
//! assert_eq!(ast.to_string(), "(+ 1 (+ 2 3))");
//!
//! // Whitespace and commas normalize away in the canonical rendering
//! let ast = Reader::parse("[+1,,  [+2 3   ]   ]")?;
//! assert_eq!(ast.to_string(), "[+1 [+2 3]]");
//! # Ok(())
//! # }
//! ```
//!
//! Tokenize without parsing:
//!
//! ```rust
//! use mallow::Scanner;
//!
//! # fn main() -> mallow::Result<()> {
//! let mut scanner = Scanner::new("(a b) ; trailing comment");
//! let tokens = scanner.scan_tokens()?;
//! let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(texts, ["(", "a", "b", ")"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Atoms**: numbers (`1`, `-123`, `+7`) and symbols, where symbols also
//!   cover `:keywords` and verbatim `"string"` tokens
//! - **Composites**: lists `(1 2 3)`, vectors `[1 2 3]`, hash-maps
//!   `{:key value}`
//! - **Reader macros**: `'x`, `` `x ``, `~x`, `~@x`, `@x` wrap the next form
//!   in `(quote x)`, `(quasiquote x)`, `(unquote x)`, `(splice-unquote x)`,
//!   `(deref x)`
//! - Commas are whitespace; `;` comments run to end of line
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Scanner → Tokens → Reader → Value → (identity eval) → Rendering
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - tokenizes source text into verbatim tokens
//! - [`Reader`] - recursive-descent parser from tokens to one [`Value`] form
//! - [`Value`] - the tagged form tree, rendering via `Display`
//! - [`Error`] - the single error family shared by scanner and reader
//!
//! ## Error Handling
//!
//! Scanner and reader share one fatal error family, so a caller can catch
//! "any reader error" uniformly:
//!
//! ```rust
//! use mallow::{Error, Reader};
//!
//! match Reader::parse("(1 2") {
//!     Ok(_) => panic!("should have failed"),
//!     Err(err) => {
//!         assert_eq!(err, Error::EndOfInput);
//!         assert_eq!(err.to_string(), "end of input");
//!     }
//! }
//! ```

/// Version of the Mallow reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token};
pub use parser::{Reader, Value};
