use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed form
///
/// Every composite variant owns its children exclusively; the tree is
/// acyclic and immutable once the reader returns it. `Display` renders the
/// canonical text form, which doubles as the round-trip oracle in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric literal, stored as double precision
    Number {
        /// The numeric value
        value: f64,
        /// Whether the literal was written with a leading `+`
        /// (kept only so rendering can round-trip the source)
        explicit_plus: bool,
    },
    /// Symbol - also covers `:keyword` tokens and verbatim string literals,
    /// which are not distinguished structurally in this core
    Symbol(String),
    /// List form, delimited by `(` `)`
    List(Vec<Value>),
    /// Vector form, delimited by `[` `]`
    Vector(Vec<Value>),
    /// Hash-map form, delimited by `{` `}`
    ///
    /// Entries are keyed by each key atom's rendered string and keep
    /// insertion order. Re-inserting a key keeps its position and takes the
    /// new value.
    HashMap(Vec<(String, Value)>),
    /// `'form` reader macro
    Quote(Box<Value>),
    /// `` `form `` reader macro
    Quasiquote(Box<Value>),
    /// `~form` reader macro
    Unquote(Box<Value>),
    /// `~@form` reader macro
    SpliceUnquote(Box<Value>),
    /// `@form` reader macro
    Deref(Box<Value>),
}

impl Value {
    /// Creates a number from its parsed value and sign spelling
    pub fn number(value: f64, explicit_plus: bool) -> Self {
        Value::Number {
            value,
            explicit_plus,
        }
    }

    /// Creates a symbol from any string-like name
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Returns the form kind as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number { .. } => "number",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Vector(_) => "vector",
            Value::HashMap(_) => "hash-map",
            Value::Quote(_) => "quote",
            Value::Quasiquote(_) => "quasiquote",
            Value::Unquote(_) => "unquote",
            Value::SpliceUnquote(_) => "splice-unquote",
            Value::Deref(_) => "deref",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number {
                value,
                explicit_plus,
            } => {
                if *explicit_plus {
                    write!(f, "+{}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Value::Symbol(name) => write!(f, "{}", name),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Vector(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::HashMap(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{} {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Quote(inner) => write!(f, "(quote {})", inner),
            Value::Quasiquote(inner) => write!(f, "(quasiquote {})", inner),
            Value::Unquote(inner) => write!(f, "(unquote {})", inner),
            Value::SpliceUnquote(inner) => write!(f, "(splice-unquote {})", inner),
            Value::Deref(inner) => write!(f, "(deref {})", inner),
        }
    }
}
