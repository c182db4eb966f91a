use super::value::Value;
use crate::error::{Error, Result};
use crate::lexer::{Scanner, Token};

/// Recursive-descent reader for Mallow forms
///
/// Consumes the scanned token sequence with a single forward cursor - one
/// token of lookahead via `peek`, no backtracking. Each call to
/// [`Reader::parse`] reads exactly one form.
pub struct Reader {
    tokens: Vec<Token>,
    current: usize,
}

impl Reader {
    /// Creates a reader over an already-scanned token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Reader { tokens, current: 0 }
    }

    /// Parses one form from source text
    pub fn parse(input: &str) -> Result<Value> {
        let tokens = Scanner::tokenize(input)?;
        tracing::trace!(tokens = tokens.len(), "scanned input line");

        let mut reader = Reader::new(tokens);
        reader.read_form()
    }

    /// Reads the next form, dispatching on the peeked token
    pub fn read_form(&mut self) -> Result<Value> {
        match self.peek() {
            Some("(") => self.read_list(),
            Some("[") => self.read_vector(),
            Some("{") => self.read_hashmap(),
            Some("'") => self.read_quote(),
            Some("`") => self.read_quasiquote(),
            Some("~") => self.read_unquote(),
            Some("~@") => self.read_splice_unquote(),
            Some("@") => self.read_deref(),
            _ => self.read_atom(),
        }
    }

    fn read_atom(&mut self) -> Result<Value> {
        let token = self.next().ok_or(Error::EndOfInput)?;

        match parse_number(&token.text) {
            Some(value) => Ok(Value::Number {
                value,
                explicit_plus: token.text.starts_with('+'),
            }),
            None => Ok(Value::Symbol(token.text)),
        }
    }

    fn read_list(&mut self) -> Result<Value> {
        self.expect("(")?;

        let mut items = Vec::new();

        loop {
            match self.peek() {
                Some(")") => break,
                Some(_) => items.push(self.read_form()?),
                None => return Err(Error::EndOfInput),
            }
        }

        self.next();

        Ok(Value::List(items))
    }

    fn read_vector(&mut self) -> Result<Value> {
        self.expect("[")?;

        let mut items = Vec::new();

        loop {
            match self.peek() {
                Some("]") => break,
                Some(_) => items.push(self.read_form()?),
                None => return Err(Error::EndOfInput),
            }
        }

        self.next();

        Ok(Value::Vector(items))
    }

    /// Reads a `{...}` form
    ///
    /// Keys are read with `read_atom`, never `read_form`, so a key cannot
    /// itself be a composite. Entries are keyed by the key atom's rendered
    /// string: a repeated rendering keeps its position and takes the later
    /// value.
    fn read_hashmap(&mut self) -> Result<Value> {
        self.expect("{")?;

        let mut entries: Vec<(String, Value)> = Vec::new();

        loop {
            match self.peek() {
                Some("}") => break,
                Some(_) => {
                    let key = self.read_atom()?.to_string();
                    let value = self.read_form()?;

                    match entries.iter_mut().find(|(existing, _)| *existing == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                None => return Err(Error::EndOfInput),
            }
        }

        self.next();

        Ok(Value::HashMap(entries))
    }

    fn read_quote(&mut self) -> Result<Value> {
        self.next();
        Ok(Value::Quote(Box::new(self.read_form()?)))
    }

    fn read_quasiquote(&mut self) -> Result<Value> {
        self.next();
        Ok(Value::Quasiquote(Box::new(self.read_form()?)))
    }

    fn read_unquote(&mut self) -> Result<Value> {
        self.next();
        Ok(Value::Unquote(Box::new(self.read_form()?)))
    }

    fn read_splice_unquote(&mut self) -> Result<Value> {
        self.next();
        Ok(Value::SpliceUnquote(Box::new(self.read_form()?)))
    }

    fn read_deref(&mut self) -> Result<Value> {
        self.next();
        Ok(Value::Deref(Box::new(self.read_form()?)))
    }

    // Helper methods

    /// Returns the token text at the cursor without consuming it, or `None`
    /// once the sequence is exhausted
    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.current).map(Token::as_str)
    }

    /// Returns the token at the cursor and advances past it
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned();

        if token.is_some() {
            self.current += 1;
        }

        token
    }

    /// Consumes one token, requiring the given delimiter text
    fn expect(&mut self, delimiter: &str) -> Result<Token> {
        let token = self.next().ok_or(Error::EndOfInput)?;

        if token.text != delimiter {
            return Err(Error::UnexpectedToken {
                expected: delimiter.to_string(),
                got: token.text,
            });
        }

        Ok(token)
    }
}

/// Generic numeric-string conversion for atoms
///
/// An optional sign must be followed by a digit or decimal point, so
/// alphabetic forms accepted by `f64::from_str` (`inf`, `nan`) stay symbols.
fn parse_number(text: &str) -> Option<f64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);

    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    text.parse().ok()
}
