use super::token::Token;
use crate::error::{Error, Result};

/// Two-character lexemes, matched before the single-character set
const DOUBLE_TOKENS: [&str; 4] = [">=", "<=", "**", "~@"];

/// Single-character lexemes
const SINGLE_TOKENS: [char; 14] = [
    '*', '@', '`', '=', '>', '{', '[', '(', '<', '}', ']', ')', '\'', '~',
];

/// Characters permitted in symbol tokens besides alphanumerics
const SYMBOL_SPECIALS: [char; 2] = ['-', '>'];

/// Escape characters recognized after `\` inside a string literal
const STRING_ESCAPES: [char; 3] = ['\\', '"', 'n'];

/// Scanner for Mallow source text
///
/// Single left-to-right pass with one character of lookahead. Whitespace
/// (including commas) and `;` comments separate tokens and are dropped;
/// everything else is emitted verbatim. String literals are the only place
/// scanning can fail.
pub struct Scanner {
    /// Source text as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl Scanner {
    /// Creates a new scanner from source text
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes source text in one call
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens()
    }

    /// Scans all tokens from the source text and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        Ok(self.tokens.clone())
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            // Whitespace - commas count as whitespace
            ' ' | '\r' | '\t' | ',' => {}
            '\n' => {
                self.line += 1;
                self.column = 1;
            }

            // Comments run to end of line
            ';' => self.skip_line_comment(),

            // Strings are kept verbatim, quotes and escapes included
            '"' => self.scan_string()?,

            // Numbers are integer lexemes only; a dash counts when a digit follows
            '-' if self.peek().is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_digit() => self.scan_number(),

            c => {
                if self.match_double(c) {
                    self.add_token();
                } else if SINGLE_TOKENS.contains(&c) {
                    self.add_token();
                } else {
                    self.scan_symbol();
                }
            }
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }

        if !self.is_at_end() {
            self.advance();
            self.line += 1;
            self.column = 1;
        }
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        self.add_token();
    }

    fn scan_string(&mut self) -> Result<()> {
        loop {
            if self.is_at_end() {
                return Err(Error::UnbalancedString {
                    literal: self.lexeme(),
                    line: self.line,
                });
            }

            match self.advance() {
                '\\' => {
                    if self.is_at_end() || !STRING_ESCAPES.contains(&self.advance()) {
                        return Err(Error::UnrecognizedEscape {
                            literal: self.lexeme(),
                            line: self.line,
                        });
                    }
                }
                '"' => break,
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                _ => {}
            }
        }

        self.add_token();
        Ok(())
    }

    fn scan_symbol(&mut self) {
        while Self::is_symbol_char(self.peek()) {
            self.advance();
        }

        self.add_token();
    }

    /// Consumes the second character of a two-character lexeme if the pair
    /// starting at `first` is one of `DOUBLE_TOKENS`
    fn match_double(&mut self, first: char) -> bool {
        let next = self.peek();
        let matched = DOUBLE_TOKENS
            .iter()
            .any(|double| double.chars().eq([first, next]));

        if matched {
            self.advance();
        }

        matched
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self) {
        let text = self.lexeme();
        self.tokens.push(Token::new(text, self.line, self.column));
    }

    fn is_symbol_char(c: char) -> bool {
        c.is_alphanumeric() || SYMBOL_SPECIALS.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        Scanner::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_simple_form() {
        assert_eq!(texts("(+ 1 2)"), ["(", "+", "1", "2", ")"]);
    }

    #[test]
    fn test_commas_are_whitespace() {
        assert_eq!(texts("(1 2, 3,,,,),,"), ["(", "1", "2", "3", ")"]);
    }

    #[test]
    fn test_dash_handling() {
        assert_eq!(texts("-"), ["-"]);
        assert_eq!(texts("-123"), ["-123"]);
        assert_eq!(texts("->>"), ["->>"]);
    }

    #[test]
    fn test_two_character_lexemes() {
        assert_eq!(texts("(** 1 2)"), ["(", "**", "1", "2", ")"]);
        assert_eq!(texts("(>= 1 2)"), ["(", ">=", "1", "2", ")"]);
        assert_eq!(texts("~@(1 2 3)"), ["~@", "(", "1", "2", "3", ")"]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(texts("1 ; comment"), ["1"]);
        assert_eq!(texts("; whole line\n2"), ["2"]);
    }

    #[test]
    fn test_string_kept_verbatim() {
        assert_eq!(texts(r#""abc\"def""#), [r#""abc\"def""#]);
    }

    #[test]
    fn test_unbalanced_string() {
        let err = Scanner::tokenize(r#""abc"#).unwrap_err();
        assert!(matches!(err, Error::UnbalancedString { .. }));
        assert!(err.to_string().contains("unbalanced string delimiter"));
    }

    #[test]
    fn test_unrecognized_escape() {
        let err = Scanner::tokenize(r#""a\qb""#).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedEscape { .. }));
        assert!(err.to_string().contains("unrecognized escape sequence"));
    }

    #[test]
    fn test_token_positions() {
        let tokens = Scanner::tokenize("(a\nb)").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[2].line, 2);
    }
}
