//! Core token types
//!
//!     A token is one classified, positioned unit of lexical text. Tokens are
//!     immutable records: the class tag, the matched text, the absolute byte
//!     offsets into the source, and the derived location fields (full source
//!     line, 1-based line number, 1-based column number) are all fixed at
//!     construction. The derived fields are pure functions of the source string
//!     and the offsets, computed once so that diagnostics never need the source
//!     string again.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category assigned to a token by the tokenizer.
///
/// The variants are listed in disambiguation priority order: at any source
/// position the tokenizer assigns the first class in this order whose pattern
/// matches. `EndOfInput` is the stream sentinel; `Error` is attached to the
/// maximal unlexable run carried by a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenClass {
    Int,
    Float,
    Keyword,
    Identifier,
    Str,
    Symbol,
    EndOfInput,
    Error,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Int => "int",
            TokenClass::Float => "float",
            TokenClass::Keyword => "keyword",
            TokenClass::Identifier => "identifier",
            TokenClass::Str => "str",
            TokenClass::Symbol => "symbol",
            TokenClass::EndOfInput => "end-of-input",
            TokenClass::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// One lexical unit with its source location.
///
/// Invariant: `0 <= start <= end <= source.len()` and `text` equals the
/// `source[start..end]` slice the token was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token class assigned by the tokenizer.
    pub class: TokenClass,
    /// The matched text, `source[start..end]`.
    pub text: String,
    /// Absolute byte offset where the token begins.
    pub start: usize,
    /// Absolute byte offset one past where the token ends.
    pub end: usize,
    /// The full text of the line the token starts on, without its newline.
    pub line: String,
    /// 1-based line number of `start`.
    pub line_number: usize,
    /// 1-based column number of `start` within its line.
    pub column_number: usize,
}

impl Token {
    /// Build a token for `source[start..end]`, deriving the location fields.
    ///
    /// The line text is bounded by the nearest newline before `start` and the
    /// nearest newline at or after `end` (or the string boundaries).
    pub fn new(class: TokenClass, source: &str, start: usize, end: usize) -> Token {
        debug_assert!(start <= end && end <= source.len());
        let line_start = source[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = source[end..].find('\n').map(|i| end + i).unwrap_or(source.len());
        Token {
            class,
            text: source[start..end].to_string(),
            start,
            end,
            line: source[line_start..line_end].to_string(),
            line_number: source[..start].matches('\n').count() + 1,
            column_number: start - line_start + 1,
        }
    }

    /// The end-of-input sentinel: empty text positioned at the end of `source`.
    pub fn end_of_input(source: &str) -> Token {
        Token::new(TokenClass::EndOfInput, source, source.len(), source.len())
    }

    pub fn is_end_of_input(&self) -> bool {
        self.class == TokenClass::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_records_source_slice() {
        let source = "let x = 1";
        let token = Token::new(TokenClass::Identifier, source, 4, 5);
        assert_eq!(token.text, "x");
        assert_eq!(&source[token.start..token.end], token.text);
    }

    #[test]
    fn test_location_on_first_line() {
        let source = "alpha beta\ngamma";
        let token = Token::new(TokenClass::Identifier, source, 6, 10);
        assert_eq!(token.line, "alpha beta");
        assert_eq!(token.line_number, 1);
        assert_eq!(token.column_number, 7);
    }

    #[test]
    fn test_location_on_later_line() {
        let source = "alpha\nbeta\n  gamma\n";
        let token = Token::new(TokenClass::Identifier, source, 13, 18);
        assert_eq!(token.text, "gamma");
        assert_eq!(token.line, "  gamma");
        assert_eq!(token.line_number, 3);
        assert_eq!(token.column_number, 3);
    }

    #[test]
    fn test_line_bounded_by_string_boundaries() {
        let source = "only-line";
        let token = Token::new(TokenClass::Identifier, source, 0, 4);
        assert_eq!(token.line, "only-line");
        assert_eq!(token.line_number, 1);
        assert_eq!(token.column_number, 1);
    }

    #[test]
    fn test_end_of_input_sentinel() {
        let source = "a b\n";
        let sentinel = Token::end_of_input(source);
        assert!(sentinel.is_end_of_input());
        assert_eq!(sentinel.text, "");
        assert_eq!(sentinel.start, source.len());
        assert_eq!(sentinel.end, source.len());
    }
}
