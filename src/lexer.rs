//! Tokenizer
//!
//!     This module converts a source string into an ordered [TokenStream] using
//!     a prioritized set of token-class patterns. The fixed classes (numbers,
//!     identifiers, string literals) are grammar-independent and compiled once
//!     as lazy statics; the keyword and symbol classes are built per tokenizer
//!     from the literal sets harvested off a parser tree (see
//!     [collect_literals](crate::grammar::collect_literals)), which is why all
//!     keywords and symbols must be known before a tokenizer can be constructed.
//!
//! Disambiguation
//!
//!     Order matters: at each position the classes are tried in declaration
//!     order and the first match wins.
//!
//!         1. int        - digits not followed by a decimal point
//!         2. float      - digits, a decimal point, optional digits
//!         3. keyword    - a reserved literal matched as a whole word
//!         4. identifier - a word-character run that is not a keyword, does not
//!                         start with a digit, and is not a raw-string prefix
//!         5. str        - quoted text with escapes, or a raw r-prefixed literal
//!         6. symbol     - a symbol literal, longest alternatives first
//!
//!     Within the keyword and symbol alternations, candidates are ordered by
//!     descending length so that a two-character operator like `==` is always
//!     preferred over its one-character prefix `=`.
//!
//!     The `regex` crate has no lookahead, so the follow conditions (the `.`
//!     after an integer run, the word character after a keyword) are explicit
//!     one-character checks after the pattern match.
//!
//! Whitespace and Comments
//!
//!     Before each token the tokenizer skips a maximal run of whitespace and
//!     `#`-to-end-of-line comments. If afterwards no class matches, the maximal
//!     run of non-whitespace characters becomes an error-class token carried by
//!     the [LexError]; tokenization aborts and no partial stream is produced.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stream::TokenStream;
use crate::token::{Token, TokenClass};

/// Maximal run of whitespace and line comments. Matches the empty string, so
/// it always succeeds and only its end offset is interesting.
static IGNORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\s+|#[^\n]*)*").unwrap());

/// Maximal run of non-whitespace characters, scanned for lexical errors.
static ERROR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+").unwrap());

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+").unwrap());

static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d*").unwrap());

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());

/// String literals: double- or single-quoted with backslash escapes, or a
/// raw-prefixed quoted literal with no escaping inside.
static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|r"[^"]*"|r'[^']*')"#).unwrap()
});

/// Errors that can occur during tokenization
#[derive(Debug, Clone)]
pub enum LexError {
    /// No token class matched; carries the offending non-whitespace run as an
    /// error-class token.
    UnrecognizedToken(Token),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedToken(token) => write!(
                f,
                "unrecognized token {:?} on line {}, column {}",
                token.text, token.line_number, token.column_number
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// A tokenizer for one grammar's keyword and symbol sets.
///
/// Construction compiles the keyword and symbol alternations; tokenizers are
/// immutable afterwards and reusable across any number of inputs.
pub struct Tokenizer {
    keywords: BTreeSet<String>,
    /// Alternation over the keyword set, longest first; `None` when the set is
    /// empty (an empty alternation would match the empty string).
    keyword_pattern: Option<Regex>,
    /// Alternation over the symbol set, longest first; `None` when empty.
    symbol_pattern: Option<Regex>,
}

impl Tokenizer {
    pub fn new(keywords: &BTreeSet<String>, symbols: &BTreeSet<String>) -> Tokenizer {
        Tokenizer {
            keywords: keywords.clone(),
            keyword_pattern: compile_alternation(keywords),
            symbol_pattern: compile_alternation(symbols),
        }
    }

    /// Tokenize `source` into a stream ending in the end-of-input sentinel.
    pub fn tokenize(&self, source: &str) -> Result<TokenStream, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        loop {
            if let Some(skip) = IGNORE.find(&source[pos..]) {
                pos += skip.end();
            }
            if pos >= source.len() {
                break;
            }
            match self.match_class_at(source, pos) {
                Some((class, end)) => {
                    tokens.push(Token::new(class, source, pos, end));
                    pos = end;
                }
                None => {
                    let end = ERROR_RUN
                        .find(&source[pos..])
                        .map(|m| pos + m.end())
                        .unwrap_or(source.len());
                    let token = Token::new(TokenClass::Error, source, pos, end);
                    return Err(LexError::UnrecognizedToken(token));
                }
            }
        }
        tokens.push(Token::end_of_input(source));
        Ok(TokenStream::new(tokens))
    }

    /// Try each token class in priority order at `pos`; the first match wins.
    /// Returns the class and the absolute end offset of the match.
    fn match_class_at(&self, source: &str, pos: usize) -> Option<(TokenClass, usize)> {
        let rest = &source[pos..];

        // int: a digit run not followed by a decimal point
        if let Some(m) = DIGITS.find(rest) {
            if rest.as_bytes().get(m.end()) != Some(&b'.') {
                return Some((TokenClass::Int, pos + m.end()));
            }
        }

        // float
        if let Some(m) = FLOAT.find(rest) {
            return Some((TokenClass::Float, pos + m.end()));
        }

        // keyword: whole-word only
        if let Some(pattern) = &self.keyword_pattern {
            if let Some(m) = pattern.find(rest) {
                if !followed_by_word_char(rest, m.end()) {
                    return Some((TokenClass::Keyword, pos + m.end()));
                }
            }
        }

        // identifier: a word run that is not reserved, does not start with a
        // digit, and is not the `r` prefix of a raw string literal
        if !rest.starts_with("r\"") && !rest.starts_with("r'") {
            if let Some(m) = WORD.find(rest) {
                let starts_with_digit = m
                    .as_str()
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit());
                if !starts_with_digit && !self.keywords.contains(m.as_str()) {
                    return Some((TokenClass::Identifier, pos + m.end()));
                }
            }
        }

        // str
        if let Some(m) = STRING.find(rest) {
            return Some((TokenClass::Str, pos + m.end()));
        }

        // symbol
        if let Some(pattern) = &self.symbol_pattern {
            if let Some(m) = pattern.find(rest) {
                return Some((TokenClass::Symbol, pos + m.end()));
            }
        }

        None
    }
}

/// Compile a literal set into an anchored alternation ordered by descending
/// length (then lexicographically, for determinism), so longer literals win
/// over their prefixes. Empty sets and empty literals compile to no pattern.
fn compile_alternation(literals: &BTreeSet<String>) -> Option<Regex> {
    let mut ordered: Vec<&str> = literals
        .iter()
        .map(String::as_str)
        .filter(|l| !l.is_empty())
        .collect();
    if ordered.is_empty() {
        return None;
    }
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let pattern = ordered
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    // The escaped alternation is always a valid pattern.
    Regex::new(&format!("^(?:{})", pattern)).ok()
}

/// Whether the character at byte offset `at` continues a word (`\w`).
fn followed_by_word_char(text: &str, at: usize) -> bool {
    text[at..]
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
