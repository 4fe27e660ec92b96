//! Token stream
//!
//!     The cursor over a tokenizer's output that every combinator's
//!     backtracking relies on. A stream owns its fixed token vector (the last
//!     element is always the end-of-input sentinel) plus a single integer
//!     cursor. Reading past the end is clamped to the sentinel and never
//!     panics, so a parser can probe for end-of-input like any other token.
//!
//!     The cursor only ever changes through [consume](TokenStream::consume) and
//!     [rollback](TokenStream::rollback), and a [Checkpoint] is opaque, so a
//!     rollback target can only be a position the cursor previously held.

use crate::token::Token;

/// A saved cursor position, produced by [TokenStream::checkpoint].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// An ordered, fixed sequence of tokens with a backtrackable cursor.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> TokenStream {
        debug_assert!(tokens.last().is_some_and(Token::is_end_of_input));
        TokenStream { tokens, cursor: 0 }
    }

    /// The token at the cursor, clamped to the end-of-input sentinel.
    pub fn peek(&self) -> &Token {
        let clamped = self.cursor.min(self.tokens.len() - 1);
        &self.tokens[clamped]
    }

    /// Read the current token and advance the cursor by one. Past the end this
    /// keeps returning the sentinel without advancing further.
    pub fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Capture the current cursor position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.cursor)
    }

    /// Restore the cursor to a previously captured position.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.0;
    }

    /// The current cursor index, mainly useful in tests and tooling.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// All tokens, including the trailing sentinel.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
