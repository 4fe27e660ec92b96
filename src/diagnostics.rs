//! Diagnostic rendering
//!
//!     Human-readable descriptions of a lexing or parsing problem, built
//!     around a token's recorded position: the message, the 1-based line and
//!     column, the offending text, the full source line, and a marker line
//!     with a caret aligned under the column.

use std::fmt;

use crate::lexer::LexError;
use crate::token::Token;

/// A renderable description of a problem at a token's position.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub token: Token,
    pub message: String,
}

impl Diagnostic {
    pub fn new(token: Token, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            token,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} on line {}, column {}: {:?}",
            self.message, self.token.line_number, self.token.column_number, self.token.text
        )?;
        writeln!(f, "{}", self.token.line)?;
        write!(f, "{}^", " ".repeat(self.token.column_number - 1))
    }
}

impl std::error::Error for Diagnostic {}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Diagnostic {
        match err {
            LexError::UnrecognizedToken(token) => Diagnostic::new(token, "unrecognized token"),
        }
    }
}
