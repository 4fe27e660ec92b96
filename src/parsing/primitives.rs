//! Primitive matchers
//!
//!     The leaves of a grammar: match one token by class or by exact text.
//!     The [keyword] and [symbol] constructors are the exact-token matcher
//!     with the literal recorded separately, so grammar introspection can
//!     harvest the literal sets the tokenizer needs before any input is lexed.

use std::rc::Rc;

use crate::grammar::GrammarLiteral;
use crate::stream::TokenStream;
use crate::token::TokenClass;

use super::parser::{Parsed, Parser, ParserRef};
use super::value::Value;

/// Matches one token whose class equals the expected class.
struct TokenOfClass {
    class: TokenClass,
}

impl Parser for TokenOfClass {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        if stream.peek().class == self.class {
            Parsed::Match(Value::Token(stream.consume()))
        } else {
            Parsed::NoMatch
        }
    }
}

/// Matches one token whose text equals the expected literal.
struct TokenMatching {
    text: String,
    literal: Option<GrammarLiteral>,
}

impl Parser for TokenMatching {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        if stream.peek().text == self.text {
            Parsed::Match(Value::Token(stream.consume()))
        } else {
            Parsed::NoMatch
        }
    }

    fn literal(&self) -> Option<GrammarLiteral> {
        self.literal.clone()
    }
}

/// A parser matching any single token of the given class.
pub fn token_of_class(class: TokenClass) -> ParserRef {
    Rc::new(TokenOfClass { class })
}

/// A parser matching one token with exactly the given text. Unlike [keyword]
/// and [symbol] this records no literal, so it does not influence the
/// tokenizer built for the grammar.
pub fn exact(text: impl Into<String>) -> ParserRef {
    Rc::new(TokenMatching {
        text: text.into(),
        literal: None,
    })
}

/// A parser matching the given word as a reserved keyword. The literal is
/// recorded for introspection, so the tokenizer reserves it and refuses to
/// lex it as an identifier.
pub fn keyword(word: impl Into<String>) -> ParserRef {
    let word = word.into();
    Rc::new(TokenMatching {
        text: word.clone(),
        literal: Some(GrammarLiteral::Keyword(word)),
    })
}

/// A parser matching the given symbol literal. The literal is recorded for
/// introspection, so the tokenizer recognizes it (longest symbols first).
pub fn symbol(text: impl Into<String>) -> ParserRef {
    let text = text.into();
    Rc::new(TokenMatching {
        text: text.clone(),
        literal: Some(GrammarLiteral::Symbol(text)),
    })
}
