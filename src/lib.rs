//! # parsekit
//!
//!     A small toolkit for building recursive-descent parsers over a regex-driven
//!     tokenizer. A grammar is described as a tree of composable parsing nodes
//!     (keyword and symbol matchers, sequences, alternatives, bounded repetition,
//!     forward-declared recursive rules) and run against an input string, with
//!     automatic backtracking whenever an alternative fails.
//!
//! The Pipeline
//!
//!     Parsing a string runs through four stages:
//!
//!         1. Grammar introspection. The parser tree is walked once, collecting
//!            every keyword and symbol literal it references. See [grammar].
//!         2. Tokenizer construction. The literal sets are compiled into the
//!            prioritized token-class patterns. See [lexer].
//!         3. Tokenization. The source string becomes an ordered [TokenStream]
//!            ending in an end-of-input sentinel, or a [LexError] if some run of
//!            text matches no token class.
//!         4. Parsing. The root parser node is invoked against the stream,
//!            recursively invoking child nodes, each of which may consume tokens,
//!            backtrack, or propagate the no-match outcome. See [parsing].
//!
//!     [parse_text] bundles all four stages; the individual pieces are public for
//!     callers that want to reuse a tokenizer or inspect the token stream.
//!
//! Failure Channels
//!
//!     Expected parse failure is the [Parsed::NoMatch] value, ordinary control
//!     flow that every combinator pairs with a stream rollback. Lexical errors
//!     are unrecoverable and abort tokenization with a [LexError]. Invoking a
//!     [Forward] rule before assigning its target is a programmer error and
//!     panics. The three are never conflated.

pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod parsing;
pub mod stream;
pub mod token;

pub use diagnostics::Diagnostic;
pub use grammar::{collect_literals, GrammarLiteral, GrammarLiterals};
pub use lexer::{LexError, Tokenizer};
pub use parsing::{
    at_most, choice, exact, forward, keyword, on_match, on_no_match, on_result, one_or_more,
    parse_text, repeat, sequence, symbol, token_of_class, zero_or_more, Forward, Node, Parsed,
    Parser, ParserRef, Value,
};
pub use stream::{Checkpoint, TokenStream};
pub use token::{Token, TokenClass};
