//! Parser combinator engine
//!
//!     The abstract parsing contract plus the concrete primitives and
//!     combinators that compose parsers. A grammar is a possibly-cyclic graph
//!     of [ParserRef] nodes; cycles arise only through [Forward], the
//!     indirection node for recursive rules.
//!
//! The Backtracking Contract
//!
//!     Every node exposes one operation, [Parser::parse]. The provided method
//!     always captures a stream checkpoint before attempting the node's own
//!     logic and rolls the stream back if the outcome is [Parsed::NoMatch].
//!     Every combinator is therefore all-or-nothing: a failing parser never
//!     leaves partially-consumed input behind, regardless of how many tokens
//!     its internal logic examined before failing.
//!
//!     [Parsed::NoMatch] is a value distinct from every legitimate result: an
//!     empty list, a zero, or an empty string are all successful matches. The
//!     engine never conflates the two channels.
//!
//! Building Grammars
//!
//!     The construction surface is the free functions re-exported here:
//!     [token_of_class], [exact], [keyword] and [symbol] for primitives;
//!     [sequence], [choice], [repeat] (with [zero_or_more], [one_or_more] and
//!     [at_most]), the transformation variants [on_result], [on_match] and
//!     [on_no_match], and [forward] for recursive rules. Keyword and symbol
//!     matchers record their literal so grammar introspection can harvest the
//!     token sets the tokenizer needs.

pub mod combinators;
pub mod parser;
pub mod primitives;
pub mod value;

pub use combinators::{
    at_most, choice, forward, on_match, on_no_match, on_result, one_or_more, repeat, sequence,
    zero_or_more, Forward,
};
pub use parser::{Parsed, Parser, ParserRef};
pub use primitives::{exact, keyword, symbol, token_of_class};
pub use value::{Node, Value};

use crate::grammar::collect_literals;
use crate::lexer::{LexError, Tokenizer};

/// Parse an input string with a grammar: harvest the grammar's keyword and
/// symbol literals, build a tokenizer from them, tokenize the input, and
/// invoke the root parser against the resulting stream.
///
/// Returns the root parser's outcome, or a [LexError] when some run of input
/// matches no token class. Callers that parse many strings with one grammar
/// should build the [Tokenizer] once themselves; literal collection and
/// pattern compilation are per-grammar, not per-input.
pub fn parse_text(root: &ParserRef, source: &str) -> Result<Parsed, LexError> {
    let literals = collect_literals(root);
    let tokenizer = Tokenizer::new(&literals.keywords, &literals.symbols);
    let mut stream = tokenizer.tokenize(source)?;
    Ok(root.parse(&mut stream))
}
