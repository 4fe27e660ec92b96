//! The parser base contract
//!
//!     Every grammar node implements [Parser]. Implementors supply
//!     [parse_inner](Parser::parse_inner), the node's own matching logic;
//!     callers go through the provided [parse](Parser::parse), which wraps
//!     every attempt in the checkpoint/rollback protocol. Nodes also declare
//!     their [children](Parser::children) so grammar introspection can walk
//!     the tree, and keyword/symbol matchers report their
//!     [literal](Parser::literal).

use std::rc::Rc;

use crate::grammar::GrammarLiteral;
use crate::stream::TokenStream;

use super::value::Value;

/// A shared, reusable handle to a parser node. Node identity (the `Rc`
/// allocation) is what cycle detection keys on during traversal; two
/// structurally equal nodes are still distinct.
pub type ParserRef = Rc<dyn Parser>;

/// The outcome of one parser invocation: a match carrying a value, or the
/// distinguished no-match sentinel. No-match is ordinary control flow, not an
/// error; it is always paired with a stream rollback by [Parser::parse].
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Match(Value),
    NoMatch,
}

impl Parsed {
    pub fn is_match(&self) -> bool {
        matches!(self, Parsed::Match(_))
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Parsed::NoMatch)
    }

    /// The matched value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Parsed::Match(value) => Some(value),
            Parsed::NoMatch => None,
        }
    }
}

/// A node in a grammar's parser graph.
pub trait Parser {
    /// The node's own matching logic. Implementations consume tokens through
    /// the stream and return the outcome; they do not need to restore the
    /// stream on failure, [parse](Parser::parse) does that for every node.
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed;

    /// The node's declared children, for tree traversal. Leaves return none.
    fn children(&self) -> Vec<ParserRef> {
        Vec::new()
    }

    /// The keyword or symbol literal this node matches, if it is one of the
    /// literal primitives. Grammar introspection harvests these to build the
    /// tokenizer's pattern set.
    fn literal(&self) -> Option<GrammarLiteral> {
        None
    }

    /// Attempt this parser against the stream: checkpoint, run
    /// [parse_inner](Parser::parse_inner), and roll back to the checkpoint if
    /// the outcome is no-match. A failing parser never leaves
    /// partially-consumed input behind.
    fn parse(&self, stream: &mut TokenStream) -> Parsed {
        let checkpoint = stream.checkpoint();
        let outcome = self.parse_inner(stream);
        if outcome.is_no_match() {
            stream.rollback(checkpoint);
        }
        outcome
    }
}
