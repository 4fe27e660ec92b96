//! Grammar introspection
//!
//!     A one-time traversal over a constructed parser tree that collects every
//!     keyword and symbol literal it references. The tokenizer's disambiguation
//!     rules (reserved words beat identifiers, longer symbols beat their
//!     prefixes) need the complete literal sets up front, so this runs once per
//!     grammar, before any input is lexed.
//!
//!     The walk is an iterative worklist keyed by node identity (the `Rc` data
//!     pointer), not structural equality. Identity keying is what guarantees
//!     termination when the graph is cyclic through forward-declared rules.

use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use crate::parsing::ParserRef;

/// A literal harvested from a keyword or symbol matcher.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GrammarLiteral {
    Keyword(String),
    Symbol(String),
}

/// The keyword and symbol sets referenced anywhere in a parser tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarLiterals {
    pub keywords: BTreeSet<String>,
    pub symbols: BTreeSet<String>,
}

/// Walk the parser graph from `root` and collect every keyword and symbol
/// literal. Panics if the graph contains a forward rule whose target was
/// never assigned, since its children cannot be traversed.
pub fn collect_literals(root: &ParserRef) -> GrammarLiterals {
    let mut literals = GrammarLiterals::default();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut pending: Vec<ParserRef> = vec![Rc::clone(root)];
    while let Some(parser) = pending.pop() {
        let identity = Rc::as_ptr(&parser) as *const () as usize;
        if !visited.insert(identity) {
            continue;
        }
        match parser.literal() {
            Some(GrammarLiteral::Keyword(word)) => {
                literals.keywords.insert(word);
            }
            Some(GrammarLiteral::Symbol(text)) => {
                literals.symbols.insert(text);
            }
            None => {}
        }
        pending.extend(parser.children());
    }
    literals
}
