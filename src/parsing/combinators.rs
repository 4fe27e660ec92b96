//! Combinators
//!
//!     The combining operators that build grammars out of other parsers:
//!     sequence, ordered choice, bounded repetition, result transformation,
//!     and the forward-declared indirection node that makes recursive rules
//!     possible without cyclic ownership.
//!
//!     Sequence and choice recurse through the grammar structure, so their
//!     depth is bounded by grammar nesting. Repetition is iterative and never
//!     recurses per input element; repeated constructs cost no stack growth
//!     proportional to input length.

use std::cell::RefCell;
use std::rc::Rc;

use crate::stream::TokenStream;

use super::parser::{Parsed, Parser, ParserRef};
use super::value::Value;

/// Matches all children in order; the result is the ordered list of their
/// results. If any child fails the whole sequence fails and the stream is
/// restored to the pre-sequence position.
struct Sequence {
    children: Vec<ParserRef>,
}

impl Parser for Sequence {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        let mut results = Vec::with_capacity(self.children.len());
        for child in &self.children {
            match child.parse(stream) {
                Parsed::Match(value) => results.push(value),
                Parsed::NoMatch => return Parsed::NoMatch,
            }
        }
        Parsed::Match(Value::List(results))
    }

    fn children(&self) -> Vec<ParserRef> {
        self.children.clone()
    }
}

/// Returns the result of the first child that matches, trying children left
/// to right. No longest-match resolution: alternatives must be ordered
/// deliberately.
struct Choice {
    children: Vec<ParserRef>,
}

impl Parser for Choice {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        for child in &self.children {
            let outcome = child.parse(stream);
            if outcome.is_match() {
                return outcome;
            }
        }
        Parsed::NoMatch
    }

    fn children(&self) -> Vec<ParserRef> {
        self.children.clone()
    }
}

/// Invokes the child repeatedly until it fails or the cap is reached,
/// collecting results. Succeeds iff at least `at_least` matched; the cap is
/// strict, never more than `at_most` results.
struct Repeat {
    child: ParserRef,
    at_least: usize,
    at_most: Option<usize>,
}

impl Parser for Repeat {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        let mut results = Vec::new();
        loop {
            if self.at_most.is_some_and(|cap| results.len() >= cap) {
                break;
            }
            match self.child.parse(stream) {
                Parsed::Match(value) => results.push(value),
                Parsed::NoMatch => break,
            }
        }
        if results.len() >= self.at_least {
            Parsed::Match(Value::List(results))
        } else {
            Parsed::NoMatch
        }
    }

    fn children(&self) -> Vec<ParserRef> {
        vec![self.child.clone()]
    }
}

/// Wraps a child parser with a function over its outcome.
struct Transform {
    child: ParserRef,
    action: Box<dyn Fn(Parsed) -> Parsed>,
}

impl Parser for Transform {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        (self.action)(self.child.parse(stream))
    }

    fn children(&self) -> Vec<ParserRef> {
        vec![self.child.clone()]
    }
}

/// The lazy indirection node enabling recursive and forward-referenced rules.
///
/// Create it first with [forward], reference it freely inside other rules,
/// and assign its real target with [set](Forward::set) before any parse runs.
/// Invoking or traversing a `Forward` before assignment is a programmer error
/// and panics.
pub struct Forward {
    slot: RefCell<Option<ParserRef>>,
}

impl Forward {
    /// Assign the target rule. Panics if already assigned.
    pub fn set(&self, target: ParserRef) {
        let mut slot = self.slot.borrow_mut();
        assert!(slot.is_none(), "forward rule assigned twice");
        *slot = Some(target);
    }

    fn target(&self) -> ParserRef {
        self.slot
            .borrow()
            .clone()
            .expect("forward rule invoked before set(); assign its target before parsing")
    }

    /// This node as a [ParserRef], for embedding in other rules.
    pub fn as_parser(self: &Rc<Self>) -> ParserRef {
        let parser: ParserRef = Rc::<Forward>::clone(self);
        parser
    }
}

impl Parser for Forward {
    fn parse_inner(&self, stream: &mut TokenStream) -> Parsed {
        self.target().parse(stream)
    }

    fn children(&self) -> Vec<ParserRef> {
        vec![self.target()]
    }
}

/// All of `children` in order, or no-match.
pub fn sequence(children: Vec<ParserRef>) -> ParserRef {
    Rc::new(Sequence { children })
}

/// The first of `children` that matches, tried left to right.
pub fn choice(children: Vec<ParserRef>) -> ParserRef {
    Rc::new(Choice { children })
}

/// Between `at_least` and `at_most` (when given) matches of `child`.
pub fn repeat(child: ParserRef, at_least: usize, at_most: Option<usize>) -> ParserRef {
    Rc::new(Repeat {
        child,
        at_least,
        at_most,
    })
}

/// Zero or more matches of `child`; zero matches is an empty-list success.
pub fn zero_or_more(child: ParserRef) -> ParserRef {
    repeat(child, 0, None)
}

/// One or more matches of `child`.
pub fn one_or_more(child: ParserRef) -> ParserRef {
    repeat(child, 1, None)
}

/// At most `cap` matches of `child`, leaving any further matches unconsumed.
pub fn at_most(child: ParserRef, cap: usize) -> ParserRef {
    repeat(child, 0, Some(cap))
}

/// Unconditional transformation: `action` is applied to the child's outcome,
/// whether match or no-match. The surrounding backtracking contract still
/// rolls the stream back whenever the final outcome is no-match.
pub fn on_result(child: ParserRef, action: impl Fn(Parsed) -> Parsed + 'static) -> ParserRef {
    Rc::new(Transform {
        child,
        action: Box::new(action),
    })
}

/// Success-only transformation: `action` rewrites the matched value;
/// no-match propagates untouched. The usual way to build output trees.
pub fn on_match(child: ParserRef, action: impl Fn(Value) -> Value + 'static) -> ParserRef {
    on_result(child, move |outcome| match outcome {
        Parsed::Match(value) => Parsed::Match(action(value)),
        Parsed::NoMatch => Parsed::NoMatch,
    })
}

/// Failure-only transformation: `action` runs only when the child fails, and
/// may recover by returning a match; success propagates untouched.
pub fn on_no_match(child: ParserRef, action: impl Fn() -> Parsed + 'static) -> ParserRef {
    on_result(child, move |outcome| match outcome {
        Parsed::NoMatch => action(),
        matched => matched,
    })
}

/// A fresh, unassigned [Forward] node.
pub fn forward() -> Rc<Forward> {
    Rc::new(Forward {
        slot: RefCell::new(None),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Tokenizer;
    use crate::parsing::primitives::{exact, symbol};
    use std::collections::BTreeSet;

    fn stream(source: &str, symbols: &[&str]) -> TokenStream {
        let symbols: BTreeSet<String> = symbols.iter().map(|s| s.to_string()).collect();
        Tokenizer::new(&BTreeSet::new(), &symbols)
            .tokenize(source)
            .expect("test source lexes")
    }

    #[test]
    fn test_sequence_collects_in_order() {
        let mut s = stream("a b", &[]);
        let pair = sequence(vec![exact("a"), exact("b")]);
        let value = pair.parse(&mut s).into_value().expect("match");
        let items = value.as_list().expect("list");
        assert_eq!(items[0].as_token().expect("token").text, "a");
        assert_eq!(items[1].as_token().expect("token").text, "b");
    }

    #[test]
    fn test_choice_is_ordered() {
        let mut s = stream("x", &[]);
        let first = on_match(exact("x"), |_| Value::Str("first".to_string()));
        let second = on_match(exact("x"), |_| Value::Str("second".to_string()));
        let either = choice(vec![first, second]);
        assert_eq!(
            either.parse(&mut s).into_value(),
            Some(Value::Str("first".to_string()))
        );
    }

    #[test]
    fn test_repeat_cap_is_strict() {
        let mut s = stream("x x x x", &[]);
        let capped = at_most(exact("x"), 2);
        let value = capped.parse(&mut s).into_value().expect("match");
        assert_eq!(value.as_list().expect("list").len(), 2);
        // The remainder stays unconsumed.
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn test_on_no_match_can_recover() {
        let mut s = stream("y", &[]);
        let recovered = on_no_match(exact("x"), || Parsed::Match(Value::Bool(false)));
        assert_eq!(
            recovered.parse(&mut s).into_value(),
            Some(Value::Bool(false))
        );
        // The failed child consumed nothing before recovery.
        assert_eq!(s.position(), 0);
    }

    #[test]
    #[should_panic(expected = "forward rule invoked before set()")]
    fn test_unset_forward_panics() {
        let mut s = stream("( )", &["(", ")"]);
        let rule = forward();
        rule.as_parser().parse(&mut s);
    }

    #[test]
    #[should_panic(expected = "forward rule assigned twice")]
    fn test_forward_rejects_double_assignment() {
        let rule = forward();
        rule.set(symbol("("));
        rule.set(symbol(")"));
    }
}
