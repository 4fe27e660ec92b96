//! Result values
//!
//!     The uniform value type flowing out of parser nodes. Primitives produce
//!     [Value::Token], sequences and repetitions produce [Value::List], and
//!     transformation combinators let grammar authors rebuild those into
//!     whatever shape their output tree needs. [Node] is the schema-less
//!     attribute bag for grammars whose result shapes are not worth a dedicated
//!     type: a tag naming the construct plus named attributes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// A parse result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Value {
    Token(Token),
    List(Vec<Value>),
    Node(Node),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Value::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Value {
        Value::Token(token)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Value {
        Value::Node(node)
    }
}

/// A tagged attribute bag for grammar-author output trees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Name of the construct this node represents.
    pub tag: String,
    /// Named attributes, ordered for stable output.
    pub attrs: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Node {
        Node {
            tag: tag.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Node {
        self.attrs.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.tag)?;
        for (i, (key, value)) in self.attrs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", key, value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = Node::new("binding")
            .with("name", Value::Str("x".to_string()))
            .with("value", Value::Int(1));
        assert_eq!(node.tag, "binding");
        assert_eq!(node.get("name"), Some(&Value::Str("x".to_string())));
        assert_eq!(node.get("value"), Some(&Value::Int(1)));
        assert_eq!(node.get("missing"), None);
    }

    #[test]
    fn test_empty_list_is_a_value() {
        // An empty list is a legitimate success value, never a failure.
        let value = Value::List(vec![]);
        assert_eq!(value.as_list(), Some(&[][..]));
    }
}
