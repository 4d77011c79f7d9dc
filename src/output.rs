//! JSON projection of a parsed tree.
//!
//! Every node serializes to an object with a `Type` discriminator:
//!
//! - expressions: `{"Type":"Expr","Operator":"","Nodes":[child]}`
//! - binary nodes: `{"Type":"Binary","Operator":"==","Nodes":[left,right]}`
//! - constants: `{"Type":"Const","Value":"foo*"}`
//!
//! Argument values keep their wildcards and operators use the rendered form
//! (`<>`, `>=`, `in`, `query`, `AND`, ...).
//!
//! # Examples
//!
//! ```
//! use fiql_parser::output::to_json;
//!
//! let tree = fiql_parser::parse("column==value").unwrap();
//! assert_eq!(
//!     to_json(&tree).unwrap(),
//!     r#"{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"column"},{"Type":"Const","Value":"value"}]}]}"#
//! );
//! ```

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::ast::{Binary, Constant, Expression, Node, NodeKind};

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Expression(e) => e.serialize(serializer),
            Node::Binary(b) => b.serialize(serializer),
            Node::Constant(c) => c.serialize(serializer),
        }
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Expr", 3)?;
        state.serialize_field("Type", NodeKind::Expression.as_str())?;
        state.serialize_field("Operator", "")?;
        state.serialize_field("Nodes", &self.children())?;
        state.end()
    }
}

impl Serialize for Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Binary", 3)?;
        state.serialize_field("Type", NodeKind::Binary.as_str())?;
        state.serialize_field("Operator", self.operator().as_str())?;
        state.serialize_field("Nodes", &[self.left(), self.right()])?;
        state.end()
    }
}

impl Serialize for Constant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Const", 2)?;
        state.serialize_field("Type", NodeKind::Constant.as_str())?;
        state.serialize_field("Value", &self.to_string())?;
        state.end()
    }
}

/// Compact JSON.
pub fn to_json(expression: &Expression) -> serde_json::Result<String> {
    serde_json::to_string(expression)
}

/// JSON indented with two spaces.
pub fn to_json_pretty(expression: &Expression) -> serde_json::Result<String> {
    serde_json::to_string_pretty(expression)
}
