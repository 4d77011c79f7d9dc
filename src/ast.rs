//! # FIQL - Abstract Syntax Tree
//!
//! This module defines the tree produced by the [`Parser`](crate::parser::Parser)
//! for FIQL filter expressions.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Logic operators and comparators
//! - **[node]** - The node model: expression wrapper, binary node, constant leaf
//! - **[visitor]** - The callback interface used to walk a tree
//!
//! For a quick pass without a [`Visitor`] implementation, [`Expression::walk`]
//! calls a closure for every node.
//!
//! ## Quick Start
//!
//! ```text
//! title==foo*;(updated=lt=-P1D,title==*bar)
//! ```
//!
//! This filter keeps items whose title starts with `foo` and that were either
//! updated more than a day ago or have a title ending in `bar`.
//!
//! ## Core Concepts
//!
//! ### Units and chains
//!
//! A document is a chain of units joined by `;` (AND) or `,` (OR). A unit is
//! a comparison, a bare selector, or a parenthesized group:
//!
//! ```text
//! selector comparator argument
//! selector
//! ( document )
//! ```
//!
//! ### No precedence between AND and OR
//!
//! Each logic operator takes the unit on its left and the whole rest of the
//! current scope on its right, so chains nest to the right:
//!
//! ```text
//! a==b;c==d,f==g      =>  AND(a==b, OR(c==d, f==g))
//! (a==b;c==d),f==g    =>  OR((AND(a==b, c==d)), f==g)
//! ```
//!
//! ### Comparators
//!
//! | FIQL   | Rendered | Argument                          |
//! |--------|----------|-----------------------------------|
//! | `==`   | `==`     | anything                          |
//! | `!=`   | `<>`     | anything                          |
//! | `=gt=` | `>`      | number, date-time or duration     |
//! | `=ge=` | `>=`     | number, date-time or duration     |
//! | `=lt=` | `<`      | number, date-time or duration     |
//! | `=le=` | `<=`     | number, date-time or duration     |
//! | `=in=` | `in`     | tuple `[a+b+c]`                   |
//! | `=q=`  | `query`  | anything                          |
//!
//! ### Wildcards
//!
//! One `*` may precede and one may follow an argument. The asterisks are not
//! stored in the value; they are flags on the [`Argument`].
//!
//! ## Examples
//!
//! ```text
//! column==va\,lue,b==a            // argument `va,lue`
//! updated=gt=2003-12-13T00:00:00Z // date-time argument
//! tags=in=[rust+parser]           // tuple argument
//! deleted                         // existence check
//! ```
pub mod node;
pub mod operators;
pub mod tokens;
pub mod visitor;

pub use node::{
    Argument, Binary, Constant, Expression, Node, NodeKind, NodeRef, Selector, WalkOperation,
};
pub use operators::{Comparison, LogicOp, Operator};
pub use tokens::Token;
pub use visitor::Visitor;
