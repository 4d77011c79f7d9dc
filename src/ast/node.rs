use std::fmt;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use crate::ast::{Comparison, LogicOp, Operator, Visitor};
use crate::duration::IsoDuration;
use crate::value::{self, ValueError, ValueType};

/// Discriminator of the three node variants, as used by the JSON projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Expression,
    Binary,
    Constant,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Expression => "Expr",
            NodeKind::Binary => "Binary",
            NodeKind::Constant => "Const",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the parsed tree.
///
/// Nodes are created by the [`Parser`](crate::parser::Parser) only and are
/// immutable afterwards. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Document root or parenthesized group
    Expression(Expression),

    /// Logic operator joining two units, or a comparison of a selector with
    /// an argument
    Binary(Binary),

    /// Selector or argument leaf
    Constant(Constant),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Expression(_) => NodeKind::Expression,
            Node::Binary(_) => NodeKind::Binary,
            Node::Constant(_) => NodeKind::Constant,
        }
    }

    /// Direct children in order: zero or one for expressions, two for binary
    /// nodes, none for constants.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Expression(e) => e.child().into_iter().collect(),
            Node::Binary(b) => vec![b.left(), b.right()],
            Node::Constant(_) => Vec::new(),
        }
    }

    /// Walks the node in infix order, see [`Visitor`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Expression(e) => e.accept(visitor),
            Node::Binary(b) => b.accept(visitor),
            Node::Constant(c) => c.accept(visitor),
        }
    }

    /// Calls `f` for every node in infix order, see [`Expression::walk`].
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(NodeRef<'a>, WalkOperation),
    {
        match self {
            Node::Expression(e) => e.walk(f),
            Node::Binary(b) => b.walk(f),
            Node::Constant(c) => c.walk(f),
        }
    }
}

/// Whether a walk callback fires on the way into a node or on the way out.
///
/// Only expressions are reported twice; every other node is reported once,
/// as [`WalkOperation::Entered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkOperation {
    Entered,
    Left,
}

/// A borrowed node as handed to a walk callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Expression(&'a Expression),
    Binary(&'a Binary),
    Constant(&'a Constant),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Expression(_) => NodeKind::Expression,
            NodeRef::Binary(_) => NodeKind::Binary,
            NodeRef::Constant(_) => NodeKind::Constant,
        }
    }
}

/// Scope boundary: the whole document or a parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    root: bool,
    child: Option<Box<Node>>,
}

impl Expression {
    pub(crate) fn root(child: Option<Node>) -> Self {
        Expression {
            root: true,
            child: child.map(Box::new),
        }
    }

    pub(crate) fn group(child: Node) -> Self {
        Expression {
            root: false,
            child: Some(Box::new(child)),
        }
    }

    /// True for the document wrapper, false for a parenthesized group.
    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn child(&self) -> Option<&Node> {
        self.child.as_deref()
    }

    /// True when the document was empty.
    pub fn is_empty(&self) -> bool {
        self.child.is_none()
    }

    pub fn children(&self) -> Vec<&Node> {
        self.child().into_iter().collect()
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expression_entered(self);
        if let Some(child) = &self.child {
            child.accept(visitor);
        }
        visitor.visit_expression_left(self);
    }

    /// Calls `f` for this expression and every node below it.
    ///
    /// An expression is reported when entered, then its child is walked,
    /// then it is reported again when left. A binary node is reported
    /// between the walks of its left and right children. Constants are
    /// reported once.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiql_parser::ast::{NodeRef, WalkOperation};
    ///
    /// let tree = fiql_parser::parse("(a==b)").unwrap();
    /// let mut braces = String::new();
    /// tree.walk(&mut |node, operation| {
    ///     if let NodeRef::Expression(_) = node {
    ///         braces.push(match operation {
    ///             WalkOperation::Entered => '(',
    ///             WalkOperation::Left => ')',
    ///         });
    ///     }
    /// });
    /// assert_eq!(braces, "(())");
    /// ```
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(NodeRef<'a>, WalkOperation),
    {
        f(NodeRef::Expression(self), WalkOperation::Entered);
        if let Some(child) = &self.child {
            child.walk(f);
        }
        f(NodeRef::Expression(self), WalkOperation::Left);
    }
}

/// Node with exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    operator: Operator,
    left: Box<Node>,
    right: Box<Node>,
}

impl Binary {
    pub(crate) fn logic(op: LogicOp, left: Node, right: Node) -> Self {
        Binary {
            operator: Operator::Logic(op),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub(crate) fn comparison(
        comparison: Comparison,
        selector: Selector,
        argument: Argument,
    ) -> Self {
        Binary {
            operator: Operator::Comparison(comparison),
            left: Box::new(Node::Constant(Constant::Selector(selector))),
            right: Box::new(Node::Constant(Constant::Argument(argument))),
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    /// The parts of a comparison node, `None` for logic nodes.
    pub fn as_comparison(&self) -> Option<(Comparison, &Selector, &Argument)> {
        match (self.operator, self.left.as_ref(), self.right.as_ref()) {
            (
                Operator::Comparison(comparison),
                Node::Constant(Constant::Selector(selector)),
                Node::Constant(Constant::Argument(argument)),
            ) => Some((comparison, selector, argument)),
            _ => None,
        }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.left.accept(visitor);
        match self.operator {
            Operator::Logic(op) => visitor.visit_operator(op),
            Operator::Comparison(c) => visitor.visit_comparison(c),
        }
        self.right.accept(visitor);
    }

    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(NodeRef<'a>, WalkOperation),
    {
        self.left.walk(f);
        f(NodeRef::Binary(self), WalkOperation::Entered);
        self.right.walk(f);
    }
}

/// Leaf node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    /// Left-hand side of a comparison, or a bare existence check
    Selector(Selector),

    /// Right-hand side of a comparison
    Argument(Argument),
}

impl Constant {
    /// The stored text, without wildcards.
    pub fn value(&self) -> &str {
        match self {
            Constant::Selector(s) => s.name(),
            Constant::Argument(a) => a.value(),
        }
    }

    pub fn is_selector(&self) -> bool {
        matches!(self, Constant::Selector(_))
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Constant::Selector(s) => visitor.visit_selector(s),
            Constant::Argument(a) => visitor.visit_argument(a),
        }
    }

    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(NodeRef<'a>, WalkOperation),
    {
        f(NodeRef::Constant(self), WalkOperation::Entered);
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Selector(s) => f.write_str(s.name()),
            Constant::Argument(a) => fmt::Display::fmt(a, f),
        }
    }
}

/// A field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    name: String,
    unary: bool,
}

impl Selector {
    pub(crate) fn new(name: String) -> Self {
        Selector { name, unary: false }
    }

    pub(crate) fn unary(name: String) -> Self {
        Selector { name, unary: true }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the selector stands alone (existence check) instead of
    /// being compared to an argument.
    pub fn is_unary(&self) -> bool {
        self.unary
    }
}

/// A comparison argument with its wildcard flags and recommended type.
///
/// The typed accessors convert the raw text on demand; they do not depend
/// on the recommendation, so a visitor may read a `string` argument as a
/// number if it knows better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    value: String,
    prefix_wildcard: bool,
    suffix_wildcard: bool,
    recommended: ValueType,
}

impl Argument {
    pub(crate) fn new(
        value: String,
        prefix_wildcard: bool,
        suffix_wildcard: bool,
        recommended: ValueType,
    ) -> Self {
        Argument {
            value,
            prefix_wildcard,
            suffix_wildcard,
            recommended,
        }
    }

    /// The literal without wildcards.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn starts_with_wildcard(&self) -> bool {
        self.prefix_wildcard
    }

    pub fn ends_with_wildcard(&self) -> bool {
        self.suffix_wildcard
    }

    pub fn recommended(&self) -> ValueType {
        self.recommended
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn as_number(&self) -> Result<f64, ValueError> {
        value::to_number(&self.value)
    }

    pub fn as_decimal(&self) -> Result<Decimal, ValueError> {
        value::to_decimal(&self.value)
    }

    pub fn as_integer(&self) -> Result<i64, ValueError> {
        value::to_integer(&self.value)
    }

    pub fn as_datetime(&self) -> Result<DateTime<FixedOffset>, ValueError> {
        value::to_datetime(&self.value)
    }

    pub fn as_duration(&self) -> Result<IsoDuration, ValueError> {
        value::to_duration(&self.value)
    }

    pub fn as_tuple(&self) -> Result<Vec<String>, ValueError> {
        value::to_tuple(&self.value)
    }
}

/// Renders the argument with its wildcards, e.g. `*bar` or `foo*`.
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix_wildcard {
            f.write_str("*")?;
        }
        f.write_str(&self.value)?;
        if self.suffix_wildcard {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// Builds the infix text of a tree: groups in parentheses, spaces around
/// operators and comparators.
struct Renderer<'a, 'b> {
    out: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl Renderer<'_, '_> {
    fn write(&mut self, text: &str) {
        if self.result.is_ok() {
            self.result = self.out.write_str(text);
        }
    }
}

impl Visitor for Renderer<'_, '_> {
    fn visit_expression_entered(&mut self, _expression: &Expression) {
        self.write("(");
    }

    fn visit_expression_left(&mut self, _expression: &Expression) {
        self.write(")");
    }

    fn visit_operator(&mut self, operator: LogicOp) {
        self.write(" ");
        self.write(operator.as_str());
        self.write(" ");
    }

    fn visit_comparison(&mut self, comparison: Comparison) {
        self.write(" ");
        self.write(comparison.as_str());
        self.write(" ");
    }

    fn visit_selector(&mut self, selector: &Selector) {
        self.write(selector.name());
    }

    fn visit_argument(&mut self, argument: &Argument) {
        if self.result.is_ok() {
            self.result = fmt::Display::fmt(argument, self.out);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer { out: f, result: Ok(()) };
        self.accept(&mut renderer);
        renderer.result
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer { out: f, result: Ok(()) };
        self.accept(&mut renderer);
        renderer.result
    }
}
