use crate::ast::{Argument, Comparison, Expression, LogicOp, Selector};

/// Receives callbacks while a tree is walked with `accept`.
///
/// The walk is infix: for `a==b;c==d` a visitor sees
///
/// ```text
/// entered(root) selector(a) comparison(==) argument(b) operator(AND)
/// selector(c) comparison(==) argument(d) left(root)
/// ```
///
/// Entered/left pairs are emitted for the document root and for every
/// parenthesized group, so a visitor can rebuild the bracket structure.
/// Visitors keep whatever state they need; the tree is never modified.
///
/// # Examples
///
/// ```
/// use fiql_parser::ast::{Argument, Comparison, Expression, LogicOp, Selector, Visitor};
///
/// #[derive(Default)]
/// struct Fields(Vec<String>);
///
/// impl Visitor for Fields {
///     fn visit_operator(&mut self, _operator: LogicOp) {}
///     fn visit_comparison(&mut self, _comparison: Comparison) {}
///     fn visit_selector(&mut self, selector: &Selector) {
///         self.0.push(selector.name().to_string());
///     }
///     fn visit_argument(&mut self, _argument: &Argument) {}
/// }
///
/// let tree = fiql_parser::parse("title==foo*;updated=lt=-P1D").unwrap();
/// let mut fields = Fields::default();
/// tree.accept(&mut fields);
/// assert_eq!(fields.0, vec!["title", "updated"]);
/// ```
pub trait Visitor {
    /// Called before the child of the document root or of a group.
    fn visit_expression_entered(&mut self, _expression: &Expression) {}

    /// Called after the child of the document root or of a group.
    fn visit_expression_left(&mut self, _expression: &Expression) {}

    fn visit_operator(&mut self, operator: LogicOp);

    fn visit_comparison(&mut self, comparison: Comparison);

    fn visit_selector(&mut self, selector: &Selector);

    fn visit_argument(&mut self, argument: &Argument);
}
