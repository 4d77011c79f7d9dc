use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

use crate::{
    ast::{Argument, Binary, Comparison, Constant, Expression, LogicOp, Node, Operator},
    duration::IsoDuration,
    value::{self, ValueError, ValueType},
};

/// Errors that can occur while matching a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An argument could not be read as its recommended type
    #[error("Type error: {0}")]
    Value(#[from] ValueError),

    /// A node appeared where the tree shape does not allow it
    #[error("Malformed tree: {0}")]
    Malformed(String),
}

/// Matches parsed filters against JSON records.
///
/// - Selectors are dotted paths through objects (`author.name`); a numeric
///   segment indexes into an array.
/// - A unary selector matches when the field is present and not null.
/// - `==`, `!=` and `=in=` compare by the argument's recommended type and
///   fall back to text. A wildcard argument always compares as text, so
///   `stars==1*` matches `12`.
/// - `=gt=`, `=ge=`, `=lt=` and `=le=` order numbers (as decimals), date-times
///   (as instants) and durations (as milliseconds).
/// - `=q=` is a case-insensitive substring match.
/// - An array field matches when any element matches; `!=` matches when no
///   element is equal.
/// - A null field satisfies no comparison, `!=` included. An absent field
///   only satisfies `!=`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a filter against one record.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiql_parser::Evaluator;
    /// use serde_json::json;
    ///
    /// let filter = fiql_parser::parse("title==foo*;stars=ge=10").unwrap();
    /// let record = json!({"title": "foobar", "stars": 12});
    ///
    /// assert!(Evaluator::new().matches(&filter, &record).unwrap());
    /// ```
    pub fn matches(&self, expression: &Expression, record: &Value) -> Result<bool, EvalError> {
        match expression.child() {
            Some(child) => self.eval_node(child, record),
            None => Ok(true),
        }
    }

    /// Keeps the records the filter matches, in order.
    pub fn filter<'a>(
        &self,
        expression: &Expression,
        records: &'a [Value],
    ) -> Result<Vec<&'a Value>, EvalError> {
        let mut kept = Vec::new();
        for record in records {
            if self.matches(expression, record)? {
                kept.push(record);
            }
        }
        log::debug!("{} of {} records matched", kept.len(), records.len());
        Ok(kept)
    }

    fn eval_node(&self, node: &Node, record: &Value) -> Result<bool, EvalError> {
        match node {
            Node::Expression(e) => self.matches(e, record),
            Node::Binary(b) => self.eval_binary(b, record),
            Node::Constant(Constant::Selector(selector)) => {
                Ok(lookup(record, selector.name()).is_some_and(|v| !v.is_null()))
            }
            Node::Constant(Constant::Argument(argument)) => Err(EvalError::Malformed(format!(
                "argument `{}` outside of a comparison",
                argument
            ))),
        }
    }

    fn eval_binary(&self, binary: &Binary, record: &Value) -> Result<bool, EvalError> {
        match binary.operator() {
            Operator::Logic(LogicOp::And) => Ok(self.eval_node(binary.left(), record)?
                && self.eval_node(binary.right(), record)?),
            Operator::Logic(LogicOp::Or) => Ok(self.eval_node(binary.left(), record)?
                || self.eval_node(binary.right(), record)?),
            Operator::Comparison(_) => {
                let (comparison, selector, argument) = binary.as_comparison().ok_or_else(|| {
                    EvalError::Malformed("comparison without selector and argument".to_string())
                })?;
                self.compare(comparison, lookup(record, selector.name()), argument)
            }
        }
    }

    fn compare(
        &self,
        comparison: Comparison,
        field: Option<&Value>,
        argument: &Argument,
    ) -> Result<bool, EvalError> {
        let Some(field) = field else {
            return Ok(comparison == Comparison::NotEqual);
        };
        if field.is_null() {
            return Ok(false);
        }

        if comparison == Comparison::NotEqual {
            return Ok(!self.compare(Comparison::Equal, Some(field), argument)?);
        }

        if let Value::Array(items) = field {
            for item in items {
                if self.compare_scalar(comparison, item, argument)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        self.compare_scalar(comparison, field, argument)
    }

    fn compare_scalar(
        &self,
        comparison: Comparison,
        field: &Value,
        argument: &Argument,
    ) -> Result<bool, EvalError> {
        match comparison {
            Comparison::Equal | Comparison::NotEqual => equals(field, argument),
            Comparison::Query => Ok(text_of(field).is_some_and(|text| {
                text.to_lowercase()
                    .contains(&argument.value().to_lowercase())
            })),
            Comparison::In => {
                let items = argument.as_tuple()?;
                Ok(text_of(field).is_some_and(|text| {
                    items
                        .iter()
                        .any(|item| item == &text || same_number(field, item))
                }))
            }
            Comparison::GreaterThan => Ok(ordering(field, argument)? == Some(Ordering::Greater)),
            Comparison::LessThan => Ok(ordering(field, argument)? == Some(Ordering::Less)),
            Comparison::GreaterOrEqual => Ok(matches!(
                ordering(field, argument)?,
                Some(Ordering::Greater | Ordering::Equal)
            )),
            Comparison::LessOrEqual => Ok(matches!(
                ordering(field, argument)?,
                Some(Ordering::Less | Ordering::Equal)
            )),
        }
    }
}

/// Resolves a dotted path in a record.
fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(record, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn text_of(field: &Value) -> Option<String> {
    match field {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn decimal_of(field: &Value) -> Option<Decimal> {
    match field {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        Value::String(s) => value::to_decimal(s).ok(),
        _ => None,
    }
}

fn duration_millis_of(field: &Value) -> Option<i64> {
    match field {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => IsoDuration::parse(s).ok().map(|d| d.as_milliseconds()),
        _ => None,
    }
}

fn same_number(field: &Value, item: &str) -> bool {
    match (decimal_of(field), value::to_decimal(item)) {
        (Some(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Orders the field against the argument using the argument's recommended
/// type. `None` when the field does not have that type.
fn ordering(field: &Value, argument: &Argument) -> Result<Option<Ordering>, EvalError> {
    let ordering = match argument.recommended() {
        ValueType::Number => {
            let expected = argument.as_decimal()?;
            decimal_of(field).map(|actual| actual.cmp(&expected))
        }
        ValueType::DateTime => {
            let expected = argument.as_datetime()?;
            match field {
                Value::String(s) => value::to_datetime(s).ok().map(|actual| actual.cmp(&expected)),
                _ => None,
            }
        }
        ValueType::Duration => {
            let expected = argument.as_duration()?.as_milliseconds();
            duration_millis_of(field).map(|actual| actual.cmp(&expected))
        }
        ValueType::String | ValueType::Tuple => None,
    };
    Ok(ordering)
}

fn equals(field: &Value, argument: &Argument) -> Result<bool, EvalError> {
    if argument.starts_with_wildcard() || argument.ends_with_wildcard() {
        return Ok(text_of(field).is_some_and(|text| text_matches(&text, argument)));
    }
    if let Some(ordering) = ordering(field, argument)? {
        return Ok(ordering == Ordering::Equal);
    }
    Ok(text_of(field).is_some_and(|text| text_matches(&text, argument)))
}

fn text_matches(text: &str, argument: &Argument) -> bool {
    let pattern = argument.value();
    match (argument.starts_with_wildcard(), argument.ends_with_wildcard()) {
        (true, true) => text.contains(pattern),
        (true, false) => text.ends_with(pattern),
        (false, true) => text.starts_with(pattern),
        (false, false) => text == pattern,
    }
}
