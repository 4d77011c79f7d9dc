use std::fmt;

use crate::classify::{self, Validator};

/// Logic operators joining two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    /// Conjunction (`;`)
    And,
    /// Disjunction (`,`)
    Or,
}

impl LogicOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }

    /// The FIQL character for this operator
    pub fn fiql(&self) -> char {
        match self {
            LogicOp::And => ';',
            LogicOp::Or => ',',
        }
    }
}

/// Comparison operators binding a selector to an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Greater than (`=gt=`)
    GreaterThan,
    /// Less than (`=lt=`)
    LessThan,
    /// Greater than or equal (`=ge=`)
    GreaterOrEqual,
    /// Less than or equal (`=le=`)
    LessOrEqual,
    /// Membership in a tuple (`=in=`)
    In,
    /// Free-form query, e.g. fuzzy search (`=q=`)
    Query,
}

impl Comparison {
    pub const ALL: [Comparison; 8] = [
        Comparison::Equal,
        Comparison::NotEqual,
        Comparison::GreaterThan,
        Comparison::LessThan,
        Comparison::GreaterOrEqual,
        Comparison::LessOrEqual,
        Comparison::In,
        Comparison::Query,
    ];

    /// Maps comparator text to a comparison, ignoring ASCII case.
    pub fn from_fiql(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "==" => Some(Comparison::Equal),
            "!=" => Some(Comparison::NotEqual),
            "=gt=" => Some(Comparison::GreaterThan),
            "=ge=" => Some(Comparison::GreaterOrEqual),
            "=lt=" => Some(Comparison::LessThan),
            "=le=" => Some(Comparison::LessOrEqual),
            "=in=" => Some(Comparison::In),
            "=q=" => Some(Comparison::Query),
            _ => None,
        }
    }

    /// The comparator as written in FIQL.
    pub fn fiql(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::GreaterThan => "=gt=",
            Comparison::LessThan => "=lt=",
            Comparison::GreaterOrEqual => "=ge=",
            Comparison::LessOrEqual => "=le=",
            Comparison::In => "=in=",
            Comparison::Query => "=q=",
        }
    }

    /// The normalized operator used when rendering and projecting the AST.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "<>",
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
            Comparison::GreaterOrEqual => ">=",
            Comparison::LessOrEqual => "<=",
            Comparison::In => "in",
            Comparison::Query => "query",
        }
    }

    /// `=gt=`, `=lt=`, `=ge=` and `=le=`
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Comparison::GreaterThan
                | Comparison::LessThan
                | Comparison::GreaterOrEqual
                | Comparison::LessOrEqual
        )
    }

    /// The classifier applied to this comparator's argument.
    pub fn validator(&self) -> Validator {
        match self {
            Comparison::In => classify::in_clause,
            c if c.is_relational() => classify::number_or_date,
            _ => classify::any_value,
        }
    }
}

/// Operator carried by a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Logic(LogicOp),
    Comparison(Comparison),
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Logic(op) => op.as_str(),
            Operator::Comparison(c) => c.as_str(),
        }
    }

    pub fn is_logic(&self) -> bool {
        matches!(self, Operator::Logic(_))
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
