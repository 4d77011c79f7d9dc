//! Errors raised while lexing and parsing FIQL input.
//!
//! Every failure carries the cursor position at which it was detected and
//! renders as `ln:<line>:<column> <message>`, e.g.
//!
//! ```text
//! ln:1:5 dangling operator
//! ln:1:17 syntax error (got `invalid` but expected number or date or duration)
//! ```

use std::fmt;

use thiserror::Error;

/// The comparators accepted by the lexer, as listed in diagnostics.
pub const VALID_COMPARATORS: &str = "==,!=,=gt=,=ge=,=lt=,=le=,=in=,=q=";

/// Line and column of the lexer cursor.
///
/// Lines start at 1. The column is the number of characters consumed on the
/// current line, so an error raised right after consuming a character points
/// at that character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The reason a parse failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A comparator contained a character outside `=gltqein`
    #[error("unexpected input (got `{found}` but expected one of {})", VALID_COMPARATORS)]
    UnexpectedInput { found: String },

    /// Input ended in the middle of a comparator
    #[error("unexpected end of file (got `{found}` but expected one of {})", VALID_COMPARATORS)]
    UnexpectedEof { found: String },

    #[error("syntax error (invalid closing brace `)` )")]
    InvalidClosingBrace,

    #[error("syntax error (unclosed brace `)` )")]
    UnclosedBrace,

    /// A comparator or argument was required but something else was found
    #[error("syntax error (got `{found}` but expected a value)")]
    ExpectedValue { found: String },

    /// A unit was complete and neither a logic operator nor the end of its
    /// scope followed
    #[error("syntax error (got `{found}` but expected an operator)")]
    ExpectedOperator { found: String },

    /// The argument does not have the shape its comparator requires
    #[error("syntax error (got `{found}` but expected {expected})")]
    InvalidValue {
        found: String,
        expected: &'static str,
    },

    #[error("syntax error (nesting deeper than {limit} levels)")]
    NestingTooDeep { limit: usize },

    #[error("dangling operator")]
    DanglingOperator,

    #[error("dangling comparator")]
    DanglingComparator,
}

/// A positioned parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ln:{position} {kind}")]
pub struct ParseError {
    pub position: Position,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(position: Position, kind: ErrorKind) -> Self {
        ParseError { position, kind }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// True for the two dangling categories (missing operand next to a
    /// logic operator or comparator).
    pub fn is_dangling(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::DanglingOperator | ErrorKind::DanglingComparator
        )
    }
}
