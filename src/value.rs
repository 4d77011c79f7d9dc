use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::duration::{DurationError, IsoDuration};

/// The semantic type a classifier recommends for an argument.
///
/// The recommendation is a hint for visitors: the raw text is always kept,
/// and the typed accessors on [`Argument`](crate::ast::Argument) perform the
/// conversion on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    /// Plain text
    #[default]
    String,

    /// Signed integer or decimal number
    ///
    /// # Examples
    /// ```text
    /// 100
    /// -100.0
    /// +1.5
    /// ```
    Number,

    /// RFC 3339 date-time
    ///
    /// # Examples
    /// ```text
    /// 2003-12-13T18:30:02Z
    /// 2003-12-13T18:30:02+01:00
    /// ```
    DateTime,

    /// ISO 8601-2 duration with optional sign
    ///
    /// # Examples
    /// ```text
    /// P3DT4H59M
    /// -P1D
    /// ```
    Duration,

    /// Bracketed, `+` separated list used with `=in=`
    ///
    /// # Examples
    /// ```text
    /// [a+b+c]
    /// ```
    Tuple,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::DateTime => "datetime",
            ValueType::Duration => "duration",
            ValueType::Tuple => "tuple",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when an argument is read as a type it does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("`{0}` is not an integer")]
    NotAnInteger(String),

    #[error("`{value}` is not an RFC 3339 date-time: {reason}")]
    NotADateTime { value: String, reason: String },

    #[error("`{value}` is not a duration: {source}")]
    NotADuration {
        value: String,
        #[source]
        source: DurationError,
    },

    #[error("`{0}` is not a tuple (expected [a+b+c])")]
    NotATuple(String),
}

/// Reads a literal as a float.
pub fn to_number(literal: &str) -> Result<f64, ValueError> {
    literal
        .parse::<f64>()
        .map_err(|_| ValueError::NotANumber(literal.to_string()))
}

/// Reads a literal as an exact decimal. A leading `+` is accepted.
pub fn to_decimal(literal: &str) -> Result<Decimal, ValueError> {
    let unsigned = literal.strip_prefix('+').unwrap_or(literal);
    Decimal::from_str(unsigned).map_err(|_| ValueError::NotANumber(literal.to_string()))
}

/// Reads a literal as an integer; decimals are accepted when they have no
/// fractional part.
pub fn to_integer(literal: &str) -> Result<i64, ValueError> {
    if let Ok(n) = literal.parse::<i64>() {
        return Ok(n);
    }
    let decimal = to_decimal(literal)?;
    if decimal.fract().is_zero()
        && let Some(n) = decimal.to_i64()
    {
        return Ok(n);
    }
    Err(ValueError::NotAnInteger(literal.to_string()))
}

pub fn to_datetime(literal: &str) -> Result<DateTime<FixedOffset>, ValueError> {
    DateTime::parse_from_rfc3339(literal).map_err(|e| ValueError::NotADateTime {
        value: literal.to_string(),
        reason: e.to_string(),
    })
}

pub fn to_duration(literal: &str) -> Result<IsoDuration, ValueError> {
    IsoDuration::parse(literal).map_err(|source| ValueError::NotADuration {
        value: literal.to_string(),
        source,
    })
}

/// Splits `[a+b+c]` into its items. `[]` is the empty tuple.
pub fn to_tuple(literal: &str) -> Result<Vec<String>, ValueError> {
    let inner = literal
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ValueError::NotATuple(literal.to_string()))?;
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    Ok(inner.split('+').map(str::to_string).collect())
}
