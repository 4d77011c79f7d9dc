//! Argument classifiers.
//!
//! Each comparator validates its argument with one of the functions below
//! (see [`Comparison::validator`](crate::ast::Comparison::validator)). A
//! classifier never looks at anything but the literal, so the same literal
//! always gets the same verdict.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use crate::value::ValueType;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid number regex")
});

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+-]?P(?:[0-9]+(?:\.[0-9]+)?Y)?(?:[0-9]+(?:\.[0-9]+)?M)?(?:[0-9]+(?:\.[0-9]+)?W)?(?:[0-9]+(?:\.[0-9]+)?D)?(?:T(?:[0-9]+(?:\.[0-9]+)?H)?(?:[0-9]+(?:\.[0-9]+)?M)?(?:[0-9]+(?:\.[0-9]+)?S)?)?$",
    )
    .expect("valid duration regex")
});

/// Outcome of classifying one literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub recommended: ValueType,
    /// Shape the comparator expected, used in the rejection message
    pub hint: &'static str,
}

impl Verdict {
    fn accept(recommended: ValueType) -> Self {
        Verdict {
            accepted: true,
            recommended,
            hint: "",
        }
    }

    fn reject(recommended: ValueType, hint: &'static str) -> Self {
        Verdict {
            accepted: false,
            recommended,
            hint,
        }
    }
}

pub type Validator = fn(&str) -> Verdict;

pub fn is_number(literal: &str) -> bool {
    NUMBER.is_match(literal)
}

pub fn is_datetime(literal: &str) -> bool {
    DateTime::parse_from_rfc3339(literal).is_ok()
}

/// Shape check only; the components are read by
/// [`IsoDuration::parse`](crate::duration::IsoDuration::parse). A bare `P`
/// or `PT` has no component and is not a duration.
pub fn is_duration(literal: &str) -> bool {
    DURATION.is_match(literal) && !literal.ends_with(['P', 'T'])
}

/// Relational comparators: number, date-time or duration, in that order.
pub fn number_or_date(literal: &str) -> Verdict {
    if is_number(literal) {
        Verdict::accept(ValueType::Number)
    } else if is_datetime(literal) {
        Verdict::accept(ValueType::DateTime)
    } else if is_duration(literal) {
        Verdict::accept(ValueType::Duration)
    } else {
        Verdict::reject(ValueType::String, "number or date or duration")
    }
}

/// `=in=`: the literal must be wrapped in brackets.
pub fn in_clause(literal: &str) -> Verdict {
    if literal.len() >= 2 && literal.starts_with('[') && literal.ends_with(']') {
        Verdict::accept(ValueType::Tuple)
    } else {
        Verdict::reject(ValueType::Tuple, "in clause [a+b+c]")
    }
}

/// `==`, `!=` and `=q=` accept anything and only recommend a type.
pub fn any_value(literal: &str) -> Verdict {
    if is_datetime(literal) {
        Verdict::accept(ValueType::DateTime)
    } else if is_duration(literal) {
        Verdict::accept(ValueType::Duration)
    } else if is_number(literal) {
        Verdict::accept(ValueType::Number)
    } else {
        Verdict::accept(ValueType::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Comparison;

    #[test]
    fn test_relational() {
        let cases = vec![
            ("1", ValueType::Number),
            ("1.1", ValueType::Number),
            ("+100", ValueType::Number),
            ("-100", ValueType::Number),
            ("2003-12-13T00:00:00Z", ValueType::DateTime),
            ("-P1D", ValueType::Duration),
            ("P1.4Y2M", ValueType::Duration),
            ("+P5W", ValueType::Duration),
            ("P3DT4H59M", ValueType::Duration),
        ];
        for (literal, expected) in cases {
            let verdict = number_or_date(literal);
            assert!(verdict.accepted, "Failed for literal: {}", literal);
            assert_eq!(verdict.recommended, expected, "Failed for literal: {}", literal);
        }

        let verdict = number_or_date("invalid");
        assert!(!verdict.accepted);
        assert_eq!(verdict.hint, "number or date or duration");
    }

    #[test]
    fn test_in_clause() {
        assert!(in_clause("[a+b]").accepted);
        assert_eq!(in_clause("[a]").recommended, ValueType::Tuple);

        let verdict = in_clause("123");
        assert!(!verdict.accepted);
        assert_eq!(verdict.hint, "in clause [a+b+c]");
        assert!(!in_clause("[").accepted);
        assert!(!in_clause("").accepted);
    }

    #[test]
    fn test_any_value_prefers_datetime_then_duration() {
        assert_eq!(any_value("2003-12-13T18:30:02Z").recommended, ValueType::DateTime);
        assert_eq!(any_value("-P5Y").recommended, ValueType::Duration);
        assert_eq!(any_value("-100.0").recommended, ValueType::Number);
        assert_eq!(any_value("foo").recommended, ValueType::String);
        assert!(any_value("").accepted);
    }

    #[test]
    fn test_duration_needs_a_component() {
        assert!(is_duration("PT1S"));
        assert!(!is_duration("P"));
        assert!(!is_duration("-PT"));
        assert_eq!(any_value("P").recommended, ValueType::String);
    }

    #[test]
    fn test_bare_period_is_not_a_number() {
        assert!(!is_number("."));
        assert!(!is_number("1.2.3"));
        assert!(is_number(".5"));
    }

    #[test]
    fn test_classification_is_stable() {
        for comparison in Comparison::ALL {
            for literal in ["foo", "12", "P1D", "[a+b]", "2003-12-13T18:30:02Z"] {
                let validator = comparison.validator();
                assert_eq!(validator(literal), validator(literal));
            }
        }
    }
}
