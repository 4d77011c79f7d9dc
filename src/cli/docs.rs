//! Documentation content for the fiql CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Comparators,
    Values,
    Matching,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "comparators" | "comparator" | "operators" | "ops" => Some(Self::Comparators),
            "values" | "value" | "types" | "arguments" => Some(Self::Values),
            "matching" | "match" | "evaluation" => Some(Self::Matching),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"FIQL DOCUMENTATION

FIQL (Feed Item Query Language) is a compact, URL-friendly filter syntax.
A filter compares selectors (field names) with arguments and joins the
comparisons with logic operators.

DOCUMENTATION CATEGORIES

  syntax            Constraints, logic operators, groups, wildcards, escaping
  comparators       The eight comparators and how they render
  values            How arguments are classified (number, datetime, ...)
  matching          How `fiql check --input` matches JSON records
  errors            Error messages and their positions

QUICK REFERENCE

  title==foo*              Comparison with suffix wildcard
  a==1;b==2                AND
  a==1,b==2                OR
  (a==1,b==2);c=gt=3       Group
  deleted                  Existence check (bare selector)

Run 'fiql doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Comparators) => Ok(COMPARATORS_DOC),
        Some(DocCategory::Values) => Ok(VALUES_DOC),
        Some(DocCategory::Matching) => Ok(MATCHING_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Constraints, Operators and Groups

CONSTRAINT
  selector comparator argument
    Compares the field named by the selector with the argument.

    Example:
      Filter:  title==foo
      Renders: (title == foo)

LOGIC OPERATORS
  ;    AND
  ,    OR

    AND and OR share one precedence level. Each operator takes the unit on
    its left and everything after it in the same scope on its right.

    Example:
      Filter:  a==1;b==2,c==3
      Renders: (a == 1 AND b == 2 OR c == 3)
      Tree:    AND(a == 1, OR(b == 2, c == 3))

GROUPS
  ( ... )
    Parentheses start a new scope. Groups may nest.

    Example:
      Filter:  (title==foo*);(fml==x,(xfs==a;f==fx))
      Renders: ((title == foo*) AND (fml == x OR (xfs == a AND f == fx)))

WILDCARDS
  *foo   foo*   *foo*
    A `*` directly before or after an argument marks a prefix or suffix
    wildcard. A `*` inside an argument is a syntax error.

ESCAPING
  \;  \,  \(  \)  \*  \=  \!
    A backslash makes the next character part of the value.

    Example:
      Filter:  title==a\,b
      Argument value: a,b

WHITESPACE
    Spaces, tabs and newlines between tokens are ignored. Whitespace ends
    a value.

EXISTENCE CHECK
  selector
    A selector with no comparator checks that the field is present. Use
    `fiql check --strict` to reject bare selectors.
"#;

const COMPARATORS_DOC: &str = r#"COMPARATORS - Comparison Operators

  FIQL     Renders as   Meaning
  ==       ==           equal
  !=       <>           not equal
  =gt=     >            greater than
  =ge=     >=           greater than or equal
  =lt=     <            less than
  =le=     <=           less than or equal
  =in=     in           member of a list
  =q=      query        free text query

    Comparator names are lower case. `=GT=` is a syntax error.

RELATIONAL COMPARATORS
  =gt= =ge= =lt= =le=
    The argument must be a number, an RFC 3339 date-time or an ISO 8601
    duration.

    Example:
      stars=ge=10
      updated=lt=2003-12-13T18:30:02Z
      age=gt=-P1Y

IN
  =in=
    The argument is a bracketed list separated by `+`.

    Example:
      status=in=[open+closed]
"#;

const VALUES_DOC: &str = r#"VALUES - Argument Classification

Every argument carries a recommended type. The raw text is always kept.

  number     100, -100.0, +1.5, .5
  datetime   2003-12-13T18:30:02Z, 2003-12-13T18:30:02+01:00
  duration   P3DT4H59M, -P1D, PT0.5S
  tuple      [a+b+c]
  string     anything else

DURATIONS
  [+-]P[nY][nM][nW][nD][T[nH][nM][nS]]
    M before T is months, after T minutes. One month counts as
    2,629,800 seconds and one year as twelve months.

EQUALITY AND QUERY
    `==`, `!=` and `=q=` accept any value. The type is picked in the order
    datetime, duration, number, string.
"#;

const MATCHING_DOC: &str = r#"MATCHING - Evaluating Filters Against JSON

    fiql check 'title==foo*;stars=ge=10' --input '[{"title":"foobar","stars":12}]'

    Input may be a single record or an array of records. The matching
    records are printed as a JSON array.

SELECTORS
    Dotted paths walk nested objects. A numeric segment indexes an array.

      author.name==alice
      tags.0==rust

EQUALITY
    Arguments are compared by their recommended type. Numbers compare as
    decimals, date-times as instants, durations as milliseconds. Anything
    else compares as text.

    An argument with a wildcard always compares as text, whatever its
    recommended type.

      stars==1*      matches 12 and "1abc"

ARRAYS
    A field holding an array matches when any element matches. `!=`
    matches when no element is equal.

MISSING AND NULL FIELDS
    A missing field never satisfies a comparison except `!=`. A field set
    to null satisfies no comparison at all.
"#;

const ERRORS_DOC: &str = r#"ERRORS - Error Messages

Errors start with `ln:LINE:COLUMN`. The column counts the characters read
on the current line when the error was detected.

  ln:1:5 dangling operator                a==b;
  ln:1:2 dangling comparator              ==b
  ln:1:5 syntax error (unclosed brace `)` )           (a==b
  ln:1:4 syntax error (invalid closing brace `)` )    a==b)
  ln:1:3 syntax error (got `eof` but expected a value)  a==
  ln:1:6 unexpected input (got `=f` but expected one of ==,!=,=gt=,=ge=,=lt=,=le=,=in=,=q=)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_aliases() {
        assert_eq!(DocCategory::from_name("ops"), Some(DocCategory::Comparators));
        assert_eq!(DocCategory::from_name("Errors"), Some(DocCategory::Errors));
        assert_eq!(DocCategory::from_name("nope"), None);
    }

    #[test]
    fn test_unknown_category() {
        assert!(matches!(
            get_doc_category("nope"),
            Err(CliError::UnknownCategory(name)) if name == "nope"
        ));
    }
}
