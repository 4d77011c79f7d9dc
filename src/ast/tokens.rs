use std::fmt;

use crate::ast::Comparison;

/// Lexical tokens produced by the [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Raw value: a selector or an argument, with escapes already resolved
    ///
    /// # Examples
    /// ```text
    /// title
    /// 2003-12-13T18:30:02Z
    /// va\,lue        // Value("va,lue")
    /// ```
    Value(String),

    /// Wildcard marker before or after an argument (`*`)
    Wildcard,

    /// Opening parenthesis of a group (`(`)
    BraceOpen,

    /// Closing parenthesis of a group (`)`)
    BraceClose,

    /// Logical AND (`;`)
    And,

    /// Logical OR (`,`)
    Or,

    /// One of the eight comparators
    ///
    /// # Examples
    /// ```text
    /// ==  !=  =gt=  =ge=  =lt=  =le=  =in=  =q=
    /// ```
    Compare(Comparison),

    /// End of input
    Eof,
}

impl Token {
    pub fn is_logic(&self) -> bool {
        matches!(self, Token::And | Token::Or)
    }

    pub fn is_comparator(&self) -> bool {
        matches!(self, Token::Compare(_))
    }
}

/// Renders the token the way diagnostics name it: value tokens show their
/// literal, comparators their normalized operator.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Value(literal) => f.write_str(literal),
            Token::Wildcard => f.write_str("*"),
            Token::BraceOpen => f.write_str("("),
            Token::BraceClose => f.write_str(")"),
            Token::And => f.write_str("AND"),
            Token::Or => f.write_str("OR"),
            Token::Compare(comparison) => f.write_str(comparison.as_str()),
            Token::Eof => f.write_str("eof"),
        }
    }
}
