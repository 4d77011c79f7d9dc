//! Recursive descent parser for FIQL.
//!
//! # Grammar
//!
//! ```text
//! document   := chain?
//! chain      := unit (logic unit)*          // nests to the right
//! unit       := '(' chain ')' | comparison | selector
//! comparison := selector comparator argument
//! argument   := '*'? VALUE '*'?
//! logic      := ';' | ','
//! ```
//!
//! AND and OR share one precedence level. Every logic operator takes the unit
//! on its left and the rest of the current scope on its right, so
//! `a;b,c` is `AND(a, OR(b, c))`.

use crate::{
    ast::{Argument, Binary, Comparison, Constant, Expression, LogicOp, Node, Selector, Token},
    config::ParserConfig,
    error::{ErrorKind, ParseError},
    lexer::Lexer,
};

/// Where the chain being parsed ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// At end of input
    Root,
    /// Before the closing parenthesis of a group
    Group,
}

pub struct Parser {
    lexer: Lexer,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self::with_config(lexer, ParserConfig::default())
    }

    pub fn with_config(lexer: Lexer, config: ParserConfig) -> Self {
        Parser {
            lexer,
            config,
            depth: 0,
        }
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(self.lexer.position(), kind)
    }

    /// Parses the whole input into a root expression.
    ///
    /// Empty input yields a root without child. Parsing stops at the first
    /// error.
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let child = self.parse_chain(Scope::Root)?;
        let expression = Expression::root(child);
        log::debug!("parsed {}", expression);
        Ok(expression)
    }

    /// Parses units joined by logic operators until the scope ends.
    ///
    /// The units are collected first and folded from the right afterwards,
    /// so long chains do not grow the call stack.
    fn parse_chain(&mut self, scope: Scope) -> Result<Option<Node>, ParseError> {
        let mut units = Vec::new();
        let mut operators = Vec::new();

        loop {
            let unit = match self.lexer.next_token()? {
                Token::Eof if !operators.is_empty() => {
                    return Err(self.error(ErrorKind::DanglingOperator));
                }
                Token::Eof => return Ok(None),
                Token::BraceClose => return Err(self.error(ErrorKind::InvalidClosingBrace)),
                Token::And | Token::Or => return Err(self.error(ErrorKind::DanglingOperator)),
                Token::Compare(_) => return Err(self.error(ErrorKind::DanglingComparator)),
                Token::Wildcard => {
                    return Err(self.error(ErrorKind::ExpectedValue {
                        found: Token::Wildcard.to_string(),
                    }));
                }
                Token::BraceOpen => self.parse_group()?,
                Token::Value(literal) => self.parse_comparison(literal)?,
            };
            units.push(unit);

            match self.lexer.peek_token()? {
                Token::And => operators.push(LogicOp::And),
                Token::Or => operators.push(LogicOp::Or),
                Token::Eof => break,
                Token::BraceClose if scope == Scope::Group => break,
                Token::BraceClose => return Err(self.error(ErrorKind::InvalidClosingBrace)),
                Token::Compare(_) => return Err(self.error(ErrorKind::DanglingComparator)),
                other => {
                    return Err(self.error(ErrorKind::ExpectedOperator {
                        found: other.to_string(),
                    }));
                }
            }
            // the logic operator
            self.lexer.next_token()?;
        }

        let mut chain = units.pop();
        while let (Some(op), Some(left)) = (operators.pop(), units.pop()) {
            chain = chain.map(|right| Node::Binary(Binary::logic(op, left, right)));
        }
        Ok(chain)
    }

    /// Parses a group after its opening parenthesis has been consumed.
    fn parse_group(&mut self) -> Result<Node, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(ErrorKind::NestingTooDeep {
                limit: self.config.max_depth,
            }));
        }
        self.depth += 1;
        log::trace!("entering group at depth {}", self.depth);
        let child = self.parse_chain(Scope::Group)?;
        self.depth -= 1;

        match (self.lexer.next_token()?, child) {
            (Token::BraceClose, Some(child)) => Ok(Node::Expression(Expression::group(child))),
            _ => Err(self.error(ErrorKind::UnclosedBrace)),
        }
    }

    /// Parses what follows a value token at the start of a unit: either a
    /// comparison or, when the unit ends right away, a unary selector.
    fn parse_comparison(&mut self, selector: String) -> Result<Node, ParseError> {
        if self.config.allow_unary_selectors
            && matches!(
                self.lexer.peek_token()?,
                Token::And | Token::Or | Token::BraceClose | Token::Eof
            )
        {
            return Ok(Node::Constant(Constant::Selector(Selector::unary(selector))));
        }

        let comparison = match self.lexer.next_token()? {
            Token::Compare(comparison) => comparison,
            other => {
                return Err(self.error(ErrorKind::ExpectedValue {
                    found: other.to_string(),
                }));
            }
        };
        let argument = self.parse_argument(comparison)?;

        Ok(Node::Binary(Binary::comparison(
            comparison,
            Selector::new(selector),
            argument,
        )))
    }

    /// Parses `'*'? VALUE '*'?` and classifies the value for `comparison`.
    fn parse_argument(&mut self, comparison: Comparison) -> Result<Argument, ParseError> {
        let mut token = self.lexer.next_token()?;
        let prefix_wildcard = token == Token::Wildcard;
        if prefix_wildcard {
            token = self.lexer.next_token()?;
        }

        let literal = match token {
            Token::Value(literal) => literal,
            other => {
                return Err(self.error(ErrorKind::ExpectedValue {
                    found: other.to_string(),
                }));
            }
        };

        let verdict = comparison.validator()(&literal);
        if !verdict.accepted {
            return Err(self.error(ErrorKind::InvalidValue {
                found: literal,
                expected: verdict.hint,
            }));
        }

        let suffix_wildcard = self.lexer.peek_token()? == Token::Wildcard;
        if suffix_wildcard {
            self.lexer.next_token()?;
        }

        Ok(Argument::new(
            literal,
            prefix_wildcard,
            suffix_wildcard,
            verdict.recommended,
        ))
    }
}
