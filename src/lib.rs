//! A FIQL filter parser.
//!
//! ```
//! let tree = fiql_parser::parse("title==foo*;(updated=lt=-P1D,title==*bar)").unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     "(title == foo* AND (updated < -P1D OR title == *bar))"
//! );
//! ```
pub mod ast;
pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{
    Argument, Comparison, Expression, LogicOp, Node, NodeKind, NodeRef, Selector, Token, Visitor,
    WalkOperation,
};
pub use config::ParserConfig;
pub use duration::{DurationError, IsoDuration};
pub use error::{ErrorKind, ParseError, Position};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::Lexer;
pub use output::{to_json, to_json_pretty};
pub use parser::Parser;
pub use value::{ValueError, ValueType};

/// Parses `input` with the default configuration.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}

/// Parses `input` with the given [`ParserConfig`].
pub fn parse_with_config(input: &str, config: &ParserConfig) -> Result<Expression, ParseError> {
    Parser::with_config(Lexer::new(input), config.clone()).parse()
}
