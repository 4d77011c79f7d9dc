//! Validate fiql filters and run them against JSON input

use serde_json::Value;

use super::CliError;
use crate::{Evaluator, ParserConfig};

/// How a validated filter is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Normalized infix form, e.g. `(title == foo* AND stars > 10)`
    #[default]
    Text,
    /// JSON projection of the tree
    Json,
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter to check
    pub query: String,
    /// JSON input string, a single record or an array of records
    pub input: Option<String>,
    /// Output format when no input is given
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Reject bare selectors without a comparison
    pub strict: bool,
    /// Override the maximum group nesting
    pub max_depth: Option<usize>,
}

impl CheckOptions {
    fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::default().with_unary_selectors(!self.strict);
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        config
    }
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// The filter is valid; holds its rendering in the requested format
    Valid(String),
    /// The filter was evaluated; holds the matching records
    Matches(Value),
}

/// Execute a fiql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = crate::parse_with_config(&options.query, &options.parser_config())?;

    let Some(input) = options.input.as_ref() else {
        let rendered = match (options.format, options.pretty) {
            (OutputFormat::Text, _) => expression.to_string(),
            (OutputFormat::Json, false) => crate::to_json(&expression)?,
            (OutputFormat::Json, true) => crate::to_json_pretty(&expression)?,
        };
        return Ok(CheckResult::Valid(rendered));
    };

    let records = match serde_json::from_str::<Value>(input)? {
        Value::Array(records) => records,
        record => vec![record],
    };

    let evaluator = Evaluator::new();
    let matches = evaluator
        .filter(&expression, &records)?
        .into_iter()
        .cloned()
        .collect();
    Ok(CheckResult::Matches(Value::Array(matches)))
}
