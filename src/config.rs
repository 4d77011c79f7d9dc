/// Parser settings.
///
/// ```
/// use fiql_parser::{ParserConfig, parse_with_config};
///
/// let strict = ParserConfig::default().with_unary_selectors(false);
/// assert!(parse_with_config("deleted", &strict).is_err());
/// assert!(parse_with_config("deleted", &ParserConfig::default()).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed parenthesis nesting. Chains of logic operators do not
    /// count towards it.
    pub max_depth: usize,

    /// Accept a selector without comparator as an existence check. When off,
    /// a bare selector is a syntax error asking for a comparator.
    pub allow_unary_selectors: bool,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_unary_selectors: true,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_unary_selectors(mut self, allow: bool) -> Self {
        self.allow_unary_selectors = allow;
        self
    }
}
