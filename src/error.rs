/// Parsing errors.
///
/// Defines all error types that can occur during tokenization and parsing of
/// an expression. Parse errors include invalid characters, malformed numeric
/// literals, unbalanced parentheses, and missing operands or operators.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing the value of
/// a parsed expression, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any failure produced while evaluating an expression.
///
/// The two phases of evaluation report through their own error types; this
/// enum unifies them so callers of the top-level entry points can handle a
/// single error type.
pub enum Error {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed, but its value could not be computed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
