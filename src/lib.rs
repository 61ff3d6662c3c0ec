//! # shuntyard
//!
//! shuntyard is an arithmetic expression evaluator written in Rust.
//! It parses and evaluates expressions made of decimal literals, the four
//! binary operators `+`, `-`, `*` and `/`, parenthesised grouping, and a
//! single free-form named variable whose value is supplied at evaluation
//! time.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::parser::Formula};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum representing an expression as an
/// immutable binary tree, and the `BinaryOperator` registry mapping each
/// operator symbol to its precedence rank and combining behavior.
///
/// # Responsibilities
/// - Defines the expression tree node types.
/// - Attaches byte offsets to nodes for error reporting.
/// - Provides the fixed operator registry consulted during parsing and
///   evaluation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or computing an expression. It standardizes error reporting and
/// carries detailed information about failures, including the offending
/// character or literal and its byte offset in the source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from expression text to numeric result. Parsing uses a
/// two-stack operator-precedence reduction; evaluation walks the resulting
/// tree.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides the reusable [`Formula`] type for parse-once, evaluate-many
///   use.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an expression with no variable value.
///
/// Equivalent to [`evaluate_with`] with a variable value of `0`. Empty or
/// whitespace-only input evaluates to `0` without being parsed.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or computed.
///
/// # Examples
/// ```
/// use shuntyard::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("").unwrap(), 0.0);
///
/// // An unparsable expression reports what went wrong.
/// assert!(evaluate("1 + * 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    evaluate_with(expression, 0.0)
}

/// Evaluates an expression, substituting a value for its variable.
///
/// Empty or whitespace-only input evaluates to `0` without being parsed.
/// If the expression contains no variable, `variable` is ignored. Repeated
/// calls with the same inputs return identical results; the function keeps
/// no state between calls.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or computed.
///
/// # Examples
/// ```
/// use shuntyard::evaluate_with;
///
/// assert_eq!(evaluate_with("x + 5", 3.0).unwrap(), 8.0);
/// assert_eq!(evaluate_with("x * x", 4.0).unwrap(), 16.0);
/// assert_eq!(evaluate_with("2 + 2", 99.0).unwrap(), 4.0);
/// ```
pub fn evaluate_with(expression: &str, variable: f64) -> Result<f64, Error> {
    if expression.trim().is_empty() {
        return Ok(0.0);
    }

    let formula = Formula::parse(expression)?;
    let value = formula.eval(variable)?;

    Ok(value)
}
