/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the expression tree bottom-up, substituting the
/// supplied value for variable references and applying each operator to its
/// two operands. Constant expressions and variable-bearing expressions run
/// through the same path, so both produce identical results for identical
/// inputs.
///
/// # Responsibilities
/// - Reduces an expression tree to a single `f64`.
/// - Substitutes the caller-supplied value for the variable.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer reads the raw expression text and produces a stream of tokens:
/// numeric literals, identifiers, the four operator symbols, and
/// parentheses. Runs of spaces are skipped. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Hands digit-led runs to the numeric parser, rejecting malformed
///   literals.
/// - Reports lexical errors for characters outside the accepted alphabet.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser runs a two-stack operator-precedence reduction (shunting-yard)
/// over the token stream: operands accumulate as tree nodes on one stack
/// while pending operators and open-parenthesis barriers wait on the other,
/// reducing by precedence so the finished tree encodes the conventional
/// order of operations.
///
/// # Responsibilities
/// - Converts tokens into a single-rooted expression tree.
/// - Enforces precedence, left-associativity, and parenthesis balance.
/// - Registers the expression's variable slot and rejects a second name.
pub mod parser;
