use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// The pattern consumes a maximal run of digits and decimal points and
    /// defers validation to the `f64` parser, so a malformed run such as
    /// `1.2.3` fails as a whole literal rather than splitting into two.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// Identifier tokens; the expression's variable name, such as `x`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Runs of spaces between tokens.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a well-formed literal.
/// - `None`: If the slice is not a valid decimal number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes a full source expression.
///
/// Drives the lexer over the whole input, pairing each token with the byte
/// offset of its first character. Offsets are what error messages report,
/// filling the role a line number plays in multi-line input.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The token stream as `(Token, offset)` pairs.
///
/// # Errors
/// - `InvalidNumber` if a digit-led run is not a well-formed literal.
/// - `InvalidCharacter` for any character outside the accepted alphabet.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => return Err(classify_unrecognized(lexer.slice(), lexer.span().start)),
        }
    }

    Ok(tokens)
}

/// Classifies a slice the lexer could not turn into a token.
///
/// A slice starting with a digit can only come from the numeric literal
/// pattern rejecting its text, so it is reported as a malformed number;
/// anything else is a character outside the accepted alphabet.
fn classify_unrecognized(slice: &str, position: usize) -> ParseError {
    match slice.chars().next() {
        Some(c) if c.is_ascii_digit() => ParseError::InvalidNumber { literal: slice.to_string(),
                                                                     position },
        Some(found) => ParseError::InvalidCharacter { found, position },
        // error tokens always cover at least one character
        None => unreachable!(),
    }
}
