use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::{Token, tokenize},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed expression, ready to be evaluated.
///
/// A `Formula` holds the root of the expression tree together with the name
/// of the variable registered during parsing, if any. Parsing once and
/// evaluating many times with different variable values avoids re-scanning
/// the source on every call.
///
/// # Example
/// ```
/// use shuntyard::interpreter::parser::Formula;
///
/// let formula = Formula::parse("x * x + 1").unwrap();
/// assert_eq!(formula.variable(), Some("x"));
/// assert_eq!(formula.eval(2.0).unwrap(), 5.0);
/// assert_eq!(formula.eval(10.0).unwrap(), 101.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub(crate) root:     Expr,
    pub(crate) variable: Option<String>,
}

/// An entry on the operator stack: a pending operator awaiting reduction,
/// or an open-parenthesis barrier that no reduction may cross.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Pending {
    Operator(BinaryOperator),
    OpenParen,
}

impl Formula {
    /// Parses a source expression into a `Formula`.
    ///
    /// Runs a two-stack operator-precedence reduction over the token
    /// stream: operands accumulate as tree nodes on one stack while pending
    /// operators wait on the other. An incoming operator first pops and
    /// applies every stacked operator of greater or equal precedence, which
    /// makes operators of equal precedence reduce left to right. Open
    /// parentheses are pushed as barriers; a closing parenthesis reduces
    /// back to the nearest barrier and discards it.
    ///
    /// After the scan, the remaining operators are drained the same way and
    /// exactly one node must be left: the root of the expression tree.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    ///
    /// # Returns
    /// The parsed `Formula`.
    ///
    /// # Errors
    /// - `InvalidCharacter` / `InvalidNumber` from tokenization.
    /// - `SecondVariable` if a second, differently-named variable appears.
    /// - `UnexpectedParenthesis` for a `)` with no matching `(`.
    /// - `MissingClosingParenthesis` for a `(` that is never closed.
    /// - `MissingOperand` if an operator has fewer than two operands, or
    ///   the expression yields no value at all.
    /// - `MissingOperator` if more than one node is left after the drain.
    pub fn parse(source: &str) -> ParseResult<Self> {
        let tokens = tokenize(source)?;

        let mut operands: Vec<Expr> = Vec::new();
        let mut operators: Vec<(Pending, usize)> = Vec::new();
        let mut variable: Option<String> = None;

        for (token, position) in tokens {
            match token {
                Token::Number(value) => operands.push(Expr::Literal { value, position }),

                Token::Identifier(name) => {
                    match &variable {
                        Some(first) if *first == name => {},
                        Some(first) => {
                            return Err(ParseError::SecondVariable { first: first.clone(),
                                                                    second: name,
                                                                    position });
                        },
                        None => variable = Some(name.clone()),
                    }
                    operands.push(Expr::Variable { name, position });
                },

                Token::Plus => {
                    push_operator(BinaryOperator::Add, position, &mut operands, &mut operators)?;
                },
                Token::Minus => {
                    push_operator(BinaryOperator::Sub, position, &mut operands, &mut operators)?;
                },
                Token::Star => {
                    push_operator(BinaryOperator::Mul, position, &mut operands, &mut operators)?;
                },
                Token::Slash => {
                    push_operator(BinaryOperator::Div, position, &mut operands, &mut operators)?;
                },

                Token::LParen => operators.push((Pending::OpenParen, position)),

                Token::RParen => loop {
                    match operators.pop() {
                        Some((Pending::Operator(op), op_position)) => {
                            reduce(&mut operands, op, op_position)?;
                        },
                        Some((Pending::OpenParen, _)) => break,
                        None => return Err(ParseError::UnexpectedParenthesis { position }),
                    }
                },

                // spaces are skipped during tokenization
                Token::Ignored => {},
            }
        }

        while let Some((entry, entry_position)) = operators.pop() {
            match entry {
                Pending::Operator(op) => reduce(&mut operands, op, entry_position)?,
                Pending::OpenParen => {
                    return Err(ParseError::MissingClosingParenthesis { position: entry_position });
                },
            }
        }

        let root = operands.pop()
                           .ok_or(ParseError::MissingOperand { position: 0 })?;
        if !operands.is_empty() {
            return Err(ParseError::MissingOperator { position: root.position() });
        }

        Ok(Self { root, variable })
    }

    /// Returns the name of the variable registered during parsing, if any.
    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Returns whether the formula contains no variable references.
    ///
    /// A constant formula evaluates to the same value regardless of the
    /// variable value supplied to [`eval`](Self::eval).
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.variable.is_none()
    }
}

/// Pushes an incoming operator onto the operator stack.
///
/// Before the push, every stacked operator of greater or equal precedence
/// above the nearest barrier is popped and applied. The greater-or-equal
/// comparison reduces equal-precedence chains immediately, left to right.
fn push_operator(op: BinaryOperator,
                 position: usize,
                 operands: &mut Vec<Expr>,
                 operators: &mut Vec<(Pending, usize)>)
                 -> ParseResult<()> {
    while let Some((Pending::Operator(top), top_position)) = operators.last().copied()
          && top.precedence() >= op.precedence()
    {
        operators.pop();
        reduce(operands, top, top_position)?;
    }

    operators.push((Pending::Operator(op), position));
    Ok(())
}

/// Applies one operator to the top two operand nodes.
///
/// The node pushed second is the right operand. The combined node is pushed
/// back in place of both.
fn reduce(operands: &mut Vec<Expr>, op: BinaryOperator, position: usize) -> ParseResult<()> {
    let right = operands.pop()
                        .ok_or(ParseError::MissingOperand { position })?;
    let left = operands.pop()
                       .ok_or(ParseError::MissingOperand { position })?;

    operands.push(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   position });
    Ok(())
}
