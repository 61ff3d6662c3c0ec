use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::parser::Formula,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Formula {
    /// Computes the value of the formula.
    ///
    /// Every variable reference in the tree is substituted with `variable`.
    /// For a constant formula the argument is ignored.
    ///
    /// # Parameters
    /// - `variable`: The value substituted for the formula's variable.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if a division by zero occurs.
    pub fn eval(&self, variable: f64) -> EvalResult<f64> {
        eval_expr(&self.root, variable)
    }
}

/// Evaluates an expression tree bottom-up.
///
/// Literals yield their value, variable references yield the supplied
/// value, and binary nodes evaluate both children before applying the
/// operator. Recursion depth equals the nesting depth of the expression.
pub fn eval_expr(expr: &Expr, variable: f64) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::Variable { .. } => Ok(variable),
        Expr::BinaryOp { left, op, right, position } => {
            let left = eval_expr(left, variable)?;
            let right = eval_expr(right, variable)?;
            apply_operator(*op, left, right, *position)
        },
    }
}

/// Applies a binary operator to two concrete values.
///
/// Division by zero is checked explicitly rather than left to produce an
/// infinity.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// The combined value.
///
/// # Example
/// ```
/// use shuntyard::{ast::BinaryOperator, interpreter::evaluator::apply_operator};
///
/// let result = apply_operator(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
/// assert_eq!(result, 3.0);
/// ```
pub fn apply_operator(op: BinaryOperator,
                      left: f64,
                      right: f64,
                      position: usize)
                      -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(left / right)
        },
    }
}
