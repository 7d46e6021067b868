use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Evaluate, Evaluation},
        value::{environment::Environment, output::Output},
    },
};

const fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

/// Applies a binary operator to two numbers.
///
/// Comparisons produce `1.0` or `0.0`. Division by zero produces NaN instead
/// of failing, and `^` follows `f64::powf`, so a negative base with a
/// fractional exponent is NaN as well.
///
/// # Example
/// ```
/// use while_lang::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Less, 1.0, 2.0), 1.0);
/// assert!(apply_binary(BinaryOperator::Div, 7.0, 0.0).is_nan());
/// assert!(apply_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Less => truth(left < right),
        BinaryOperator::Greater => truth(left > right),
        BinaryOperator::Equal => truth(left == right),
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                f64::NAN
            } else {
                left / right
            }
        },
        BinaryOperator::Pow => left.powf(right),
    }
}

/// Evaluates both operands, left first, then combines them.
///
/// The right operand runs against the environment and output the left one
/// produced, so `(x := 2) + x` sees the new `x`.
pub(crate) fn eval_binary_op(left: &Expr,
                             op: BinaryOperator,
                             right: &Expr,
                             env: Environment,
                             out: Output)
                             -> EvalResult<Evaluation> {
    let lhs = left.evaluate(env, out)?;
    let rhs = right.evaluate(lhs.env, lhs.out)?;

    Ok(Evaluation { value: apply_binary(op, lhs.value, rhs.value),
                    ..rhs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(apply_binary(BinaryOperator::Add, 1.5, 2.0), 3.5);
        assert_eq!(apply_binary(BinaryOperator::Sub, 1.0, 3.0), -2.0);
        assert_eq!(apply_binary(BinaryOperator::Mul, 4.0, 2.5), 10.0);
        assert_eq!(apply_binary(BinaryOperator::Div, 9.0, 2.0), 4.5);
        assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    }

    #[test]
    fn comparisons_yield_one_or_zero() {
        assert_eq!(apply_binary(BinaryOperator::Greater, 1.0, 2.0), 0.0);
        assert_eq!(apply_binary(BinaryOperator::Equal, 2.0, 2.0), 1.0);
        assert_eq!(apply_binary(BinaryOperator::Equal, f64::NAN, f64::NAN), 0.0);
    }

    #[test]
    fn zero_divisor_is_nan_even_for_zero_dividend() {
        assert!(apply_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
        assert!(apply_binary(BinaryOperator::Div, 1.0, -0.0).is_nan());
    }

    #[test]
    fn left_operand_threads_into_the_right() {
        let expr = Expr::BinaryOp { left:  Box::new(Expr::Assignment { name:  "x".to_string(),
                                                                      value: Box::new(Expr::Literal { value: 2.0 }), }),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::Variable { name: "x".to_string(),
                                                                     line: 1, }), };

        let result = expr.evaluate(Environment::new(), Output::new()).unwrap();
        assert_eq!(result.value, 4.0);
        assert_eq!(result.env.number("x"), Some(2.0));
    }
}
