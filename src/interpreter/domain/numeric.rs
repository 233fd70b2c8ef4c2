use crate::interpreter::{
    domain::core::Domain,
    evaluator::{core::EvalResult, shape::BinaryOperator},
    value::number::Number,
};

/// Computes the value of an expression.
///
/// # Example
/// ```
/// use sage::interpreter::{
///     domain::{core::Domain, numeric::Numeric},
///     value::number::Number,
/// };
///
/// let six = Numeric::lift(Number::Integer(6));
/// let two = Numeric::lift(Number::Integer(2));
///
/// let quotient = Numeric::divide(six, two).unwrap();
/// assert_eq!(Numeric::render(&quotient), "3");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Domain for Numeric {
    type Value = Number;

    const NAME: &'static str = "numeric";

    fn lift(number: Number) -> Number {
        number
    }

    fn add(a: Number, b: Number) -> EvalResult<Number> {
        a.apply(BinaryOperator::Add, b)
    }

    fn subtract(a: Number, b: Number) -> EvalResult<Number> {
        a.apply(BinaryOperator::Sub, b)
    }

    fn multiply(a: Number, b: Number) -> EvalResult<Number> {
        a.apply(BinaryOperator::Mul, b)
    }

    fn divide(a: Number, b: Number) -> EvalResult<Number> {
        a.apply(BinaryOperator::Div, b)
    }

    fn power(a: Number, b: Number) -> EvalResult<Number> {
        a.pow(b)
    }

    fn negate(a: Number) -> EvalResult<Number> {
        Ok(a.neg())
    }

    fn parenthesize(a: Number) -> EvalResult<Number> {
        Ok(a)
    }

    fn root(radicand: Number, degree: Number) -> EvalResult<Number> {
        radicand.root(degree)
    }

    fn mixed(whole: Number, fraction: Number) -> EvalResult<Number> {
        whole.apply(BinaryOperator::Add, fraction)
    }

    fn render(value: &Number) -> String {
        value.to_string()
    }
}
