use std::fmt;

use crate::interpreter::{
    evaluator::{core::EvalResult, shape::BinaryOperator},
    value::number::Number,
};

/// The base primitives a semantic domain provides.
///
/// Structural handlers are written once against this trait, so the same parse
/// tree evaluates to a number in one domain and to a LaTeX string in another.
/// Domains are stateless; every primitive is an associated function.
pub trait Domain {
    /// The values the domain computes with.
    type Value: Clone + fmt::Debug;

    /// A short name used in logs.
    const NAME: &'static str;

    /// Turns a numeral into a domain value.
    fn lift(number: Number) -> Self::Value;

    /// `a + b`
    fn add(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// `a - b`
    fn subtract(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// `a × b`
    fn multiply(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// `a / b`
    fn divide(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// `a` raised to `b`.
    fn power(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// `-a`
    fn negate(a: Self::Value) -> EvalResult<Self::Value>;

    /// `(a)`
    fn parenthesize(a: Self::Value) -> EvalResult<Self::Value>;

    /// The `degree`-th root of `radicand`.
    fn root(radicand: Self::Value, degree: Self::Value) -> EvalResult<Self::Value>;

    /// A whole part followed by a fraction, as in "two and three quarters".
    fn mixed(whole: Self::Value, fraction: Self::Value) -> EvalResult<Self::Value>;

    /// Produces the final text of a result.
    fn render(value: &Self::Value) -> String;

    /// Applies the primitive that corresponds to `op`.
    fn apply(op: BinaryOperator, a: Self::Value, b: Self::Value) -> EvalResult<Self::Value> {
        match op {
            BinaryOperator::Add => Self::add(a, b),
            BinaryOperator::Sub => Self::subtract(a, b),
            BinaryOperator::Mul => Self::multiply(a, b),
            BinaryOperator::Div => Self::divide(a, b),
        }
    }
}
