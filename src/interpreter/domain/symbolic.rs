use crate::interpreter::{domain::core::Domain, evaluator::core::EvalResult, value::number::Number};

/// Renders an expression as LaTeX.
///
/// Nothing is computed, so no primitive fails: dividing by zero renders as
/// `\frac{a}{0}`.
///
/// # Example
/// ```
/// use sage::interpreter::{
///     domain::{core::Domain, symbolic::Symbolic},
///     value::number::Number,
/// };
///
/// let radicand = Symbolic::lift(Number::Integer(27));
/// let degree = Symbolic::lift(Number::Integer(3));
///
/// let root = Symbolic::root(radicand, degree).unwrap();
/// assert_eq!(root, r"\sqrt[3]{27}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Symbolic;

impl Domain for Symbolic {
    type Value = String;

    const NAME: &'static str = "symbolic";

    fn lift(number: Number) -> String {
        number.to_string()
    }

    fn add(a: String, b: String) -> EvalResult<String> {
        Ok(format!("{a} + {b}"))
    }

    fn subtract(a: String, b: String) -> EvalResult<String> {
        Ok(format!("{a} - {b}"))
    }

    fn multiply(a: String, b: String) -> EvalResult<String> {
        Ok(format!(r"{a} \cdot {b}"))
    }

    fn divide(a: String, b: String) -> EvalResult<String> {
        Ok(format!(r"\frac{{{a}}}{{{b}}}"))
    }

    fn power(a: String, b: String) -> EvalResult<String> {
        Ok(format!("{a}^{{{b}}}"))
    }

    fn negate(a: String) -> EvalResult<String> {
        Ok(format!("-{a}"))
    }

    fn parenthesize(a: String) -> EvalResult<String> {
        Ok(format!(r"\left( {a} \right)"))
    }

    fn root(radicand: String, degree: String) -> EvalResult<String> {
        if degree == "2" {
            Ok(format!(r"\sqrt{{{radicand}}}"))
        } else {
            Ok(format!(r"\sqrt[{degree}]{{{radicand}}}"))
        }
    }

    fn mixed(whole: String, fraction: String) -> EvalResult<String> {
        Ok(format!("{whole} {fraction}"))
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lift(i: i64) -> String {
        Symbolic::lift(Number::Integer(i))
    }

    #[test]
    fn primitives() {
        assert_eq!(Symbolic::add(lift(2), lift(3)).unwrap(), "2 + 3");
        assert_eq!(Symbolic::subtract(lift(2), lift(3)).unwrap(), "2 - 3");
        assert_eq!(Symbolic::multiply(lift(2), lift(3)).unwrap(), r"2 \cdot 3");
        assert_eq!(Symbolic::divide(lift(5), lift(0)).unwrap(), r"\frac{5}{0}");
        assert_eq!(Symbolic::power(lift(2), lift(5)).unwrap(), "2^{5}");
        assert_eq!(Symbolic::negate(lift(8)).unwrap(), "-8");
        assert_eq!(Symbolic::parenthesize(lift(1)).unwrap(), r"\left( 1 \right)");
        assert_eq!(Symbolic::root(lift(9), lift(2)).unwrap(), r"\sqrt{9}");
        assert_eq!(Symbolic::mixed(lift(2), r"\frac{3}{4}".into()).unwrap(), r"2 \frac{3}{4}");
    }

    #[test]
    fn decimals_keep_their_point() {
        assert_eq!(Symbolic::lift(Number::Real(2.5)), "2.5");
    }
}
