use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, shape::BinaryOperator},
    util::num::{f64_to_i64_exact, i64_to_f64},
};

/// A number composed from numeral words, or computed by the numeric domain.
///
/// Integers stay exact while their results fit an `i64`. Any operation that
/// cannot stay integral, such as division or an overflowing product, produces
/// a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact integer.
    Integer(i64),
    /// A floating-point number.
    Real(f64),
}

impl Number {
    /// Returns the number as an `f64`, rounding integers beyond `2^53`.
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Real(r) => r,
        }
    }

    /// Tells whether the number equals zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Applies an arithmetic operator.
    ///
    /// Integer pairs stay integral unless the result leaves the `i64` range,
    /// in which case it is computed as a real. Division always yields a real,
    /// and any real operand promotes the other one.
    ///
    /// # Example
    /// ```
    /// use sage::interpreter::{evaluator::shape::BinaryOperator, value::number::Number};
    ///
    /// let six = Number::Integer(6);
    /// let two = Number::Integer(2);
    ///
    /// assert_eq!(six.apply(BinaryOperator::Sub, two).unwrap(), Number::Integer(4));
    /// assert_eq!(six.apply(BinaryOperator::Div, two).unwrap(), Number::Real(3.0));
    /// assert!(six.apply(BinaryOperator::Div, Number::Integer(0)).is_err());
    ///
    /// let big = Number::Integer(i64::MAX).apply(BinaryOperator::Add, Number::Integer(1));
    /// assert!(matches!(big, Ok(Number::Real(_))));
    /// ```
    pub fn apply(self, op: BinaryOperator, other: Self) -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Div {
            if other.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            return finite(self.as_real() / other.as_real());
        }

        if let (Self::Integer(l), Self::Integer(r)) = (self, other) {
            let exact = match op {
                Add => l.checked_add(r),
                Sub => l.checked_sub(r),
                Mul => l.checked_mul(r),
                Div => None,
            };
            if let Some(exact) = exact {
                return Ok(Self::Integer(exact));
            }
        }

        let (l, r) = (self.as_real(), other.as_real());
        finite(match op {
                   Add => l + r,
                   Sub => l - r,
                   Mul => l * r,
                   Div => l / r,
               })
    }

    /// Raises the number to a power.
    ///
    /// Integer–integer exponentiation stays integral while the power fits an
    /// `i64`. Larger powers, negative integer exponents and real operands are
    /// computed with `powf`. Raising zero to a negative power is a division by
    /// zero.
    ///
    /// # Example
    /// ```
    /// use sage::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Integer(2).pow(Number::Integer(5)).unwrap(), Number::Integer(32));
    /// assert_eq!(Number::Integer(2).pow(Number::Integer(-1)).unwrap(), Number::Real(0.5));
    /// assert_eq!(Number::Integer(2).pow(Number::Integer(64)).unwrap(), Number::Real(18_446_744_073_709_551_616.0));
    /// ```
    pub fn pow(self, exponent: Self) -> EvalResult<Self> {
        if self.is_zero() && exponent.as_real() < 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }

        if let (Self::Integer(b), Self::Integer(e)) = (self, exponent)
           && let Ok(e) = u32::try_from(e)
           && let Some(exact) = b.checked_pow(e)
        {
            return Ok(Self::Integer(exact));
        }

        finite(self.as_real().powf(exponent.as_real()))
    }

    /// Negates the number. `i64::MIN` turns into a real.
    #[must_use]
    pub fn neg(self) -> Self {
        match self {
            Self::Integer(i) => i.checked_neg().map_or(Self::Real(-i64_to_f64(i)), Self::Integer),
            Self::Real(r) => Self::Real(-r),
        }
    }

    /// Takes the `degree`-th root.
    ///
    /// Degree 2 uses `sqrt` and degree 3 uses `cbrt`. A negative radicand is
    /// accepted only for odd integral degrees.
    ///
    /// # Example
    /// ```
    /// use sage::interpreter::value::number::Number;
    ///
    /// let root = Number::Integer(-27).root(Number::Integer(3)).unwrap();
    /// assert_eq!(root, Number::Real(-3.0));
    /// assert!(Number::Integer(-4).root(Number::Integer(2)).is_err());
    /// ```
    pub fn root(self, degree: Self) -> EvalResult<Self> {
        let radicand = self.as_real();
        let degree = degree.as_real();

        if degree == 0.0 {
            return Err(RuntimeError::InvalidRoot { details: "root of degree zero".into() });
        }

        let odd = f64_to_i64_exact(degree).is_some_and(|d| d % 2 != 0);
        if radicand < 0.0 && !odd {
            return Err(RuntimeError::InvalidRoot { details: format!("even root of negative number {}",
                                                                   Self::Real(radicand)) });
        }

        finite(if degree == 2.0 {
                   radicand.sqrt()
               } else if degree == 3.0 {
                   radicand.cbrt()
               } else if radicand < 0.0 {
                   -(-radicand).powf(degree.recip())
               } else {
                   radicand.powf(degree.recip())
               })
    }

    /// Parses a decimal numeral such as `2.5`.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidNumber` if `text` is not a finite number.
    pub fn parse_real(text: &str) -> EvalResult<Self> {
        text.parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
            .map(Self::Real)
            .ok_or_else(|| RuntimeError::InvalidNumber { text: text.to_string() })
    }
}

/// Wraps a real result, refusing infinities and `NaN`.
fn finite(value: f64) -> EvalResult<Number> {
    if value.is_finite() {
        Ok(Number::Real(value))
    } else {
        Err(RuntimeError::NonFinite)
    }
}

/// Integral values print without a fractional part, and negative zero prints
/// as `0`. Other reals use the shortest text that reads back to the same
/// value.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => match f64_to_i64_exact(*r) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{r}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_integral_reals_as_integers() {
        assert_eq!(Number::Real(3.0).to_string(), "3");
        assert_eq!(Number::Real(-0.0).to_string(), "0");
        assert_eq!(Number::Real(0.0625).to_string(), "0.0625");
        assert_eq!(Number::Real(2.5).to_string(), "2.5");
        assert_eq!(Number::Integer(-8).to_string(), "-8");
    }

    #[test]
    fn integer_overflow_continues_as_real() {
        let big = Number::Integer(i64::MAX);
        assert_eq!(big.apply(BinaryOperator::Add, Number::Integer(1)),
                   Ok(Number::Real(9_223_372_036_854_775_808.0)));
        assert_eq!(Number::Integer(1_000_000_000_000).apply(BinaryOperator::Mul,
                                                             Number::Integer(1_000_000_000_000)),
                   Ok(Number::Real(1e24)));
        assert_eq!(Number::Integer(2).pow(Number::Integer(70)), Ok(Number::Real(2f64.powf(70.0))));
        assert_eq!(Number::Integer(2).pow(Number::Integer(1 << 40)), Err(RuntimeError::NonFinite));
        assert_eq!(Number::Integer(i64::MIN).neg(), Number::Real(9_223_372_036_854_775_808.0));
        assert_eq!(Number::Real(1e24).to_string(), "1000000000000000000000000");
    }

    #[test]
    fn zero_to_a_negative_power_divides_by_zero() {
        assert_eq!(Number::Integer(0).pow(Number::Integer(-1)), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn roots() {
        assert_eq!(Number::Integer(9).root(Number::Integer(2)), Ok(Number::Real(3.0)));
        assert_eq!(Number::Integer(8).root(Number::Integer(3)), Ok(Number::Real(2.0)));
        assert_eq!(Number::Integer(16).root(Number::Integer(4)), Ok(Number::Real(2.0)));
        assert!(matches!(Number::Integer(16).root(Number::Integer(0)),
                         Err(RuntimeError::InvalidRoot { .. })));
    }
}
