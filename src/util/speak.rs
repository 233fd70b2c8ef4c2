use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
};

/// Numbers at least this large in magnitude are not read out digit by digit.
pub const LARGE: f64 = 1e9;
/// Digits kept after the decimal point.
pub const FRACTION_DIGITS: usize = 3;

const VERY_LARGE: &str = "labai didelis skaičius";
const VERY_LARGE_NEGATIVE: &str = "labai didelis neigiamas skaičius";
const PRACTICALLY_ZERO: &str = "praktiškai nulis";

/// A numeric result prepared to be read aloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spoken {
    /// The number, shortened for speech.
    Number(String),
    /// A phrase said instead of the number.
    Phrase(&'static str),
}

impl Spoken {
    /// Tells whether the number itself is said.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Spoken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Phrase(phrase) => write!(f, "{phrase}"),
        }
    }
}

/// Shortens a numeric result for speech.
///
/// The fraction is truncated, not rounded, to three digits and trailing zeros
/// are dropped. Numbers of a billion or more, and non-zero numbers that
/// truncate to zero, are replaced by a phrase.
///
/// # Errors
/// Returns `RuntimeError::InvalidNumber` if `text` is not a finite number.
///
/// # Example
/// ```
/// use sage::util::speak::{Spoken, round_number};
///
/// assert_eq!(round_number("1.2222222222").unwrap(), Spoken::Number("1.222".into()));
/// assert_eq!(round_number("0.00049").unwrap(), Spoken::Phrase("praktiškai nulis"));
/// assert!(round_number("nulis").is_err());
/// ```
pub fn round_number(text: &str) -> EvalResult<Spoken> {
    let value = Number::parse_real(text.trim())?.as_real();

    if value.abs() >= LARGE {
        let phrase = if value < 0.0 { VERY_LARGE_NEGATIVE } else { VERY_LARGE };
        return Ok(Spoken::Phrase(phrase));
    }
    if value == 0.0 {
        return Ok(Spoken::Number("0".to_string()));
    }

    // Below a billion, `Display` never switches to exponent notation.
    let digits = value.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = fraction[..fraction.len().min(FRACTION_DIGITS)].trim_end_matches('0');

    if fraction.is_empty() && whole.trim_start_matches('-') == "0" {
        return Ok(Spoken::Phrase(PRACTICALLY_ZERO));
    }

    if fraction.is_empty() {
        Ok(Spoken::Number(whole.to_string()))
    } else {
        Ok(Spoken::Number(format!("{whole}.{fraction}")))
    }
}

/// Says what went wrong with an evaluation, in Lithuanian.
///
/// Arithmetic faults and unsupported arrangements have their own phrase.
/// Configuration defects are not the speaker's doing and keep their English
/// description.
///
/// # Example
/// ```
/// use sage::{error::RuntimeError, util::speak::fault_phrase};
///
/// assert_eq!(fault_phrase(&RuntimeError::DivisionByZero), "Dalyba iš nulio negalima");
/// assert_eq!(fault_phrase(&RuntimeError::NonFinite), "Rezultatas neapibrėžtas");
/// ```
#[must_use]
pub fn fault_phrase(error: &RuntimeError) -> String {
    let phrase = match error {
        RuntimeError::DivisionByZero => "Dalyba iš nulio negalima",
        RuntimeError::InvalidRoot { .. } => "Tokios šaknies ištraukti negalima",
        RuntimeError::NonFinite => "Rezultatas neapibrėžtas",
        RuntimeError::NotImplemented { .. } | RuntimeError::MissingValue { .. } => {
            "Tokia išraiška nepalaikoma"
        },
        RuntimeError::InvalidNumber { .. } => "Tai ne skaičius",
        RuntimeError::UnknownLeaf { .. } | RuntimeError::UnknownOperation { .. } => {
            return error.to_string();
        },
    };
    phrase.to_string()
}
