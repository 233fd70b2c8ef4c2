//! # sage
//!
//! sage compiles spoken Lithuanian arithmetic into results. A sentence such as
//! "du dalinti iš du pakelti laipsniu penki" is parsed against a context-free
//! grammar of numeral and operator words, and the parse tree is evaluated
//! twice: once to a number and once to its LaTeX rendering.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use once_cell::sync::Lazy;

use crate::{
    calculator::{Answer, Calculator},
    error::Error,
    interpreter::parser::core::Outcome,
};

/// Ties the grammar, the lexicon and the evaluator together.
///
/// This module declares `Calculator`, which is built once from a grammar and
/// then answers any number of sentences, in either domain or in both.
///
/// # Responsibilities
/// - Builds and checks the lexicon and shape table of a grammar.
/// - Exposes the numeric, symbolic and combined entry points.
pub mod calculator;
/// Provides unified error types for grammar loading, parsing and evaluation.
///
/// This module defines all errors that can be raised while a grammar is read,
/// a sentence is parsed or a parse tree is evaluated. It standardizes error
/// reporting and carries the details needed for user feedback, such as the
/// unknown word of a sentence or the line of a malformed grammar rule.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (grammar, parser, evaluator).
/// - Tells arithmetic faults from configuration defects.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Reads context-free grammars.
///
/// This module tokenizes and parses grammar definitions written in the NLTK
/// notation, and holds the resulting immutable `Grammar`.
///
/// # Responsibilities
/// - Tokenizes grammar text and reports malformed rules with their line.
/// - Rejects undefined labels and empty alternatives.
/// - Bundles the default grammar with the crate.
pub mod grammar;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the parser, the evaluator, the semantic domains
/// and the values they compute with.
///
/// # Responsibilities
/// - Parses sentences into trees.
/// - Evaluates trees in any domain.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Base values of grammar words.
pub mod lexicon;
/// Parse trees.
pub mod tree;
/// General utilities for numeric conversion and spoken output.
///
/// This module provides helpers that are used throughout the evaluator and by
/// the command line front end.
///
/// # Responsibilities
/// - Convert between `i64` and `f64`, telling exact results from rounded ones.
/// - Shorten numeric results for speech.
pub mod util;

static BUNDLED: Lazy<Result<Calculator, Error>> = Lazy::new(Calculator::bundled);

/// Evaluates a sentence with the bundled grammar.
///
/// The calculator is built on first use and shared afterwards. The sentence is
/// parsed once and evaluated in both domains.
///
/// # Errors
/// Returns an error if the bundled grammar cannot be loaded or if the sentence
/// contains a word the grammar does not know.
///
/// # Examples
/// ```
/// use sage::{get_result, interpreter::parser::core::Outcome};
///
/// let answer = get_result("du plius trys").unwrap().complete().unwrap();
/// assert_eq!(answer.numeric.unwrap(), "5");
/// assert_eq!(answer.symbolic.unwrap(), "2 + 3");
///
/// assert!(matches!(get_result("du plius"), Ok(Outcome::Incomplete)));
/// assert!(get_result("olia").is_err());
/// ```
pub fn get_result(sentence: &str) -> Result<Outcome<Answer>, Error> {
    match &*BUNDLED {
        Ok(calculator) => calculator.evaluate(sentence),
        Err(e) => Err(e.clone()),
    }
}
