use std::path::Path;

use tracing::info;

use crate::{
    error::Error,
    grammar::core::Grammar,
    interpreter::{
        domain::{core::Domain, numeric::Numeric, symbolic::Symbolic},
        evaluator::{
            core::{EvalResult, Evaluator},
            shape::ShapeTable,
        },
        parser::core::{Outcome, ParseResult, parse_sentence},
    },
    lexicon::Lexicon,
    tree::Tree,
};

/// Both evaluations of one parsed sentence.
///
/// Each domain fails on its own: dividing by zero faults the numeric result
/// while the symbolic one still renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// The parse tree of the sentence.
    pub tree:     Tree,
    /// The numeric result.
    pub numeric:  EvalResult<String>,
    /// The LaTeX rendering.
    pub symbolic: EvalResult<String>,
}

/// A grammar together with its lexicon and shape table.
///
/// Everything is built and checked once, in [`Calculator::new`]; afterwards
/// the calculator is read-only and may be shared between threads.
///
/// # Example
/// ```
/// use sage::{calculator::Calculator, interpreter::parser::core::Outcome};
///
/// let calculator = Calculator::bundled().unwrap();
///
/// assert_eq!(calculator.evaluate_numeric("dvidešimt du plius trys").unwrap(),
///            Outcome::Complete("25".to_string()));
/// assert_eq!(calculator.evaluate_symbolic("šeši padalint iš dviejų").unwrap(),
///            Outcome::Complete(r"\frac{6}{2}".to_string()));
/// assert_eq!(calculator.evaluate_numeric("du plius").unwrap(), Outcome::Incomplete);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    grammar: Grammar,
    lexicon: Lexicon,
    shapes:  ShapeTable,
}

impl Calculator {
    /// Builds the lexicon and shape table of `grammar`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownOperation` if a label of the grammar has
    /// no shape.
    pub fn new(grammar: Grammar) -> Result<Self, Error> {
        let shapes = ShapeTable::for_grammar(&grammar)?;
        let lexicon = Lexicon::build(&grammar);
        info!(words = lexicon.len(), start = grammar.start(), "calculator ready");

        Ok(Self { grammar,
                  lexicon,
                  shapes })
    }

    /// Builds a calculator over the bundled grammar.
    pub fn bundled() -> Result<Self, Error> {
        Self::new(Grammar::bundled()?)
    }

    /// Builds a calculator over the grammar stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::new(Grammar::load(path)?)
    }

    /// Returns the grammar.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns an evaluator bound to the domain `D`.
    #[must_use]
    pub const fn evaluator<D: Domain>(&self) -> Evaluator<'_, D> {
        Evaluator::new(&self.grammar, &self.lexicon, &self.shapes)
    }

    /// Parses a sentence without evaluating it.
    pub fn parse(&self, sentence: &str) -> ParseResult<Outcome<Tree>> {
        parse_sentence(&self.grammar, sentence)
    }

    /// Evaluates a sentence to a number.
    pub fn evaluate_numeric(&self, sentence: &str) -> Result<Outcome<String>, Error> {
        self.evaluator::<Numeric>().evaluate_sentence(sentence)
    }

    /// Evaluates a sentence to LaTeX.
    pub fn evaluate_symbolic(&self, sentence: &str) -> Result<Outcome<String>, Error> {
        self.evaluator::<Symbolic>().evaluate_sentence(sentence)
    }

    /// Parses a sentence once and evaluates the tree in both domains.
    ///
    /// # Errors
    /// Returns `Error::Parse` for an unknown word. Evaluation errors are
    /// reported per domain inside the [`Answer`].
    ///
    /// # Example
    /// ```
    /// use sage::{
    ///     calculator::Calculator,
    ///     error::RuntimeError,
    /// };
    ///
    /// let calculator = Calculator::bundled().unwrap();
    /// let answer = calculator.evaluate("penki padalint iš nulio").unwrap().complete().unwrap();
    ///
    /// assert_eq!(answer.numeric, Err(RuntimeError::DivisionByZero));
    /// assert_eq!(answer.symbolic.unwrap(), r"\frac{5}{0}");
    /// ```
    pub fn evaluate(&self, sentence: &str) -> Result<Outcome<Answer>, Error> {
        let outcome = self.parse(sentence)?;
        Ok(outcome.map(|tree| {
                      let numeric = self.evaluator::<Numeric>().evaluate(&tree);
                      let symbolic = self.evaluator::<Symbolic>().evaluate(&tree);
                      Answer { tree,
                               numeric,
                               symbolic }
                  }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
    }

    #[test]
    fn grammar_without_shapes_is_refused() {
        let grammar: Grammar = "S -> Nezinomas\nNezinomas -> 'du'".parse().unwrap();
        assert!(matches!(Calculator::new(grammar), Err(Error::Runtime(e)) if e.is_configuration()));
    }

    #[test]
    fn both_domains_from_one_parse() {
        let calculator = Calculator::bundled().unwrap();
        let answer = calculator.evaluate("minus du kubu").unwrap().complete().unwrap();
        assert_eq!(answer.numeric.unwrap(), "-8");
        assert_eq!(answer.symbolic.unwrap(), "-2^{3}");
    }

    #[test]
    fn lexicon_belongs_to_the_grammar() {
        let calculator = Calculator::bundled().unwrap();
        assert_eq!(calculator.lexicon().len(), calculator.grammar().terminals().count());
        assert_eq!(calculator.lexicon().value("penki"), Some(5));
        assert_eq!(calculator.lexicon().value("olia"), None);
    }
}
