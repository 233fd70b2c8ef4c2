use std::marker::PhantomData;

use tracing::{debug, error};

use crate::{
    error::{Error, RuntimeError},
    grammar::core::Grammar,
    interpreter::{
        domain::{core::Domain, numeric::Numeric, symbolic::Symbolic},
        evaluator::{shape::ShapeTable, structural::combine},
        parser::core::{Outcome, parse_sentence},
        value::operand::{Child, Operand},
    },
    lexicon::Lexicon,
    tree::Tree,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An evaluator bound to the numeric domain.
pub type NumericEvaluator<'c> = Evaluator<'c, Numeric>;
/// An evaluator bound to the symbolic domain.
pub type SymbolicEvaluator<'c> = Evaluator<'c, Symbolic>;

/// Evaluates parse trees in the domain `D`.
///
/// The evaluator borrows the grammar, the lexicon and the shape table and holds
/// no state of its own, so evaluating the same tree twice gives the same
/// result, and one evaluator can be shared between threads.
#[derive(Debug)]
pub struct Evaluator<'c, D> {
    grammar: &'c Grammar,
    lexicon: &'c Lexicon,
    shapes:  &'c ShapeTable,
    domain:  PhantomData<D>,
}

impl<D> Clone for Evaluator<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Evaluator<'_, D> {}

/// One step of the tree walk.
enum Step<'t> {
    /// Evaluate this subtree.
    Visit(&'t Tree),
    /// Combine the last `arity` results into a node.
    Reduce { label: &'t str, arity: usize },
}

impl<'c, D: Domain> Evaluator<'c, D> {
    /// Binds an evaluator to one grammar, its lexicon and its shape table.
    #[must_use]
    pub const fn new(grammar: &'c Grammar, lexicon: &'c Lexicon, shapes: &'c ShapeTable) -> Self {
        Self { grammar,
               lexicon,
               shapes,
               domain: PhantomData }
    }

    /// Evaluates a tree into an operand.
    ///
    /// The tree is walked post-order with an explicit stack, so deep trees do
    /// not grow the call stack. Leaves take their lexicon value; internal nodes
    /// are combined by the structural handler of their shape.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownLeaf` for a word missing from the lexicon.
    /// - `RuntimeError::UnknownOperation` for a label without a shape.
    /// - Any error raised while combining children.
    pub fn evaluate_operand(&self, tree: &Tree) -> EvalResult<Operand<D::Value>> {
        let mut steps = vec![Step::Visit(tree)];
        let mut results: Vec<Child<'_, D::Value>> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Tree::Leaf(word)) => {
                    let value =
                        self.lexicon.value(word).ok_or_else(|| RuntimeError::UnknownLeaf { word: word.clone() })?;
                    results.push(Child::leaf(word, value));
                },
                Step::Visit(Tree::Node { label, children }) => {
                    steps.push(Step::Reduce { label,
                                              arity: children.len() });
                    steps.extend(children.iter().rev().map(Step::Visit));
                },
                Step::Reduce { label, arity } => {
                    let shape = self.shapes
                                    .get(label)
                                    .ok_or_else(|| RuntimeError::UnknownOperation { label: label.to_string() })?;
                    let children = results.split_off(results.len() - arity);
                    let operand = combine::<D>(shape, label, children)?;
                    results.push(Child::node(label, shape, operand));
                },
            }
        }

        results.pop()
               .map(|child| child.operand)
               .ok_or_else(|| RuntimeError::MissingValue { label: tree.label().unwrap_or_default().to_string() })
    }

    /// Evaluates a tree into a domain value.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingValue` if the whole tree only holds
    /// connectives, and any error of [`Self::evaluate_operand`].
    pub fn evaluate_value(&self, tree: &Tree) -> EvalResult<D::Value> {
        let label = tree.label().or_else(|| tree.word()).unwrap_or_default();
        self.evaluate_operand(tree)?.into_value::<D>(label)
    }

    /// Evaluates a tree into the final text of the domain.
    ///
    /// # Example
    /// ```
    /// use sage::{
    ///     calculator::Calculator,
    ///     interpreter::evaluator::core::{NumericEvaluator, SymbolicEvaluator},
    /// };
    ///
    /// let calculator = Calculator::bundled().unwrap();
    /// let tree = calculator.parse("du plius trys").unwrap().complete().unwrap();
    ///
    /// let numeric: NumericEvaluator = calculator.evaluator();
    /// let symbolic: SymbolicEvaluator = calculator.evaluator();
    /// assert_eq!(numeric.evaluate(&tree).unwrap(), "5");
    /// assert_eq!(symbolic.evaluate(&tree).unwrap(), "2 + 3");
    /// ```
    pub fn evaluate(&self, tree: &Tree) -> EvalResult<String> {
        let result = self.evaluate_value(tree).map(|value| D::render(&value));
        if let Err(e) = &result {
            if e.is_configuration() {
                error!(domain = D::NAME, error = %e, tree = %tree, "grammar, lexicon and shapes disagree");
            } else {
                debug!(domain = D::NAME, error = %e, "evaluation failed");
            }
        }
        result
    }

    /// Parses a sentence and evaluates it.
    ///
    /// # Errors
    /// Returns `Error::Parse` for an unknown word and `Error::Runtime` when the
    /// parsed sentence cannot be evaluated. A sentence the grammar cannot
    /// finish or continue is not an error; see [`Outcome`].
    pub fn evaluate_sentence(&self, sentence: &str) -> Result<Outcome<String>, Error> {
        let outcome = parse_sentence(self.grammar, sentence)?;
        Ok(outcome.try_map(|tree| self.evaluate(&tree))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> (Grammar, Lexicon, ShapeTable) {
        let grammar = Grammar::bundled().unwrap();
        let lexicon = Lexicon::build(&grammar);
        let shapes = ShapeTable::for_grammar(&grammar).unwrap();
        (grammar, lexicon, shapes)
    }

    #[test]
    fn unknown_leaf_and_label_are_reported() {
        let (grammar, lexicon, shapes) = parts();
        let evaluator = NumericEvaluator::new(&grammar, &lexicon, &shapes);

        let leaf = Tree::node("S", vec![Tree::leaf("olia")]);
        assert_eq!(evaluator.evaluate(&leaf),
                   Err(RuntimeError::UnknownLeaf { word: "olia".into() }));

        let node = Tree::node("Nezinomas", vec![Tree::leaf("du")]);
        assert_eq!(evaluator.evaluate(&node),
                   Err(RuntimeError::UnknownOperation { label: "Nezinomas".into() }));
    }

    #[test]
    fn connectives_alone_have_no_value() {
        let (grammar, lexicon, shapes) = parts();
        let evaluator = SymbolicEvaluator::new(&grammar, &lexicon, &shapes);

        let tree = Tree::node("Plius", vec![Tree::leaf("plius")]);
        assert_eq!(evaluator.evaluate(&tree),
                   Err(RuntimeError::MissingValue { label: "Plius".into() }));
    }

    #[test]
    fn deep_trees_do_not_recurse() {
        let (grammar, lexicon, shapes) = parts();
        let evaluator = NumericEvaluator::new(&grammar, &lexicon, &shapes);

        let mut tree = Tree::leaf("du");
        for _ in 0..100_000 {
            tree = Tree::node("Reiksme", vec![tree]);
        }
        assert_eq!(evaluator.evaluate(&tree).unwrap(), "2");
        // Dropping is recursive as well; unwind the chain by hand.
        while let Tree::Node { mut children, .. } = tree {
            tree = children.pop().unwrap_or_else(|| Tree::leaf("du"));
        }
    }
}
