/// Semantic domains.
///
/// A domain decides what the base primitives of arithmetic mean: the numeric
/// domain computes them, the symbolic domain writes them down as LaTeX.
///
/// # Responsibilities
/// - Declares the `Domain` trait and its primitives.
/// - Implements the numeric and symbolic domains.
pub mod domain;
/// The evaluator folds parse trees into results.
///
/// The evaluator walks a parse tree bottom-up, looks up leaf words in the
/// lexicon and node labels in the shape table, and combines children with the
/// structural handler of each shape. It is the core execution engine of the
/// calculator.
///
/// # Responsibilities
/// - Evaluates trees without recursion, so sentence length never exhausts the
///   call stack.
/// - Maps every grammar label to a shape and rejects grammars it cannot
///   evaluate.
/// - Reports runtime errors such as division by zero or unsupported
///   arrangements.
pub mod evaluator;
/// The parser turns sentences into parse trees.
///
/// The parser splits a sentence on whitespace and runs an Earley parser over
/// the words, using the productions of a [`Grammar`](crate::grammar::core::Grammar).
///
/// # Responsibilities
/// - Reports the first word the grammar does not know.
/// - Tells complete sentences from unfinished ones.
/// - Builds the first derivation as a tree.
pub mod parser;
/// The value module defines the data produced during evaluation.
///
/// # Responsibilities
/// - Defines `Number` with checked integer and real arithmetic.
/// - Defines the operands handed between structural handlers.
pub mod value;
