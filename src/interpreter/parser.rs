/// Sentence parsing.
///
/// Rejects unknown words, translates the grammar for an Earley parser and
/// turns the first derivation it yields into a [`Tree`](crate::tree::Tree).
pub mod core;
