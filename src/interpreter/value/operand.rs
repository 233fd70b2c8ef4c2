use crate::{
    error::RuntimeError,
    interpreter::{
        domain::core::Domain,
        evaluator::{core::EvalResult, shape::Shape},
        value::number::Number,
    },
};

/// The result of evaluating one subtree.
///
/// Numeral words compose into a `Numeral` shared by every domain. As soon as a
/// domain primitive is applied the result becomes a domain `Value`.
/// Connective words and operator nodes contribute nothing and yield `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<V> {
    /// Nothing to contribute.
    Empty,
    /// A number composed from numeral words.
    Numeral(Number),
    /// A value of the evaluating domain.
    Value(V),
}

impl<V> Operand<V> {
    /// Tells whether the operand is `Empty`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Lifts the operand into the domain `D`.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingValue` for `Empty`, naming `label` as the
    /// node that needed a value.
    pub fn into_value<D>(self, label: &str) -> EvalResult<V>
        where D: Domain<Value = V>
    {
        match self {
            Self::Empty => Err(RuntimeError::MissingValue { label: label.to_string() }),
            Self::Numeral(number) => Ok(D::lift(number)),
            Self::Value(value) => Ok(value),
        }
    }
}

/// One evaluated child, as seen by the structural handler of its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Child<'t, V> {
    /// The evaluated operand.
    pub operand: Operand<V>,
    /// The label of the child, or `None` for a leaf.
    pub label:   Option<&'t str>,
    /// The word of the child, or `None` for an internal node.
    pub word:    Option<&'t str>,
    /// The shape of the child, or `None` for a leaf.
    pub shape:   Option<Shape>,
}

impl<'t, V> Child<'t, V> {
    /// Creates the view of an evaluated leaf.
    #[must_use]
    pub const fn leaf(word: &'t str, value: i64) -> Self {
        Self { operand: Operand::Numeral(Number::Integer(value)),
               label:   None,
               word:    Some(word),
               shape:   None, }
    }

    /// Creates the view of an evaluated internal node.
    #[must_use]
    pub const fn node(label: &'t str, shape: Shape, operand: Operand<V>) -> Self {
        Self { operand,
               label: Some(label),
               word: None,
               shape: Some(shape) }
    }

    /// Tells whether the child is the leaf `word`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.word == Some(word)
    }

    /// Tells whether the child contributes nothing.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.operand.is_empty()
    }
}
