#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a parse tree.
pub enum RuntimeError {
    /// A leaf word has no value in the lexicon.
    UnknownLeaf {
        /// The word of the leaf.
        word: String,
    },
    /// An internal node carries a label with no shape.
    UnknownOperation {
        /// The label of the node.
        label: String,
    },
    /// A node has a shape, but this arrangement of children is not supported.
    NotImplemented {
        /// The label of the node.
        label: String,
        /// The number of children the node has.
        arity: usize,
    },
    /// A value was expected, but the subtree only contained connectives.
    MissingValue {
        /// The label of the node that needed the value.
        label: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A root could not be taken.
    InvalidRoot {
        /// Details describing why the root is undefined.
        details: String,
    },
    /// A real result was infinite or not a number.
    NonFinite,
    /// A text could not be read as a number.
    InvalidNumber {
        /// The rejected text.
        text: String,
    },
}

impl RuntimeError {
    /// Tells whether the error is an arithmetic fault of a well-formed
    /// expression, such as dividing by zero.
    ///
    /// # Example
    /// ```
    /// use sage::error::RuntimeError;
    ///
    /// assert!(RuntimeError::DivisionByZero.is_arithmetic());
    /// assert!(!RuntimeError::UnknownLeaf { word: "olia".into() }.is_arithmetic());
    /// ```
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self,
                 Self::DivisionByZero | Self::InvalidRoot { .. } | Self::NonFinite)
    }

    /// Tells whether the error points at a mismatch between the grammar, the
    /// lexicon and the shape table rather than at the sentence.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownLeaf { .. } | Self::UnknownOperation { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLeaf { word } => write!(f, "Error: Word '{word}' has no value."),
            Self::UnknownOperation { label } => {
                write!(f, "Error: Label '{label}' has no operation.")
            },
            Self::NotImplemented { label, arity } => write!(f,
                                                            "Error: Expression not supported: '{label}' with {arity} parts."),
            Self::MissingValue { label } => write!(f, "Error: Value missing in '{label}'."),
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::InvalidRoot { details } => write!(f, "Error: Invalid root: {details}."),
            Self::NonFinite => write!(f, "Error: Result is not a finite number."),
            Self::InvalidNumber { text } => write!(f, "Error: '{text}' is not a number."),
        }
    }
}

impl std::error::Error for RuntimeError {}
