#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the faults a sentence can raise while it is being parsed.
///
/// A sentence that the grammar cannot finish is reported through
/// [`Outcome`](crate::interpreter::parser::core::Outcome) instead; this type
/// covers input the grammar does not know at all, and grammars the Earley
/// parser refuses to work with.
pub enum ParseError {
    /// A word of the sentence is not a terminal of the grammar.
    UnknownWord {
        /// The word exactly as it appeared in the sentence.
        word:     String,
        /// The zero-based position of the word among the sentence tokens.
        position: usize,
    },
    /// The Earley parser refused the grammar or could not build a tree.
    Engine {
        /// The parser's own description of the failure.
        details: String,
    },
}

impl ParseError {
    /// Returns the offending word, if a word is at fault.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::UnknownWord { word, .. } => Some(word),
            Self::Engine { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWord { word, position } => {
                write!(f, "Unknown word '{word}' at position {position}.")
            },
            Self::Engine { details } => write!(f, "Parser failure: {details}"),
        }
    }
}

impl std::error::Error for ParseError {}
