#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while loading a grammar definition.
pub enum GrammarError {
    /// Found a token that does not fit the rule notation at this point.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The line of the grammar text where the error occurred.
        line:  usize,
    },
    /// A quoted terminal is missing its closing quote.
    UnterminatedTerminal {
        /// The line of the grammar text where the error occurred.
        line: usize,
    },
    /// A quoted terminal contains no characters.
    EmptyTerminal {
        /// The line of the grammar text where the error occurred.
        line: usize,
    },
    /// A rule alternative has no symbols.
    EmptyAlternative {
        /// The label on the left-hand side of the rule.
        label: String,
        /// The line of the grammar text where the error occurred.
        line:  usize,
    },
    /// A label is used on a right-hand side but never defined.
    UndefinedNonTerminal {
        /// The label that has no rule.
        label: String,
        /// The line of the grammar text where the label is used.
        line:  usize,
    },
    /// The grammar text contains no rules.
    NoProductions,
    /// The grammar file could not be read.
    Unreadable {
        /// The path that was requested.
        path:    String,
        /// The underlying I/O failure.
        details: String,
    },
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Grammar error on line {line}: Unexpected token: {token}.")
            },
            Self::UnterminatedTerminal { line } => {
                write!(f, "Grammar error on line {line}: Quoted terminal is never closed.")
            },
            Self::EmptyTerminal { line } => {
                write!(f, "Grammar error on line {line}: Quoted terminal is empty.")
            },
            Self::EmptyAlternative { label, line } => write!(f,
                                                             "Grammar error on line {line}: Rule '{label}' has an empty alternative."),
            Self::UndefinedNonTerminal { label, line } => write!(f,
                                                                 "Grammar error on line {line}: Label '{label}' is used but never defined."),
            Self::NoProductions => write!(f, "Grammar error: The grammar defines no rules."),
            Self::Unreadable { path, details } => {
                write!(f, "Failed to read the grammar '{path}': {details}.")
            },
        }
    }
}

impl std::error::Error for GrammarError {}
