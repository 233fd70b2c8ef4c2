/// Grammar loading errors.
///
/// Defines all error types that can occur while tokenizing and reading a
/// grammar definition: malformed rules, undefined labels and unreadable files.
pub mod grammar_error;
/// Parsing errors.
///
/// Defines the faults raised while a sentence is parsed against a grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a parse tree is
/// evaluated, such as division by zero, unsupported node arrangements or
/// failed numeric conversions.
pub mod runtime_error;

pub use grammar_error::GrammarError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Represents any error raised by the calculator.
pub enum Error {
    /// The grammar could not be loaded.
    Grammar(GrammarError),
    /// The sentence could not be parsed.
    Parse(ParseError),
    /// The parse tree could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grammar(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grammar(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<GrammarError> for Error {
    fn from(e: GrammarError) -> Self {
        Self::Grammar(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
