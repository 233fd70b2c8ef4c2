use earlgrey::{EarleyForest, EarleyParser, GrammarBuilder};
use tracing::debug;

use crate::{error::ParseError, grammar::core::Grammar, tree::Tree};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// What became of a sentence whose words are all known to the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The sentence was parsed, and evaluated when `T` is a result.
    Complete(T),
    /// No derivation covers the sentence yet. This holds for an empty
    /// sentence, an unfinished one and one that cannot be finished at all.
    Incomplete,
}

impl<T> Outcome<T> {
    /// Applies `f` to a complete value, leaving `Incomplete` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Complete(value) => Outcome::Complete(f(value)),
            Self::Incomplete => Outcome::Incomplete,
        }
    }

    /// Applies a fallible `f` to a complete value.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Outcome<U>, E> {
        Ok(match self {
               Self::Complete(value) => Outcome::Complete(f(value)?),
               Self::Incomplete => Outcome::Incomplete,
           })
    }

    /// Returns the complete value, if any.
    pub fn complete(self) -> Option<T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Incomplete => None,
        }
    }

    /// Tells whether the outcome is `Complete`.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Parses a sentence against `grammar`.
///
/// The sentence is split on whitespace; words are matched verbatim. The first
/// word that is not a terminal of the grammar is reported as a
/// `ParseError::UnknownWord`. Otherwise the words are handed to an Earley
/// parser, and the outcome tells whether a derivation covers the whole
/// sentence. When several do, the first one the parser yields is returned.
///
/// # Example
/// ```
/// use sage::{
///     grammar::core::Grammar,
///     interpreter::parser::core::{Outcome, parse_sentence},
/// };
///
/// let grammar: Grammar = "S -> A 'plius' A\nA -> 'du' | 'trys'".parse().unwrap();
///
/// let tree = parse_sentence(&grammar, "du plius trys").unwrap().complete().unwrap();
/// assert_eq!(tree.to_string(), "(S (A du) plius (A trys))");
///
/// assert_eq!(parse_sentence(&grammar, "du plius").unwrap(), Outcome::Incomplete);
/// assert_eq!(parse_sentence(&grammar, "du du").unwrap(), Outcome::Incomplete);
/// assert!(parse_sentence(&grammar, "du olia").is_err());
/// ```
pub fn parse_sentence(grammar: &Grammar, sentence: &str) -> ParseResult<Outcome<Tree>> {
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    debug!(sentence = %sentence, tokens = tokens.len(), "parsing");

    if let Some((position, word)) = tokens.iter()
                                          .enumerate()
                                          .find(|(_, word)| !grammar.is_terminal(word))
    {
        return Err(ParseError::UnknownWord { word: (*word).to_string(),
                                             position });
    }

    if tokens.is_empty() {
        return Ok(Outcome::Incomplete);
    }

    let parser = earley_parser(grammar)?;
    let trees = match parser.parse(tokens.iter().copied()) {
        Ok(trees) => trees,
        Err(reason) => {
            debug!(sentence = %sentence, reason = %reason, "no derivation covers the sentence");
            return Ok(Outcome::Incomplete);
        },
    };

    // One node per production, one leaf per token.
    let mut forest = EarleyForest::new(|_, token| Tree::leaf(token));
    for production in grammar.productions() {
        let label = production.label.clone();
        forest.action(&production.to_string(), move |children| Tree::node(label.clone(), children));
    }

    forest.eval(&trees)
          .map(Outcome::Complete)
          .map_err(|details| ParseError::Engine { details })
}

/// Translates `grammar` for the Earley parser.
///
/// Every word becomes a terminal named as it is written in a rule, quotes
/// included, so words and labels never share a name.
fn earley_parser(grammar: &Grammar) -> ParseResult<EarleyParser> {
    let mut builder = GrammarBuilder::default();

    for label in grammar.non_terminals() {
        builder = builder.nonterm(label);
    }
    for word in grammar.terminals() {
        let expected = word.to_string();
        builder = builder.terminal(format!("'{word}'"), move |token| token == expected);
    }
    for production in grammar.productions() {
        let body: Vec<String> = production.symbols.iter().map(ToString::to_string).collect();
        builder = builder.rule(production.label.as_str(), body.as_slice());
    }

    builder.into_grammar(grammar.start())
           .map(EarleyParser::new)
           .map_err(|details| ParseError::Engine { details })
}
