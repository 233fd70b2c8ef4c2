use std::{
    collections::{BTreeSet, HashMap, HashSet},
    fmt,
    path::Path,
    str::FromStr,
};

use tracing::{info, warn};

use crate::{error::GrammarError, grammar::loader::parse_rules};

/// The grammar shipped with the crate.
pub const BUNDLED_GRAMMAR: &str = include_str!("../../data/calc/grammar.cfg");

/// Result type used while loading grammars.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// One symbol on the right-hand side of a production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A word that must appear verbatim in the sentence.
    Terminal(String),
    /// A label that is expanded by its own productions.
    NonTerminal(String),
}

impl Symbol {
    /// Returns the word or label the symbol stands for.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Terminal(name) | Self::NonTerminal(name) => name,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(word) => write!(f, "'{word}'"),
            Self::NonTerminal(label) => write!(f, "{label}"),
        }
    }
}

/// A single alternative of a rule: `label -> symbols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// The label on the left-hand side.
    pub label:   String,
    /// The ordered, non-empty right-hand side.
    pub symbols: Vec<Symbol>,
    /// The line of the grammar text the alternative was read from.
    pub line:    usize,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.label)?;
        for symbol in &self.symbols {
            write!(f, " {symbol}")?;
        }
        Ok(())
    }
}

/// An immutable context-free grammar.
///
/// The start symbol is the label of the first production. Productions keep
/// their textual order, which is also the order the parser tries them in.
#[derive(Debug, Clone)]
pub struct Grammar {
    productions: Vec<Production>,
    by_label:    HashMap<String, Vec<usize>>,
    terminals:   BTreeSet<String>,
}

impl Grammar {
    /// Builds a grammar from already parsed productions.
    ///
    /// # Errors
    /// - `GrammarError::NoProductions` if `productions` is empty.
    /// - `GrammarError::UndefinedNonTerminal` for the first label used on a
    ///   right-hand side that has no production of its own.
    pub fn new(productions: Vec<Production>) -> GrammarResult<Self> {
        if productions.is_empty() {
            return Err(GrammarError::NoProductions);
        }

        let mut by_label: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, production) in productions.iter().enumerate() {
            by_label.entry(production.label.clone()).or_default().push(index);
        }

        let mut terminals = BTreeSet::new();
        for production in &productions {
            for symbol in &production.symbols {
                match symbol {
                    Symbol::Terminal(word) => {
                        terminals.insert(word.clone());
                    },
                    Symbol::NonTerminal(label) if !by_label.contains_key(label) => {
                        return Err(GrammarError::UndefinedNonTerminal { label: label.clone(),
                                                                        line:  production.line, });
                    },
                    Symbol::NonTerminal(_) => {},
                }
            }
        }

        let grammar = Self { productions,
                             by_label,
                             terminals };

        for label in grammar.unreachable() {
            warn!(label = %label, "grammar rule is unreachable from the start symbol");
        }
        info!(productions = grammar.productions.len(),
              terminals = grammar.terminals.len(),
              start = grammar.start(),
              "grammar loaded");

        Ok(grammar)
    }

    /// Loads the grammar shipped with the crate.
    ///
    /// # Example
    /// ```
    /// use sage::grammar::core::Grammar;
    ///
    /// let grammar = Grammar::bundled().unwrap();
    /// assert_eq!(grammar.start(), "S");
    /// assert!(grammar.is_terminal("plius"));
    /// ```
    pub fn bundled() -> GrammarResult<Self> {
        BUNDLED_GRAMMAR.parse()
    }

    /// Reads and parses a grammar file.
    ///
    /// # Errors
    /// Returns `GrammarError::Unreadable` if the file cannot be read, and any
    /// other `GrammarError` if its contents are not a valid grammar.
    pub fn load(path: impl AsRef<Path>) -> GrammarResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
                                                     GrammarError::Unreadable { path:    path.display().to_string(),
                                                                                details: e.to_string(), }
                                                 })?;
        text.parse()
    }

    /// Returns the start symbol.
    #[must_use]
    pub fn start(&self) -> &str {
        // `new` refuses an empty production list.
        self.productions.first().map_or("", |p| p.label.as_str())
    }

    /// Returns every production in textual order.
    #[must_use]
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Returns the production at `index`.
    #[must_use]
    pub fn production(&self, index: usize) -> &Production {
        &self.productions[index]
    }

    /// Returns the indices of the productions of `label`, in textual order.
    #[must_use]
    pub fn alternatives(&self, label: &str) -> &[usize] {
        self.by_label.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns every terminal word, sorted.
    pub fn terminals(&self) -> impl Iterator<Item = &str> {
        self.terminals.iter().map(String::as_str)
    }

    /// Returns every label that has a production, in order of first
    /// definition.
    pub fn non_terminals(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.productions
            .iter()
            .map(|p| p.label.as_str())
            .filter(move |label| seen.insert(*label))
    }

    /// Tells whether `word` is a terminal of the grammar.
    #[must_use]
    pub fn is_terminal(&self, word: &str) -> bool {
        self.terminals.contains(word)
    }

    /// Returns the labels that cannot be reached from the start symbol, in
    /// order of first definition.
    ///
    /// # Example
    /// ```
    /// use sage::grammar::core::Grammar;
    ///
    /// let grammar: Grammar = "S -> A\nA -> 'du'\nB -> 'trys'".parse().unwrap();
    /// assert_eq!(grammar.unreachable(), vec!["B"]);
    /// ```
    #[must_use]
    pub fn unreachable(&self) -> Vec<&str> {
        let mut reached = HashSet::from([self.start()]);
        let mut pending = vec![self.start()];

        while let Some(label) = pending.pop() {
            for &index in self.alternatives(label) {
                for symbol in &self.productions[index].symbols {
                    if let Symbol::NonTerminal(next) = symbol
                       && reached.insert(next.as_str())
                    {
                        pending.push(next.as_str());
                    }
                }
            }
        }

        self.non_terminals().filter(|label| !reached.contains(label)).collect()
    }
}

impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(text: &str) -> GrammarResult<Self> {
        Self::new(parse_rules(text)?)
    }
}
