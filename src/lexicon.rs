//! Base values of the grammar's words.
//!
//! Every terminal of a grammar gets exactly one integer: numeral words carry
//! their number, while operator and filler words carry `0`. Values come from
//! an explicit synonym table first and from an ordered list of prefix rules
//! second. The order of the prefix rules matters: `dvidešimt` must be tried
//! before `dvi`, and `dešimt` before everything else.

use std::collections::HashMap;

use tracing::debug;

use crate::grammar::core::Grammar;

/// A group of words sharing one value.
pub type Synonyms = (&'static [&'static str], i64);

/// A prefix and the value of every word starting with it.
pub type PrefixRule = (&'static str, i64);

/// Words with a known value, grouped by value.
pub const SYNONYMS: &[Synonyms] = &[
    (&["vienas", "viena", "vieno", "vienos", "pirmuoju", "pirmojo"], 1),
    (&["du", "dvi", "dviejų", "kvadratu", "antruoju", "antrojo"], 2),
    (&["trys", "trijų", "trečiuoju", "kubu", "kubiniu", "trečiojo"], 3),
    (&["keturi", "keturios", "keturių", "ketvirtosios", "ketvirtuoju", "ketvirtojo"], 4),
    (&["penki", "penkios", "penkių", "penktosios", "penktuoju", "penktojo"], 5),
    (&["šeši", "šešios", "šešių", "šeštuoju", "šeštojo"], 6),
    (&["septyni", "septynios", "septynių", "septintuoju", "septintojo"], 7),
    (&["aštuoni", "aštuonios", "aštuonių", "aštuntuoju", "aštuntojo"], 8),
    (&["devyni", "devynios", "devynių", "devintuoju", "devintojo"], 9),
    (&["dešimt", "dešimtuoju", "dešimtojo"], 10),
    (&["vienuolika", "vienuoliktuoju"], 11),
    (&["dvylika", "dvyliktuoju"], 12),
    (&["trylika", "tryliktuoju"], 13),
    (&["keturiolika", "keturioliktuoju"], 14),
    (&["penkiolika", "penkioliktuoju"], 15),
    (&["šešiolika", "šešioliktuoju"], 16),
    (&["septyniolika", "septynioliktuoju"], 17),
    (&["aštuoniolika", "aštuonioliktuoju"], 18),
    (&["devyniolika", "devynioliktuoju"], 19),
    (&["dvidešimt", "dvidešimtuoju"], 20),
    (&["trisdešimt", "trisdešimtuoju"], 30),
    (&["keturiasdešimt", "keturiasdešimtuoju"], 40),
    (&["penkiasdešimt", "penkiasdešimtuoju"], 50),
    (&["šešiasdešimt", "šešiasdešimtuoju"], 60),
    (&["septyniasdešimt", "septyniasdešimtuoju"], 70),
    (&["aštuoniasdešimt", "aštuoniasdešimtuoju"], 80),
    (&["devyniasdešimt", "devyniasdešimtuoju"], 90),
    (&["šimtas", "šimtai", "šimtuoju"], 100),
    (&["tūkstantis", "tūkstančiai", "tūkstančių", "tūkstantuoju"], 1000),
    (&["milijonas", "milijonai", "milijonu"], 1_000_000),
    (&["nulis", "nulio",
       "plius", "pridėti", "pridėjus", "atimti", "atėmus", "minus",
       "dalint", "dalinti", "dalinta", "padalint", "padalinti", "padalinta",
       "dauginti", "dauginta", "padauginti", "padauginta", "kart",
       "pakelta", "pakelti", "laipsniu", "laipsnio",
       "iš", "kablelis", "skliaustai", "skliausteliuose", "šaknis", "apskliausta",
       "sveikas", "sveiki", "sveikos",
       "vardiklyje", "skliaustuose", "skliausteliai", "atsidaro", "atsidarantys", "atviras",
       "skliaustelis", "užsidaro", "uždaras", "apskliausti", "šaknies", "šaknys", "pošaknyje",
       "trupmena", "skaitiklyje", "ir", "visa", "tai"],
     0),
];

/// Prefix rules for words missing from [`SYNONYMS`], tried in order.
pub const PREFIX_RULES: &[PrefixRule] = &[
    ("dešimt", 10),
    ("vienuolik", 11),
    ("dvylik", 12),
    ("trylik", 13),
    ("keturiolik", 14),
    ("penkiolik", 15),
    ("šešiolik", 16),
    ("septyniolik", 17),
    ("aštuoniolik", 18),
    ("devyniolik", 19),
    ("dvidešimt", 20),
    ("trisdešimt", 30),
    ("keturiasdešimt", 40),
    ("penkiasdešimt", 50),
    ("šešiasdešimt", 60),
    ("septyniasdešimt", 70),
    ("aštuoniasdešimt", 80),
    ("devyniasdešimt", 90),
    ("šimt", 100),
    ("tūkstan", 1000),
    ("milijon", 1_000_000),
    ("vien", 1),
    ("pirm", 1),
    ("du", 2),
    ("dviej", 2),
    ("dvi", 2),
    ("kvadrat", 2),
    ("antr", 2),
    ("trys", 3),
    ("tri", 3),
    ("kubu", 3),
    ("kubin", 3),
    ("treč", 3),
    ("trej", 3),
    ("ketur", 4),
    ("ketvirt", 4),
    ("penk", 5),
    ("šeš", 6),
    ("septyn", 7),
    ("septin", 7),
    ("aštuon", 8),
    ("aštunt", 8),
    ("devyn", 9),
    ("devin", 9),
];

/// Maps every terminal word of a grammar to its base value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    values: HashMap<String, i64>,
}

impl Lexicon {
    /// Builds the lexicon of `grammar` from [`SYNONYMS`] and
    /// [`PREFIX_RULES`].
    ///
    /// # Example
    /// ```
    /// use sage::{grammar::core::Grammar, lexicon::Lexicon};
    ///
    /// let grammar: Grammar = "S -> 'dvidešimtosios' | 'dvi' | 'olia'".parse().unwrap();
    /// let lexicon = Lexicon::build(&grammar);
    ///
    /// assert_eq!(lexicon.value("dvidešimtosios"), Some(20));
    /// assert_eq!(lexicon.value("dvi"), Some(2));
    /// assert_eq!(lexicon.value("olia"), Some(0));
    /// assert_eq!(lexicon.value("trys"), None);
    /// ```
    #[must_use]
    pub fn build(grammar: &Grammar) -> Self {
        Self::with_rules(grammar, SYNONYMS, PREFIX_RULES)
    }

    /// Builds the lexicon of `grammar` from custom tables.
    ///
    /// A word listed in `synonyms` takes its group's value. Any other word
    /// takes the value of the first rule in `prefixes` it starts with, or `0`
    /// when no rule matches.
    #[must_use]
    pub fn with_rules(grammar: &Grammar, synonyms: &[Synonyms], prefixes: &[PrefixRule]) -> Self {
        let explicit: HashMap<&str, i64> = synonyms.iter()
                                                   .flat_map(|(words, value)| {
                                                       words.iter().map(move |word| (*word, *value))
                                                   })
                                                   .collect();

        let values = grammar.terminals()
                            .map(|word| {
                                let value = explicit.get(word)
                                                    .copied()
                                                    .unwrap_or_else(|| prefix_value(prefixes, word));
                                (word.to_string(), value)
                            })
                            .collect();

        Self { values }
    }

    /// Returns the value of `word`, or `None` if it is not a grammar terminal.
    #[must_use]
    pub fn value(&self, word: &str) -> Option<i64> {
        self.values.get(word).copied()
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Tells whether the lexicon has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns every word with its value, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(word, value)| (word.as_str(), *value))
    }
}

fn prefix_value(prefixes: &[PrefixRule], word: &str) -> i64 {
    prefixes.iter()
            .find(|(prefix, _)| word.starts_with(*prefix))
            .map_or_else(|| {
                             debug!(word = %word, "word matches no prefix rule, using 0");
                             0
                         },
                         |(_, value)| *value)
}
