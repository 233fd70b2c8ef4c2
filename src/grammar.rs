/// Grammar types and queries.
///
/// Declares `Grammar`, its productions and symbols, and the queries the parser
/// and the lexicon builder rely on: alternatives by label, the terminal set and
/// reachability from the start symbol.
pub mod core;
/// Tokenizes the grammar notation.
///
/// Converts grammar text into labels, quoted terminals, arrows and pipes,
/// tracking line numbers for error reporting.
pub mod lexer;
/// Builds productions from grammar tokens.
///
/// Reads one rule per line, splits alternatives on `|` and joins continuation
/// lines, rejecting rules with empty alternatives.
pub mod loader;
