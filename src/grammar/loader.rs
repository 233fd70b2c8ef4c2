use std::iter::Peekable;

use logos::Logos;

use crate::{
    error::GrammarError,
    grammar::{
        core::{GrammarResult, Production, Symbol},
        lexer::{LexerExtras, Token},
    },
};

/// Tokenizes grammar text, pairing every token with its line.
///
/// # Errors
/// Returns `GrammarError::UnterminatedTerminal` for a quote that is not closed
/// on its line, `GrammarError::EmptyTerminal` for `''`, and
/// `GrammarError::UnexpectedToken` for any other character outside the
/// notation.
pub fn tokenize(text: &str) -> GrammarResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(text, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::Terminal(word)) if word.is_empty() => {
                return Err(GrammarError::EmptyTerminal { line });
            },
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with(['\'', '"']) {
                    return Err(GrammarError::UnterminatedTerminal { line });
                }
                return Err(GrammarError::UnexpectedToken { token: slice.to_string(),
                                                           line });
            },
        }
    }

    Ok(tokens)
}

/// Parses grammar text into its productions, one per alternative.
///
/// Every rule starts on a new line with `Label ->`. Alternatives are separated
/// by `|`, and a line beginning with `|` continues the previous rule.
///
/// # Example
/// ```
/// use sage::grammar::loader::parse_rules;
///
/// let rules = parse_rules("Plius -> 'plius'\n    | 'pridėti'").unwrap();
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].to_string(), "Plius -> 'pridėti'");
/// ```
pub fn parse_rules(text: &str) -> GrammarResult<Vec<Production>> {
    let tokens = tokenize(text)?;
    let mut iter = tokens.into_iter().peekable();
    let mut productions = Vec::new();

    loop {
        skip_newlines(&mut iter);
        match iter.next() {
            None => break,
            Some((Token::Label(label), line)) => {
                match iter.next() {
                    Some((Token::Arrow, _)) => {},
                    Some((token, line)) => {
                        return Err(GrammarError::UnexpectedToken { token: describe(&token),
                                                                   line });
                    },
                    None => {
                        return Err(GrammarError::UnexpectedToken { token: "end of input".into(),
                                                                   line });
                    },
                }
                parse_alternatives(&mut iter, &label, line, &mut productions)?;
            },
            Some((token, line)) => {
                return Err(GrammarError::UnexpectedToken { token: describe(&token),
                                                           line });
            },
        }
    }

    Ok(productions)
}

/// Reads the right-hand side of one rule, which may span several lines.
fn parse_alternatives<I>(iter: &mut Peekable<I>,
                         label: &str,
                         line: usize,
                         productions: &mut Vec<Production>)
                         -> GrammarResult<()>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let mut symbols = Vec::new();
    let mut current_line = line;

    loop {
        match iter.peek() {
            Some((Token::Label(name), _)) => {
                symbols.push(Symbol::NonTerminal(name.clone()));
                iter.next();
            },
            Some((Token::Terminal(word), _)) => {
                symbols.push(Symbol::Terminal(word.clone()));
                iter.next();
            },
            Some((Token::Pipe, pipe_line)) => {
                let pipe_line = *pipe_line;
                finish(label, current_line, &mut symbols, productions)?;
                current_line = pipe_line;
                iter.next();
            },
            Some((Token::NewLine, _)) => {
                if !continues_on_next_line(iter) {
                    break;
                }
                skip_newlines(iter);
            },
            Some((token, line)) => {
                return Err(GrammarError::UnexpectedToken { token: describe(token),
                                                           line:  *line, });
            },
            None => break,
        }
    }

    finish(label, current_line, &mut symbols, productions)
}

/// Closes one alternative, rejecting it when it has no symbols.
fn finish(label: &str,
          line: usize,
          symbols: &mut Vec<Symbol>,
          productions: &mut Vec<Production>)
          -> GrammarResult<()> {
    if symbols.is_empty() {
        return Err(GrammarError::EmptyAlternative { label: label.to_string(),
                                                    line });
    }

    productions.push(Production { label: label.to_string(),
                                  symbols: std::mem::take(symbols),
                                  line });
    Ok(())
}

/// Tells whether the first token after a run of newlines is a `|`.
fn continues_on_next_line<I>(iter: &Peekable<I>) -> bool
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let mut lookahead = iter.clone();
    while let Some((Token::NewLine, _)) = lookahead.peek() {
        lookahead.next();
    }
    matches!(lookahead.peek(), Some((Token::Pipe, _)))
}

fn skip_newlines<I>(iter: &mut Peekable<I>)
    where I: Iterator<Item = (Token, usize)>
{
    while let Some((Token::NewLine, _)) = iter.peek() {
        iter.next();
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Arrow => "->".into(),
        Token::Pipe => "|".into(),
        Token::Terminal(word) => format!("'{word}'"),
        Token::Label(label) => label.clone(),
        Token::NewLine => "end of line".into(),
        Token::Comment | Token::Ignored => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuation_lines_extend_the_rule() {
        let rules = parse_rules("A -> 'du'\n  | 'trys'\n\n  | B\nB -> 'keturi'").unwrap();
        let rendered: Vec<_> = rules.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["A -> 'du'", "A -> 'trys'", "A -> B", "B -> 'keturi'"]);
        assert_eq!(rules[2].line, 4);
    }

    #[test]
    fn empty_alternative_is_rejected() {
        assert_eq!(parse_rules("A -> 'du' |\nB -> 'trys'"),
                   Err(GrammarError::EmptyAlternative { label: "A".into(),
                                                        line:  1, }));
        assert_eq!(parse_rules("A ->"),
                   Err(GrammarError::EmptyAlternative { label: "A".into(),
                                                        line:  1, }));
    }

    #[test]
    fn missing_arrow_is_reported_with_its_line() {
        assert_eq!(parse_rules("A -> 'du'\nB 'trys'"),
                   Err(GrammarError::UnexpectedToken { token: "'trys'".into(),
                                                       line:  2, }));
    }

    #[test]
    fn stray_characters_are_reported() {
        assert_eq!(parse_rules("A -> 'du' ;"),
                   Err(GrammarError::UnexpectedToken { token: ";".into(),
                                                       line:  1, }));
    }

    #[test]
    fn quotes_must_close_and_hold_a_word() {
        assert_eq!(parse_rules("A -> 'du"),
                   Err(GrammarError::UnterminatedTerminal { line: 1 }));
        assert_eq!(parse_rules("A -> ''"), Err(GrammarError::EmptyTerminal { line: 1 }));
    }
}
