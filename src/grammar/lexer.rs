use logos::Logos;

/// Represents a lexical token of the grammar notation.
///
/// Rules are written as `Label -> Symbol Symbol | 'word'`, one rule per line.
/// A line that begins with `|` continues the rule above it.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `->`
    #[token("->")]
    Arrow,
    /// `|`
    #[token("|")]
    Pipe,
    /// A quoted terminal word such as `'plius'` or `"pridėti"`.
    #[token("'", |lex| quoted(lex, '\''))]
    #[token("\"", |lex| quoted(lex, '"'))]
    Terminal(String),
    /// A label, such as `Israiska` or `VIENETAS`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Label(String),
    /// `# Comments.`
    #[token("#", skip_comment)]
    Comment,
    /// `\n`
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Tracks the current line while tokenizing.
pub struct LexerExtras {
    /// The line number of the token being read, starting at 1.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Reads the rest of a quoted terminal, up to the matching quote on the same
/// line. Returns `None` when the quote is never closed.
fn quoted(lex: &mut logos::Lexer<Token>, quote: char) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find([quote, '\n'])?;
    if !rest[end..].starts_with(quote) {
        return None;
    }

    let word = rest[..end].to_string();
    lex.bump(end + quote.len_utf8());
    Some(word)
}

/// Skips everything up to, but not including, the end of the line.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
    lex.bump(len);
    logos::Skip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        Token::lexer_with_extras(text, LexerExtras::default()).map(|t| t.unwrap())
                                                              .collect()
    }

    #[test]
    fn reads_a_rule() {
        assert_eq!(tokens("Plius -> 'plius' | \"pridėti\""),
                   vec![Token::Label("Plius".into()),
                        Token::Arrow,
                        Token::Terminal("plius".into()),
                        Token::Pipe,
                        Token::Terminal("pridėti".into()),]);
    }

    #[test]
    fn skips_comments_and_counts_lines() {
        let mut lexer = Token::lexer_with_extras("# header\nS -> A # tail\n", LexerExtras::default());
        assert_eq!(lexer.next(), Some(Ok(Token::NewLine)));
        assert_eq!(lexer.next(), Some(Ok(Token::Label("S".into()))));
        assert_eq!(lexer.extras.line, 2);
        assert_eq!(lexer.next(), Some(Ok(Token::Arrow)));
        assert_eq!(lexer.next(), Some(Ok(Token::Label("A".into()))));
        assert_eq!(lexer.next(), Some(Ok(Token::NewLine)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let mut lexer = Token::lexer_with_extras("A -> 'plius\n", LexerExtras::default());
        assert_eq!(lexer.next(), Some(Ok(Token::Label("A".into()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Arrow)));
        assert_eq!(lexer.next(), Some(Err(())));
    }
}
