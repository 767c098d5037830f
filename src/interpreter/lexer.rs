use logos::Logos;

use crate::{
    error::CompileError,
    interpreter::token::{
        ACCESSOR, ESCAPE, Keyword, LIST_END, STRING_MARKER, Token, TokenKind,
    },
};

/// Result type used by the lexer and the statement parser.
pub type LexResult<T> = Result<T, CompileError>;

/// The raw token stream recognised by `logos`.
///
/// The patterns are deliberately loose. Number and name validation, list
/// nesting and string termination are checked by [`Lexer`] afterwards so the
/// language's own error kinds can be reported.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// Anything starting like a number: `42`, `-3.5`, `1e10`, but also `5abc`.
    #[regex(r"[0-9.\-][A-Za-z0-9.+\-]*")]
    Number,
    /// Variable names, keywords and accessor-marked names such as `list@i@0`.
    /// Names may use any Unicode letter or digit.
    #[regex(r"[\p{L}_][\p{L}\p{N}_@]*")]
    Word,
    /// A string literal, possibly missing its closing quote.
    #[regex(r#""([^"\\]|\\.)*\\?"?"#)]
    String,
    /// `# comment`
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    ListStart,
    /// `)`
    #[token(")")]
    ListEnd,
    /// `,`
    #[token(",")]
    Separator,
    /// `>`, `<`, `=`, `!`, `^` or `:`
    #[regex(r"[><=!^:]")]
    Symbol,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Turns one source line into [`Token`]s.
///
/// # Example
/// ```
/// use bna::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let tokens = Lexer::new("SET x TO (1, \"two\", (3)) # set x").read_tokens()
///                                                           .unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Keyword,
///             TokenKind::Variable,
///             TokenKind::Keyword,
///             TokenKind::List,
///             TokenKind::Comment]);
/// assert_eq!(tokens[3].text, "(1, \"two\", (3))");
/// ```
pub struct Lexer<'a> {
    line: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a single line of source.
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { line }
    }
    /// Reads every token of the line.
    ///
    /// # Errors
    /// Returns a `CompileError` if:
    /// - a number literal does not parse as an integer or a float, or an
    ///   accessor is missing a name on either side (*invalid token*),
    /// - a string or list reaches the end of the line (*missing terminator*),
    /// - a list contains anything but numbers, strings, variables and lists,
    ///   or misses a separator (*illegal token*),
    /// - a character starts no token at all (*unexpected symbol*).
    pub fn read_tokens(&self) -> LexResult<Vec<Token>> {
        let mut raw = RawToken::lexer(self.line);
        let mut tokens = Vec::new();

        while let Some(next) = raw.next() {
            let kind = next.map_err(|()| unexpected_symbol(raw.slice()))?;
            tokens.push(self.convert(kind, &mut raw)?);
        }

        Ok(tokens)
    }
    /// Converts the raw token the lexer currently points at.
    fn convert(&self, kind: RawToken, raw: &mut logos::Lexer<'a, RawToken>) -> LexResult<Token> {
        let text = raw.slice();
        match kind {
            RawToken::Number => read_number(text),
            RawToken::Word => read_word(text),
            RawToken::String => {
                if is_terminated(text) {
                    Ok(Token::new(TokenKind::String, text))
                } else {
                    Err(CompileError::MissingTerminator { terminator: STRING_MARKER })
                }
            },
            RawToken::Comment => Ok(Token::new(TokenKind::Comment, text)),
            RawToken::ListStart => self.read_list(raw),
            RawToken::ListEnd | RawToken::Separator | RawToken::Symbol | RawToken::Ignored => {
                Ok(Token::new(TokenKind::Symbol, text))
            },
        }
    }
    /// Reads a list literal whose opening bracket was just consumed.
    ///
    /// Elements must alternate with separators. Nested lists are read
    /// recursively, and the resulting token spans the whole bracketed text.
    fn read_list(&self, raw: &mut logos::Lexer<'a, RawToken>) -> LexResult<Token> {
        let start = raw.span().start;
        let mut expect_element = true;
        let mut empty = true;

        loop {
            let Some(next) = raw.next() else {
                return Err(CompileError::MissingTerminator { terminator: LIST_END });
            };
            let kind = next.map_err(|()| unexpected_symbol(raw.slice()))?;

            match kind {
                RawToken::ListEnd if !expect_element || empty => {
                    let end = raw.span().end;
                    return Ok(Token::new(TokenKind::List, &self.line[start..end]));
                },
                RawToken::Separator if !expect_element => expect_element = true,
                RawToken::Number | RawToken::Word | RawToken::String | RawToken::ListStart
                    if expect_element =>
                {
                    let element = self.convert(kind, raw)?;
                    if element.kind == TokenKind::Keyword {
                        return Err(CompileError::IllegalToken { text: element.text });
                    }
                    expect_element = false;
                    empty = false;
                },
                _ => return Err(CompileError::IllegalToken { text: raw.slice().to_string() }),
            }
        }
    }
}

/// Lexes a text that must consist of exactly one token.
///
/// # Errors
/// Returns the lexer's error if the text does not lex, or
/// `CompileError::IllegalToken` if it lexes to zero or several tokens.
///
/// # Example
/// ```
/// use bna::interpreter::{lexer::read_single_token, token::TokenKind};
///
/// assert_eq!(read_single_token("-12.5").unwrap().kind, TokenKind::Number);
/// assert!(read_single_token("1 2").is_err());
/// assert!(read_single_token("").is_err());
/// ```
pub fn read_single_token(text: &str) -> LexResult<Token> {
    let mut tokens = Lexer::new(text).read_tokens()?;
    match (tokens.pop(), tokens.is_empty()) {
        (Some(token), true) => Ok(token),
        _ => Err(CompileError::IllegalToken { text: text.to_string() }),
    }
}

/// Validates a number literal: it must parse as an `i64` or an `f64`.
///
/// Letters other than an exponent marker are rejected up front so that words
/// such as `-inf` or `-nan` never become numbers.
fn read_number(text: &str) -> LexResult<Token> {
    let has_letters = text.chars()
                          .any(|c| c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'e'));
    if !has_letters && (text.parse::<i64>().is_ok() || text.parse::<f64>().is_ok()) {
        Ok(Token::new(TokenKind::Number, text))
    } else {
        Err(CompileError::InvalidToken { text: text.to_string() })
    }
}

/// Classifies a name as keyword or variable and validates its accessors.
fn read_word(text: &str) -> LexResult<Token> {
    if text.contains(ACCESSOR) {
        let doubled = text.chars()
                          .zip(text.chars().skip(1))
                          .any(|(a, b)| a == ACCESSOR && b == ACCESSOR);
        if doubled || text.ends_with(ACCESSOR) {
            return Err(CompileError::InvalidToken { text: text.to_string() });
        }
        return Ok(Token::new(TokenKind::Variable, text));
    }

    Ok(match Keyword::from_text(text) {
        Some(keyword) => Token::keyword(keyword),
        None => Token::new(TokenKind::Variable, text),
    })
}

/// Whether a raw string token ends with an unescaped closing quote.
fn is_terminated(text: &str) -> bool {
    let mut chars = text.chars().skip(1);
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                chars.next();
            },
            STRING_MARKER => return true,
            _ => {},
        }
    }
    false
}

fn unexpected_symbol(slice: &str) -> CompileError {
    CompileError::UnexpectedSymbol { symbol: slice.chars().next().unwrap_or(ESCAPE) }
}
