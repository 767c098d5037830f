use std::fmt;

use crate::{
    error::CompileError,
    interpreter::{
        lexer::LexResult,
        token::{Keyword, Token, TokenKind},
    },
};

/// One alternative a grammar position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// Any token of this kind.
    Kind(TokenKind),
    /// Exactly this keyword.
    Keyword(Keyword),
    /// Exactly this symbol.
    Symbol(char),
}

impl Accept {
    /// Whether `token` satisfies this alternative.
    #[must_use]
    pub fn accepts(self, token: &Token) -> bool {
        match self {
            Self::Kind(kind) => token.kind == kind,
            Self::Keyword(keyword) => token.as_keyword() == Some(keyword),
            Self::Symbol(symbol) => token.is_symbol(symbol),
        }
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => f.write_str(kind.name()),
            Self::Keyword(keyword) => write!(f, "'{keyword}'"),
            Self::Symbol(symbol) => write!(f, "'{symbol}'"),
        }
    }
}

/// A variable name.
pub const VARIABLE: &[Accept] = &[Accept::Kind(TokenKind::Variable)];
/// A variable or a number literal.
pub const VARIABLE_OR_NUMBER: &[Accept] = &[Accept::Kind(TokenKind::Variable),
                                            Accept::Kind(TokenKind::Number)];
/// A variable or a string literal.
pub const VARIABLE_OR_STRING: &[Accept] = &[Accept::Kind(TokenKind::Variable),
                                            Accept::Kind(TokenKind::String)];
/// Anything that can be ordered: a variable, number or string.
pub const SCALAR: &[Accept] = &[Accept::Kind(TokenKind::Variable),
                                Accept::Kind(TokenKind::Number),
                                Accept::Kind(TokenKind::String)];
/// Anything that has a size: a variable, string or list.
pub const SIZED: &[Accept] = &[Accept::Kind(TokenKind::Variable),
                               Accept::Kind(TokenKind::String),
                               Accept::Kind(TokenKind::List)];
/// Any value: a variable or a number, string or list literal.
pub const ANY_VALUE: &[Accept] = &[Accept::Kind(TokenKind::Variable),
                                   Accept::Kind(TokenKind::Number),
                                   Accept::Kind(TokenKind::String),
                                   Accept::Kind(TokenKind::List)];

/// Describes an acceptance set for diagnostics.
///
/// # Example
/// ```
/// use bna::interpreter::parser::grammar::{SCALAR, describe};
///
/// assert_eq!(describe(SCALAR), "VARIABLE, NUMBER or STRING");
/// ```
#[must_use]
pub fn describe(accepted: &[Accept]) -> String {
    let names: Vec<String> = accepted.iter().map(ToString::to_string).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::from("nothing"),
    }
}

/// Consumes the next token, which must satisfy one of `accepted`.
///
/// # Errors
/// Returns `CompileError::UnexpectedToken` for a token outside the set and
/// `CompileError::MissingToken` when the line has no tokens left.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut I,
                                                    accepted: &[Accept])
                                                    -> LexResult<Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if accepted.iter().any(|a| a.accepts(token)) => Ok(token.clone()),
        Some(token) => Err(CompileError::UnexpectedToken { found:    token.text.clone(),
                                                           expected: describe(accepted), }),
        None => Err(CompileError::MissingToken { expected: describe(accepted) }),
    }
}

/// Consumes the next token, which must be `keyword`.
pub(in crate::interpreter::parser) fn expect_keyword<'a, I>(tokens: &mut I,
                                                            keyword: Keyword)
                                                            -> LexResult<()>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &[Accept::Keyword(keyword)]).map(|_| ())
}

/// Checks that nothing but an optional trailing comment is left.
///
/// # Errors
/// Returns `CompileError::StatementNotEnded` naming the first extra token.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut I) -> LexResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        None => Ok(()),
        Some(token) if token.kind == TokenKind::Comment => match tokens.next() {
            None => Ok(()),
            Some(extra) => Err(CompileError::StatementNotEnded { token: extra.text.clone() }),
        },
        Some(token) => Err(CompileError::StatementNotEnded { token: token.text.clone() }),
    }
}
