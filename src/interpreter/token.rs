use std::fmt;

/// Marks the start of a comment that runs to the end of the line.
pub const COMMENT: char = '#';
/// Opens a label declaration, `^ name :`.
pub const LABEL_START: char = '^';
/// Closes a label declaration.
pub const LABEL_END: char = ':';
/// Delimits a string literal.
pub const STRING_MARKER: char = '"';
/// Escapes the next character inside a string literal.
pub const ESCAPE: char = '\\';
/// Separates a name from its index, `list@0`.
pub const ACCESSOR: char = '@';
/// Opens a list literal.
pub const LIST_START: char = '(';
/// Closes a list literal.
pub const LIST_END: char = ')';
/// Separates list elements.
pub const LIST_SEPARATOR: char = ',';
/// `TEST a > b`
pub const GREATER_THAN: char = '>';
/// `TEST a < b`
pub const LESS_THAN: char = '<';
/// `TEST a = b`
pub const EQUAL: char = '=';
/// `TEST a ! b`
pub const NOT_EQUAL: char = '!';

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A placeholder token standing for "no token".
    Null,
    /// An integer or floating point literal.
    Number,
    /// A quoted string literal, quotes included.
    String,
    /// A bracketed list literal, brackets included.
    List,
    /// A variable or label name, possibly accessor-marked.
    Variable,
    /// A reserved word.
    Keyword,
    /// A single-character symbol.
    Symbol,
    /// A comment running to the end of the line.
    Comment,
}

impl TokenKind {
    /// The upper-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::List => "LIST",
            Self::Variable => "VARIABLE",
            Self::Keyword => "KEYWORD",
            Self::Symbol => "SYMBOL",
            Self::Comment => "COMMENT",
        }
    }
}

/// Reserved words of the language.
///
/// The first group starts statements, the second group only appears in the
/// middle of one. Some words (`OPEN`, `CLOSE`, `READ`, `WRITE`, `SIZE`) do
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Set,
    Add,
    Subtract,
    Multiply,
    Divide,
    Wait,
    Random,
    Test,
    Goto,
    Or,
    And,
    Xor,
    Negate,
    Raise,
    Mod,
    Log,
    Round,
    List,
    Append,
    Size,
    Open,
    Close,
    Read,
    Write,
    Input,
    Print,
    Type,
    Exit,
    Error,
    Scope,
    To,
    By,
    From,
    Max,
    If,
    With,
    Of,
    As,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 38] = [Self::Set,
                                 Self::Add,
                                 Self::Subtract,
                                 Self::Multiply,
                                 Self::Divide,
                                 Self::Wait,
                                 Self::Random,
                                 Self::Test,
                                 Self::Goto,
                                 Self::Or,
                                 Self::And,
                                 Self::Xor,
                                 Self::Negate,
                                 Self::Raise,
                                 Self::Mod,
                                 Self::Log,
                                 Self::Round,
                                 Self::List,
                                 Self::Append,
                                 Self::Size,
                                 Self::Open,
                                 Self::Close,
                                 Self::Read,
                                 Self::Write,
                                 Self::Input,
                                 Self::Print,
                                 Self::Type,
                                 Self::Exit,
                                 Self::Error,
                                 Self::Scope,
                                 Self::To,
                                 Self::By,
                                 Self::From,
                                 Self::Max,
                                 Self::If,
                                 Self::With,
                                 Self::Of,
                                 Self::As];

    /// The canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "SET",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Wait => "WAIT",
            Self::Random => "RANDOM",
            Self::Test => "TEST",
            Self::Goto => "GOTO",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::Negate => "NEGATE",
            Self::Raise => "RAISE",
            Self::Mod => "MOD",
            Self::Log => "LOG",
            Self::Round => "ROUND",
            Self::List => "LIST",
            Self::Append => "APPEND",
            Self::Size => "SIZE",
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Input => "INPUT",
            Self::Print => "PRINT",
            Self::Type => "TYPE",
            Self::Exit => "EXIT",
            Self::Error => "ERROR",
            Self::Scope => "SCOPE",
            Self::To => "TO",
            Self::By => "BY",
            Self::From => "FROM",
            Self::Max => "MAX",
            Self::If => "IF",
            Self::With => "WITH",
            Self::Of => "OF",
            Self::As => "AS",
        }
    }

    /// Looks up a keyword, ignoring case.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::token::Keyword;
    ///
    /// assert_eq!(Keyword::from_text("goto"), Some(Keyword::Goto));
    /// assert_eq!(Keyword::from_text("GoTo"), Some(Keyword::Goto));
    /// assert_eq!(Keyword::from_text("goto1"), None);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter()
                 .find(|keyword| keyword.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token: its kind plus the exact source text it was read from.
///
/// Tokens deliberately do not implement `PartialEq`. Use [`Token::matches`],
/// which compares texts case-insensitively and treats every null token as
/// equal to every other null token.
#[derive(Debug, Clone)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The source text. String and list tokens keep their delimiters.
    pub text: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
    /// The placeholder token standing for an absent operand.
    #[must_use]
    pub const fn null() -> Self {
        Self { kind: TokenKind::Null,
               text: String::new() }
    }
    /// A keyword token spelled canonically.
    #[must_use]
    pub fn keyword(keyword: Keyword) -> Self {
        Self::new(TokenKind::Keyword, keyword.as_str())
    }
    /// A single-character symbol token.
    #[must_use]
    pub fn symbol(symbol: char) -> Self {
        Self::new(TokenKind::Symbol, symbol.to_string())
    }
    /// Token equality.
    ///
    /// Kinds must be equal. Null tokens then always match; any other pair
    /// matches when the texts are equal ignoring case.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::token::{Token, TokenKind};
    ///
    /// let a = Token::new(TokenKind::Variable, "Counter");
    /// let b = Token::new(TokenKind::Variable, "counter");
    /// assert!(a.matches(&b));
    ///
    /// let c = Token::new(TokenKind::String, "\"counter\"");
    /// assert!(!a.matches(&c));
    ///
    /// assert!(Token::null().matches(&Token::new(TokenKind::Null, "anything")));
    /// ```
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        if self.kind != other.kind {
            return false;
        }
        self.kind == TokenKind::Null || self.text.eq_ignore_ascii_case(&other.text)
    }
    /// The keyword this token spells, if it is a keyword token.
    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::Keyword {
            Keyword::from_text(&self.text)
        } else {
            None
        }
    }
    /// Whether this token is the given symbol.
    #[must_use]
    pub fn is_symbol(&self, symbol: char) -> bool {
        self.kind == TokenKind::Symbol && self.text.len() == symbol.len_utf8()
        && self.text.starts_with(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Null => f.write_str("null"),
            _ => f.write_str(&self.text),
        }
    }
}
