#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or parsing a line.
///
/// Compile errors never carry a line number themselves. The compiler wraps
/// them into [`crate::error::Error::Compile`] together with the 1-indexed
/// line number and the raw line text.
pub enum CompileError {
    /// A number literal or an accessor-marked name was malformed.
    InvalidToken {
        /// The offending text.
        text: String,
    },
    /// A string or list literal reached the end of the line unterminated.
    MissingTerminator {
        /// The terminator that was expected, `"` or `)`.
        terminator: char,
    },
    /// A character that starts no token was found.
    UnexpectedSymbol {
        /// The offending character.
        symbol: char,
    },
    /// A token that is not allowed inside a list literal, or a text that was
    /// expected to lex to exactly one token.
    IllegalToken {
        /// The offending text.
        text: String,
    },
    /// A statement grammar found a token it does not accept.
    UnexpectedToken {
        /// The token that was found.
        found:    String,
        /// Description of the accepted token set.
        expected: String,
    },
    /// A statement grammar ran out of tokens.
    MissingToken {
        /// Description of the accepted token set.
        expected: String,
    },
    /// Tokens other than a trailing comment follow a complete statement.
    StatementNotEnded {
        /// The first extra token.
        token: String,
    },
    /// The first token of a line cannot start a statement.
    InvalidStatementStart {
        /// The offending token.
        token: String,
    },
    /// A label name was declared twice.
    DuplicateLabel {
        /// The label name.
        name:  String,
        /// The line of the first declaration.
        first: usize,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { text } => write!(f, "Invalid token: '{text}'."),
            Self::MissingTerminator { terminator } => {
                write!(f, "Missing terminator: expected '{terminator}' before the end of the line.")
            },
            Self::UnexpectedSymbol { symbol } => write!(f, "Unexpected symbol: '{symbol}'."),
            Self::IllegalToken { text } => write!(f, "Illegal token in list: '{text}'."),
            Self::UnexpectedToken { found, expected } => {
                write!(f, "Unexpected token: found '{found}', expected {expected}.")
            },
            Self::MissingToken { expected } => {
                write!(f, "Statement ended too early: expected {expected}.")
            },
            Self::StatementNotEnded { token } => {
                write!(f, "Statement did not end correctly: unexpected '{token}'.")
            },
            Self::InvalidStatementStart { token } => {
                write!(f, "Invalid start of statement: '{token}'.")
            },
            Self::DuplicateLabel { name, first } => {
                write!(f, "Label '{name}' is already declared on line {first}.")
            },
        }
    }
}

impl std::error::Error for CompileError {}
