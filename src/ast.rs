use std::fmt;

use crate::interpreter::token::Token;

/// The operation a [`Statement`] performs.
///
/// Exactly one operation per source line. `Null` stands for empty and
/// comment-only lines, which are kept so that statement indices stay equal to
/// line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Empty or comment-only line.
    Null,
    /// `^ name :`
    Label,
    /// `SET var TO value`
    Set,
    /// `ADD value TO var`
    Add,
    /// `SUBTRACT value FROM var`
    Subtract,
    /// `MULTIPLY var BY value`
    Multiply,
    /// `DIVIDE var BY value`
    Divide,
    /// `RANDOM var MAX value`
    Random,
    /// `OR var WITH value`
    BitwiseOr,
    /// `AND var WITH value`
    BitwiseAnd,
    /// `XOR var WITH value`
    BitwiseXor,
    /// `NEGATE var`
    BitwiseNegate,
    /// `RAISE var TO value`
    Power,
    /// `MOD value OF var`
    Modulus,
    /// `LOG value OF var`
    Logarithm,
    /// `ROUND var`
    Round,
    /// `LIST var SIZE value`
    List,
    /// `APPEND value TO var`
    Append,
    /// `SIZE var OF value`
    Size,
    /// `OPEN name AS READ var`
    OpenRead,
    /// `OPEN name AS WRITE var`
    OpenWrite,
    /// `CLOSE var`
    Close,
    /// `READ var FROM file`
    Read,
    /// `WRITE value TO file`
    Write,
    /// `INPUT var WITH prompt`
    Input,
    /// `PRINT value`
    Print,
    /// `TEST var > value`
    TestGreaterThan,
    /// `TEST var < value`
    TestLessThan,
    /// `TEST var = value`
    TestEqual,
    /// `TEST var ! value`
    TestNotEqual,
    /// `SCOPE OPEN`
    ScopeOpen,
    /// `SCOPE CLOSE`
    ScopeClose,
    /// `WAIT value`
    Wait,
    /// `GOTO label IF value`
    Goto,
    /// `TYPE var OF value`
    Type,
    /// `EXIT`
    Exit,
    /// `ERROR value`
    Error,
}

impl Operation {
    /// The upper-case name used when decoding statements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Label => "LABEL",
            Self::Set => "SET",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Random => "RANDOM",
            Self::BitwiseOr => "BITWISE_OR",
            Self::BitwiseAnd => "BITWISE_AND",
            Self::BitwiseXor => "BITWISE_XOR",
            Self::BitwiseNegate => "BITWISE_NEGATE",
            Self::Power => "POWER",
            Self::Modulus => "MODULUS",
            Self::Logarithm => "LOGARITHM",
            Self::Round => "ROUND",
            Self::List => "LIST",
            Self::Append => "APPEND",
            Self::Size => "SIZE",
            Self::OpenRead => "OPEN_READ",
            Self::OpenWrite => "OPEN_WRITE",
            Self::Close => "CLOSE",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Input => "INPUT",
            Self::Print => "PRINT",
            Self::TestGreaterThan => "TEST_GREATER_THAN",
            Self::TestLessThan => "TEST_LESS_THAN",
            Self::TestEqual => "TEST_EQUAL",
            Self::TestNotEqual => "TEST_NOT_EQUAL",
            Self::ScopeOpen => "SCOPE_OPEN",
            Self::ScopeClose => "SCOPE_CLOSE",
            Self::Wait => "WAIT",
            Self::Goto => "GOTO",
            Self::Type => "TYPE",
            Self::Exit => "EXIT",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One compiled source line.
///
/// `operand1` and `operand2` are syntactic slots filled by the parser. Which
/// of them an instruction treats as its *primary* (usually the destination)
/// and *secondary* operand depends on the operation; see
/// [`Statement::primary`] and [`Statement::secondary`].
#[derive(Debug, Clone)]
pub struct Statement {
    /// What the statement does.
    pub operation: Operation,
    /// First operand slot.
    pub operand1:  Option<Token>,
    /// Second operand slot.
    pub operand2:  Option<Token>,
    /// The raw source line.
    pub line:      String,
}

impl Statement {
    /// Creates a statement.
    pub fn new(operation: Operation,
               operand1: Option<Token>,
               operand2: Option<Token>,
               line: impl Into<String>)
               -> Self {
        Self { operation,
               operand1,
               operand2,
               line: line.into() }
    }
    /// A no-op statement for an empty or comment-only line.
    pub fn null(line: impl Into<String>) -> Self {
        Self::new(Operation::Null, None, None, line)
    }
    /// The operand the instruction acts on.
    ///
    /// `READ` reads from its file in `operand2`. `PRINT`, `WAIT` and `ERROR`
    /// only fill `operand2`. Every other operation acts on `operand1`.
    ///
    /// # Example
    /// ```
    /// use bna::{
    ///     ast::{Operation, Statement},
    ///     interpreter::token::{Token, TokenKind},
    /// };
    ///
    /// let target = Token::new(TokenKind::Variable, "line");
    /// let file = Token::new(TokenKind::Variable, "f");
    /// let read = Statement::new(Operation::Read, Some(target), Some(file), "READ line FROM f");
    ///
    /// assert_eq!(read.primary().unwrap().text, "f");
    /// assert_eq!(read.secondary().unwrap().text, "line");
    /// ```
    #[must_use]
    pub const fn primary(&self) -> Option<&Token> {
        match self.operation {
            Operation::Read | Operation::Print | Operation::Wait | Operation::Error => {
                self.operand2.as_ref()
            },
            _ => self.operand1.as_ref(),
        }
    }
    /// The operand that supplies the instruction's argument, if any.
    #[must_use]
    pub const fn secondary(&self) -> Option<&Token> {
        match self.operation {
            Operation::Read => self.operand1.as_ref(),
            Operation::Print
            | Operation::Wait
            | Operation::Error
            | Operation::Round
            | Operation::Close
            | Operation::BitwiseNegate => None,
            _ => self.operand2.as_ref(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.operation)?;
        for operand in [&self.operand1, &self.operand2].into_iter().flatten() {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}
