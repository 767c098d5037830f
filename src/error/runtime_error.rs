#[derive(Debug)]
/// Represents all errors that can occur while a program executes.
///
/// Like [`crate::error::CompileError`], these carry no position. The program
/// wraps them into [`crate::error::Error::Runtime`] together with the line and
/// the decoded statement that failed.
pub enum RuntimeError {
    /// An operation is not defined for the given operand types.
    UndefinedOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// Type name of the left operand.
        left:      &'static str,
        /// Type name of the right operand, if the operation is binary.
        right:     Option<&'static str>,
    },
    /// An operand has a type the instruction cannot use.
    IncorrectOperandType {
        /// What the instruction required.
        expected: &'static str,
        /// Type name of the value that was found.
        found:    &'static str,
    },
    /// An index did not evaluate to an integer.
    InvalidIndex {
        /// The index text.
        index: String,
    },
    /// A value lies outside the range the instruction accepts.
    ValueOutOfRange {
        /// The offending value.
        value: String,
        /// Description of the accepted range.
        range: &'static str,
    },
    /// A value that is neither a list nor a string was indexed.
    NonIndexable {
        /// The variable that was indexed.
        name: String,
    },
    /// A variable that must already exist is not bound in the current scope.
    NonExistentVariable {
        /// The variable name.
        name: String,
    },
    /// `SCOPE CLOSE` was executed with only the root scope left.
    CloseFinalScope,
    /// A language feature exists syntactically but is not supported.
    NotImplemented {
        /// The unsupported feature.
        feature: &'static str,
    },
    /// An `ERROR` statement was executed.
    UserError {
        /// The display form of the error operand.
        message: String,
    },
    /// Two values cannot be ordered against each other.
    CouldNotCompare {
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// Integer division or modulus by zero.
    DivisionByZero,
    /// A file used by the program could not be opened, read or written.
    File {
        /// The file name.
        name:   String,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// A file value was used after it was closed.
    FileClosed {
        /// The file name.
        name: String,
    },
    /// Console input or output failed.
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedOperation { operation,
                                       left,
                                       right: Some(right), } => {
                write!(f, "Undefined operation: {left} {operation} {right}.")
            },
            Self::UndefinedOperation { operation,
                                       left,
                                       right: None, } => {
                write!(f, "Undefined operation: {operation} {left}.")
            },
            Self::IncorrectOperandType { expected, found } => {
                write!(f, "Incorrect operand type: expected {expected}, found {found}.")
            },
            Self::InvalidIndex { index } => {
                write!(f, "Invalid index '{index}': an index must be an INTEGER.")
            },
            Self::ValueOutOfRange { value, range } => {
                write!(f, "Value out of range: {value} is not {range}.")
            },
            Self::NonIndexable { name } => write!(f, "Value of '{name}' cannot be indexed."),
            Self::NonExistentVariable { name } => {
                write!(f, "Variable '{name}' does not exist in the current scope.")
            },
            Self::CloseFinalScope => write!(f, "Cannot close the final scope."),
            Self::NotImplemented { feature } => write!(f, "Not implemented: {feature}."),
            Self::UserError { message } => write!(f, "{message}"),
            Self::CouldNotCompare { left, right } => {
                write!(f, "Could not compare operands of type {left} and {right}.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::File { name, source } => write!(f, "File error on '{name}': {source}."),
            Self::FileClosed { name } => write!(f, "File '{name}' is not open."),
            Self::Io(e) => write!(f, "Console IO failed: {e}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::File { source, .. } | Self::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
