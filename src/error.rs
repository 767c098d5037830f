/// Compile errors.
///
/// Defines all error types that can occur while lexing and parsing a source
/// line: malformed literals, unexpected symbols, and statements that do not
/// match their keyword's grammar.
pub mod compile_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program executes.
/// Runtime errors include undefined operations, bad indices, scope misuse,
/// file failures and user-raised `ERROR` statements.
pub mod runtime_error;

pub use compile_error::CompileError;
pub use runtime_error::RuntimeError;

/// Process exit code of a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code of a run stopped by an `ERROR` statement.
pub const EXIT_USER_ERROR: i32 = 1;
/// Process exit code of a run that failed to compile.
pub const EXIT_COMPILE_ERROR: i32 = 2;
/// Process exit code of a run stopped by a runtime error.
pub const EXIT_RUNTIME_ERROR: i32 = 4;
/// Process exit code of a run that hit an unsupported feature.
pub const EXIT_NOT_IMPLEMENTED: i32 = 8;
/// Process exit code of a run whose source file could not be read.
pub const EXIT_FILE_ERROR: i32 = 64;

#[derive(Debug)]
/// The outcome of a failed run.
///
/// Every failure reports where it happened: compile errors carry the line and
/// its raw text, runtime errors additionally carry the decoded statement.
pub enum Error {
    /// The source did not compile.
    Compile {
        /// The 1-indexed line number.
        line:  usize,
        /// The raw line text.
        text:  String,
        /// What went wrong.
        error: CompileError,
    },
    /// The program stopped with a runtime error.
    Runtime {
        /// The 1-indexed line number.
        line:      usize,
        /// The raw line text.
        text:      String,
        /// The decoded statement.
        statement: String,
        /// What went wrong.
        error:     RuntimeError,
    },
    /// The source file itself could not be read.
    Io {
        /// The path of the source file.
        path:   String,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

impl Error {
    /// Maps the failure onto the process exit code reported by the driver.
    ///
    /// # Example
    /// ```
    /// use bna::{
    ///     error::{EXIT_RUNTIME_ERROR, EXIT_USER_ERROR},
    ///     run_with_io,
    /// };
    ///
    /// let mut out = Vec::new();
    /// let err = run_with_io("ERROR \"boom\"", &b""[..], &mut out).unwrap_err();
    /// assert_eq!(err.exit_code(), EXIT_USER_ERROR);
    ///
    /// let err = run_with_io("SCOPE CLOSE", &b""[..], &mut out).unwrap_err();
    /// assert_eq!(err.exit_code(), EXIT_RUNTIME_ERROR);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Compile { .. } => EXIT_COMPILE_ERROR,
            Self::Runtime { error: RuntimeError::UserError { .. },
                            .. } => EXIT_USER_ERROR,
            Self::Runtime { error: RuntimeError::NotImplemented { .. },
                            .. } => EXIT_NOT_IMPLEMENTED,
            Self::Runtime { .. } => EXIT_RUNTIME_ERROR,
            Self::Io { .. } => EXIT_FILE_ERROR,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile { line, text, error } => {
                write!(f, "Compile error on line {line}: {error}\n  {line} | {text}")
            },
            Self::Runtime { line,
                            text,
                            statement,
                            error, } => write!(f,
                                              "Runtime error on line {line}: {error}\n  {line} | {text}\n  Statement: {statement}"),
            Self::Io { path, source } => write!(f, "Failed to read '{path}': {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compile { error, .. } => Some(error),
            Self::Runtime { error, .. } => Some(error),
            Self::Io { source, .. } => Some(source),
        }
    }
}
