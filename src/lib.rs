//! # bna
//!
//! bna is an interpreter for BNA, a line-oriented, assembly-like scripting
//! language. Every source line holds at most one statement: a keyword followed
//! by its operands, a label, or a comment. Programs manipulate dynamically
//! typed values in a stack of explicitly opened scopes, jump between lines
//! with `GOTO`, and talk to the console and to text files.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

use crate::error::Error;
pub use crate::interpreter::compiler::compile;

/// Defines the decoded form of a source line.
///
/// This module declares the `Operation` enum and the `Statement` struct that
/// the parser produces and the instruction engine executes.
///
/// # Responsibilities
/// - Names every operation the language supports.
/// - Keeps a statement's operand slots and its raw line for error reporting.
/// - Tells which operand slot an operation acts on.
pub mod ast;
/// Provides unified error types for compiling and running programs.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// executing a program, together with the process exit code of each kind of
/// failure.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (compile, runtime, IO).
/// - Attaches line numbers, raw lines and decoded statements for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, memory and the
/// instruction engine to provide a complete runtime for BNA programs.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Compiles and runs a program against the given console streams.
///
/// # Errors
/// Returns `Error::Compile` if the source does not compile, and
/// `Error::Runtime` if the program stops with a runtime error.
///
/// # Examples
/// ```
/// use bna::run_with_io;
///
/// let source = "SET x TO 1\nADD 1 TO x\nPRINT x";
/// let mut out = Vec::new();
/// run_with_io(source, &b""[..], &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2\n");
///
/// // Strings and numbers are not ordered.
/// let mut out = Vec::new();
/// assert!(run_with_io("SET x TO 1\nTEST x > \"a\"", &b""[..], &mut out).is_err());
/// ```
pub fn run_with_io<R, W>(source: &str, input: R, output: W) -> Result<(), Error>
    where R: BufRead,
          W: Write
{
    compile(source)?.run(input, output)
}

/// Compiles and runs a program on standard input and output.
///
/// # Errors
/// See [`run_with_io`].
pub fn run_source(source: &str) -> Result<(), Error> {
    run_with_io(source, io::stdin().lock(), io::stdout().lock())
}

/// Reads a source file and runs it on standard input and output.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read, and the errors of
/// [`run_source`] otherwise.
pub fn run_file(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::Io { path: path.display()
                                                                                 .to_string(),
                                                                        source })?;
    log::info!("running {}", path.display());
    run_source(&source)
}
