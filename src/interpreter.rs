/// Ties the front end together.
///
/// Compiles a source text line by line into a [`program::Program`], inserting
/// the implicit statement 0 and collecting labels.
pub mod compiler;
/// Evaluation of operand tokens to values.
///
/// Turns literal tokens into values, re-lexing list literals element by
/// element, and resolves variable tokens through memory.
pub mod evaluator;
/// The instruction engine.
///
/// Executes decoded statements one at a time against memory and the console,
/// and decides which statement runs next.
pub mod instruction;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer reads one line of source text and produces its tokens: numbers,
/// strings, lists, variables, keywords, symbols and comments.
///
/// # Responsibilities
/// - Converts a line into typed tokens.
/// - Validates numeric literals, accessors and list structure.
/// - Reports lexical errors such as unterminated strings.
pub mod lexer;
/// The scope stack.
pub mod memory;
/// The parser module decodes a line's tokens into a statement.
///
/// Each keyword has a fixed grammar of keywords and operand slots. The parser
/// checks the tokens against it and produces a [`crate::ast::Statement`].
pub mod parser;
/// A compiled program and its run loop.
pub mod program;
/// Token kinds, keywords and the symbol table.
pub mod token;
/// The value module defines the runtime data types.
///
/// This module declares the values a program manipulates: null, integers,
/// floats, strings, lists and file handles, together with their arithmetic,
/// comparison and collection operations.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display form.
/// - Implements the per-type semantics of every instruction.
/// - Owns the file handles behind `READFILE` and `WRITEFILE` values.
pub mod value;
