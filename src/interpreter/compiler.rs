use std::collections::HashMap;

use crate::{
    ast::{Operation, Statement},
    error::{CompileError, Error},
    interpreter::{
        lexer::{LexResult, Lexer},
        parser::statement::parse_statement,
        program::Program,
    },
};

/// Compiles a whole source text into a [`Program`].
///
/// The program gets an implicit empty statement at index 0, so that the
/// statement for source line `n` sits at index `n` and `GOTO` targets are
/// plain line numbers. Labels are collected while compiling.
///
/// # Errors
/// Returns `Error::Compile` for the first line that does not lex or parse,
/// and for a label that is declared twice.
///
/// # Example
/// ```
/// use bna::interpreter::compiler::compile;
///
/// let program = compile("^start:\nPRINT \"hi\"\nGOTO start IF 0").unwrap();
/// assert_eq!(program.len(), 4);
/// assert_eq!(program.label("START"), Some(1));
///
/// assert!(compile("SET x TO").is_err());
/// ```
pub fn compile(source: &str) -> Result<Program, Error> {
    let mut statements = Vec::new();
    let mut labels: HashMap<String, usize> = HashMap::new();

    for (line, text) in std::iter::once("").chain(source.lines()).enumerate() {
        let compile_error = |error| Error::Compile { line,
                                                     text: text.to_string(),
                                                     error };
        let statement = compile_line(text).map_err(compile_error)?;

        if statement.operation == Operation::Label
           && let Some(name) = &statement.operand1
        {
            let key = name.text.to_lowercase();
            if let Some(&first) = labels.get(&key) {
                return Err(compile_error(CompileError::DuplicateLabel { name: name.text.clone(),
                                                                        first }));
            }
            labels.insert(key, line);
        }

        statements.push(statement);
    }

    log::debug!("compiled {} statements, {} labels", statements.len(), labels.len());
    Ok(Program::new(statements, labels))
}

/// Lexes and parses a single source line.
///
/// # Errors
/// Returns the `CompileError` of the lexer or the parser.
pub fn compile_line(text: &str) -> LexResult<Statement> {
    let tokens = Lexer::new(text).read_tokens()?;
    log::debug!("tokens: {}",
                tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" | "));

    let statement = parse_statement(&tokens, text)?;
    log::debug!("statement: {statement}");
    Ok(statement)
}
