use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use crate::{
    ast::Statement,
    error::Error,
    interpreter::instruction::core::Machine,
};

/// A compiled program: one statement per source line plus the label table.
#[derive(Debug, Clone)]
pub struct Program {
    statements: Vec<Statement>,
    labels:     HashMap<String, usize>,
}

impl Program {
    /// Creates a program from its statements and lower-cased label names.
    #[must_use]
    pub const fn new(statements: Vec<Statement>, labels: HashMap<String, usize>) -> Self {
        Self { statements, labels }
    }
    /// Number of statements, including the implicit one at index 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    /// Whether the program has no statements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
    /// The statement at `index`.
    #[must_use]
    pub fn statement(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }
    /// The statement index of a label, looked up case-insensitively.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(&name.to_lowercase()).copied()
    }
    /// Runs the program to completion.
    ///
    /// Labels are bound in the root scope before the first statement runs.
    /// Execution stops after the last statement, on `EXIT`, or at the first
    /// runtime error. Files left open are closed and the output is flushed in
    /// every case.
    ///
    /// # Errors
    /// Returns `Error::Runtime` with the location of the failing statement.
    pub fn run<R, W>(&self, input: R, output: W) -> Result<(), Error>
        where R: BufRead,
              W: Write
    {
        let mut machine = Machine::new(input, output);
        for (name, &index) in &self.labels {
            machine.memory.bind_label(name, index);
        }

        let mut outcome = Ok(());
        while machine.is_running()
              && let Some(statement) = self.statements.get(machine.ip())
        {
            if let Err(error) = machine.step(statement) {
                outcome = Err(Error::Runtime { line: machine.ip(),
                                               text: statement.line.clone(),
                                               statement: statement.to_string(),
                                               error });
                break;
            }
        }

        let left_open = machine.memory.close_all_files();
        if left_open > 0 {
            log::warn!("closed {left_open} file(s) left open by the program");
        }
        if let Err(error) = machine.flush() {
            log::warn!("could not flush output: {error}");
        }

        outcome
    }
}
