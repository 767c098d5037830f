use std::io::{BufRead, Write};

use crate::{
    ast::Operation,
    interpreter::{
        evaluator::EvalResult,
        instruction::core::{Machine, incorrect_type},
        lexer::read_single_token,
        token::{Token, TokenKind},
        value::{
            core::Value,
            file::{ReadFile, WriteFile},
        },
    },
};

impl<R, W> Machine<R, W>
    where R: BufRead,
          W: Write
{
    /// `OPEN name AS READ|WRITE target`
    pub(in crate::interpreter) fn open(&mut self,
                                       operation: Operation,
                                       target: &Token,
                                       name: &Value)
                                       -> EvalResult<()> {
        let Value::String(name) = name else {
            return Err(incorrect_type("STRING", name));
        };

        let file = if operation == Operation::OpenRead {
            Value::from(ReadFile::open(name)?)
        } else {
            Value::from(WriteFile::open(name)?)
        };
        log::debug!("opened {file}");

        self.memory.set(target, file, true)
    }
    /// `CLOSE target`
    pub(in crate::interpreter) fn close(&mut self, target: &Token, file: &Value) -> EvalResult<()> {
        match file {
            Value::ReadFile(handle) => handle.borrow_mut().close(),
            Value::WriteFile(handle) => handle.borrow_mut().close()?,
            _ => return Err(incorrect_type("READFILE or WRITEFILE", file)),
        }
        self.memory.set(target, Value::Null, false)
    }
    /// `READ target FROM file`
    ///
    /// At the end of the file the handle is closed, and both the file
    /// variable and `target` become `null`.
    pub(in crate::interpreter) fn read(&mut self,
                                       file_token: &Token,
                                       file: &Value,
                                       target: Option<&Token>)
                                       -> EvalResult<()> {
        let Value::ReadFile(handle) = file else {
            return Err(incorrect_type("READFILE", file));
        };
        let target = target.cloned().unwrap_or_else(Token::null);

        let line = handle.borrow_mut().read_line()?;
        match line {
            Some(line) => self.memory.set(&target, Value::parse_line(&line), true),
            None => {
                handle.borrow_mut().close();
                self.memory.set(file_token, Value::Null, false)?;
                self.memory.set(&target, Value::Null, true)
            },
        }
    }
    /// `WRITE value TO file`
    pub(in crate::interpreter) fn write(&self, file: &Value, value: &Value) -> EvalResult<()> {
        let Value::WriteFile(handle) = file else {
            return Err(incorrect_type("WRITEFILE", file));
        };
        handle.borrow_mut().write_line(&value.to_string())
    }
    /// `INPUT target WITH prompt`
    ///
    /// A reply that lexes to a single number or list literal is stored as
    /// that value; anything else is stored as the raw string.
    pub(in crate::interpreter) fn input(&mut self, target: &Token, prompt: &Value) -> EvalResult<()> {
        let Value::String(prompt) = prompt else {
            return Err(incorrect_type("STRING", prompt));
        };
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut reply = String::new();
        self.input.read_line(&mut reply)?;
        let reply = reply.trim_end_matches(['\n', '\r']);

        let value = match read_single_token(reply) {
            Ok(token) if matches!(token.kind, TokenKind::Number | TokenKind::List) => {
                self.memory.evaluate(&token)?
            },
            _ => Value::from(reply),
        };
        self.memory.set(target, value, true)
    }
    /// `PRINT value`
    pub(in crate::interpreter) fn print(&mut self, value: &Value) -> EvalResult<()> {
        writeln!(self.output, "{value}")?;
        Ok(())
    }
}
