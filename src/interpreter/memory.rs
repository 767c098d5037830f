use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        token::{ACCESSOR, Token},
        value::core::Value,
    },
    util::num::usize_to_i64_saturating,
};

/// Holds the outcome of the last `TEST`.
pub const RESULT: &str = "result";
/// Carried into a scope by `SCOPE OPEN`.
pub const ARGUMENT: &str = "argument";
/// Carried out of a scope by `SCOPE CLOSE`.
pub const RETURN: &str = "return";
/// Always `null`.
pub const NULL: &str = "null";

/// One level of the scope stack: lower-cased names to values.
pub type Scope = HashMap<String, Value>;

/// The scope stack of a running program.
///
/// Only the top scope is visible. Scopes are not lexical: they are opened and
/// closed explicitly by `SCOPE OPEN` and `SCOPE CLOSE`, and the only values
/// that cross a scope boundary are `argument` (inwards) and `return`
/// (outwards).
///
/// # Example
/// ```
/// use bna::interpreter::{
///     memory::{ARGUMENT, Memory, RETURN},
///     value::core::Value,
/// };
///
/// let mut memory = Memory::new();
/// memory.set_name(ARGUMENT, Value::Integer(3), false).unwrap();
/// memory.open_scope();
/// assert_eq!(memory.get_name(ARGUMENT).unwrap(), Value::Integer(3));
///
/// memory.set_name(RETURN, Value::Integer(9), false).unwrap();
/// memory.close_scope().unwrap();
/// assert_eq!(memory.get_name(RETURN).unwrap(), Value::Integer(9));
///
/// assert!(memory.close_scope().is_err());
/// ```
#[derive(Debug)]
pub struct Memory {
    current: Scope,
    parents: Vec<Scope>,
}

#[allow(clippy::new_without_default)]
impl Memory {
    /// Creates a memory holding just the root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { current: new_scope(),
               parents: Vec::new(), }
    }
    /// Number of live scopes, at least one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parents.len() + 1
    }
    /// Reads a variable token. See [`Memory::get_name`].
    pub fn get(&self, token: &Token) -> EvalResult<Value> {
        self.get_name(&token.text)
    }
    /// Reads a variable, plain or indexed.
    ///
    /// A plain variable that was never assigned reads as `null`. An indexed
    /// name `a@i@j` resolves its last accessor first: it reads `a@i`, then
    /// takes element `j` of that.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an index is not an integer, is out of
    /// range, or the indexed value is neither a list nor a string.
    pub fn get_name(&self, name: &str) -> EvalResult<Value> {
        match name.rsplit_once(ACCESSOR) {
            None => Ok(self.current.get(&key(name)).cloned().unwrap_or(Value::Null)),
            Some((base, index)) => {
                let index = self.index(index)?;
                self.get_name(base)?.element(&index, base)
            },
        }
    }
    /// Assigns a variable token. See [`Memory::set_name`].
    pub fn set(&mut self, token: &Token, value: Value, create: bool) -> EvalResult<()> {
        self.set_name(&token.text, value, create)
    }
    /// Assigns a variable, plain or indexed, in the top scope.
    ///
    /// # Parameters
    /// - `name`: The variable, possibly indexed.
    /// - `value`: The value to store.
    /// - `create`: Whether a missing plain variable may be created.
    ///
    /// # Errors
    /// - `RuntimeError::NonExistentVariable` if the variable (or the base of
    ///   an indexed name) is not bound and may not be created.
    /// - `RuntimeError::NotImplemented` when assigning into a string index.
    /// - The errors of indexed access otherwise.
    pub fn set_name(&mut self, name: &str, value: Value, create: bool) -> EvalResult<()> {
        if !name.contains(ACCESSOR) {
            let key = key(name);
            if !create && !self.current.contains_key(&key) {
                return Err(RuntimeError::NonExistentVariable { name: name.to_string() });
            }
            self.current.insert(key, value);
            return Ok(());
        }

        *self.value_mut(name)? = value;
        Ok(())
    }
    /// Pushes a fresh scope, carrying `argument` into it.
    pub fn open_scope(&mut self) {
        let argument = self.get_special(ARGUMENT);
        let parent = std::mem::replace(&mut self.current, new_scope());
        self.parents.push(parent);
        self.current.insert(ARGUMENT.to_string(), argument);
    }
    /// Pops the top scope, carrying `return` out of it.
    ///
    /// # Errors
    /// Returns `RuntimeError::CloseFinalScope` if only the root scope is left.
    pub fn close_scope(&mut self) -> EvalResult<()> {
        let returned = self.get_special(RETURN);
        let Some(parent) = self.parents.pop() else {
            return Err(RuntimeError::CloseFinalScope);
        };
        self.current = parent;
        self.current.insert(RETURN.to_string(), returned);
        Ok(())
    }
    /// Binds a label name to its statement index in the root scope.
    pub fn bind_label(&mut self, name: &str, index: usize) {
        let root = self.parents.first_mut().unwrap_or(&mut self.current);
        root.insert(key(name), Value::Integer(usize_to_i64_saturating(index)));
    }
    /// Closes every file reachable from any live scope, including files nested
    /// in lists.
    ///
    /// Failures to flush a write file are logged and do not stop the sweep.
    ///
    /// # Returns
    /// The number of files that were still open.
    pub fn close_all_files(&self) -> usize {
        let mut closed = 0;
        for value in self.parents
                         .iter()
                         .chain(std::iter::once(&self.current))
                         .flat_map(Scope::values)
        {
            match value.close_files() {
                Ok(count) => closed += count,
                Err(e) => log::warn!("{e}"),
            }
        }
        closed
    }
    /// Evaluates the text after an accessor: an integer literal or the name of
    /// a plain variable.
    fn index(&self, text: &str) -> EvalResult<Value> {
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            return text.parse::<i64>()
                       .map(Value::Integer)
                       .map_err(|_| RuntimeError::InvalidIndex { index: text.to_string() });
        }
        self.get_name(text)
    }
    /// Borrows the value behind a plain or indexed name for assignment.
    fn value_mut(&mut self, name: &str) -> EvalResult<&mut Value> {
        match name.rsplit_once(ACCESSOR) {
            None => self.current
                        .get_mut(&key(name))
                        .ok_or_else(|| RuntimeError::NonExistentVariable { name: name.to_string() }),
            Some((base, index)) => {
                let index = self.index(index)?;
                self.value_mut(base)?.element_mut(&index, base)
            },
        }
    }
    fn get_special(&self, name: &str) -> Value {
        self.current.get(name).cloned().unwrap_or(Value::Null)
    }
}

/// A scope pre-populated with the special variables.
fn new_scope() -> Scope {
    HashMap::from([(RESULT.to_string(), Value::Integer(0)),
                   (ARGUMENT.to_string(), Value::Null),
                   (RETURN.to_string(), Value::Null),
                   (NULL.to_string(), Value::Null)])
}

fn key(name: &str) -> String {
    name.to_lowercase()
}
