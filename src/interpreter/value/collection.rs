use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, value::core::Value},
    util::num::{i64_to_usize_checked, usize_to_i64_saturating},
};

impl Value {
    /// Appends `rhs` to a string or list.
    ///
    /// A string gets the display form of `rhs` concatenated; a list gets
    /// `rhs` pushed as its new last element.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// let text = Value::from("n = ").append(Value::Integer(4)).unwrap();
    /// assert_eq!(text, Value::from("n = 4"));
    ///
    /// let list = Value::from(vec![Value::Integer(1)]).append(Value::List(vec![])).unwrap();
    /// assert_eq!(list.to_string(), "( 1, (  ) )");
    /// ```
    pub fn append(self, rhs: Self) -> EvalResult<Self> {
        match self {
            Self::String(mut s) => {
                s.push_str(&rhs.to_string());
                Ok(Self::String(s))
            },
            Self::List(mut elements) => {
                elements.push(rhs);
                Ok(Self::List(elements))
            },
            _ => Err(self.undefined("APPEND", Some(&rhs))),
        }
    }
    /// The number of characters of a string or elements of a list.
    pub fn size(&self) -> EvalResult<Self> {
        match self {
            Self::String(s) => Ok(Self::Integer(usize_to_i64_saturating(s.chars().count()))),
            Self::List(elements) => Ok(Self::Integer(usize_to_i64_saturating(elements.len()))),
            _ => Err(self.undefined("SIZE", None)),
        }
    }
    /// Reads the element at `index`.
    ///
    /// Indexing a string yields a one-character string.
    ///
    /// # Parameters
    /// - `index`: The evaluated index.
    /// - `name`: The indexed variable, for diagnostics.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidIndex` if `index` is not an integer.
    /// - `RuntimeError::ValueOutOfRange` if it is out of bounds.
    /// - `RuntimeError::NonIndexable` if the value is not a list or string.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// let list = Value::from(vec![Value::Integer(7), Value::from("x")]);
    /// assert_eq!(list.element(&Value::Integer(1), "list").unwrap(), Value::from("x"));
    /// assert!(list.element(&Value::Integer(2), "list").is_err());
    ///
    /// let text = Value::from("abc");
    /// assert_eq!(text.element(&Value::Integer(2), "text").unwrap(), Value::from("c"));
    /// ```
    pub fn element(&self, index: &Self, name: &str) -> EvalResult<Self> {
        match self {
            Self::List(elements) => {
                let i = checked_index(index, elements.len())?;
                Ok(elements[i].clone())
            },
            Self::String(s) => {
                let i = checked_index(index, s.chars().count())?;
                Ok(s.chars()
                    .nth(i)
                    .map_or(Self::Null, |c| Self::String(c.to_string())))
            },
            _ => Err(RuntimeError::NonIndexable { name: name.to_string() }),
        }
    }
    /// Borrows the list element at `index` for in-place assignment.
    ///
    /// # Errors
    /// As [`Value::element`], plus `RuntimeError::NotImplemented` for
    /// strings, whose characters cannot be assigned individually.
    pub fn element_mut(&mut self, index: &Self, name: &str) -> EvalResult<&mut Self> {
        match self {
            Self::List(elements) => {
                let i = checked_index(index, elements.len())?;
                Ok(&mut elements[i])
            },
            Self::String(_) => {
                Err(RuntimeError::NotImplemented { feature: "assigning to an index of a STRING" })
            },
            _ => Err(RuntimeError::NonIndexable { name: name.to_string() }),
        }
    }
}

/// Validates an evaluated index against a length.
fn checked_index(index: &Value, len: usize) -> EvalResult<usize> {
    let Value::Integer(i) = index else {
        return Err(RuntimeError::InvalidIndex { index: index.to_string() });
    };
    i64_to_usize_checked(*i, ())
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| RuntimeError::ValueOutOfRange { value: i.to_string(),
                                                      range: "a valid index" })
}
