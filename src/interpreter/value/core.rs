use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::value::file::{ReadFile, WriteFile},
};

/// Represents a runtime value in the interpreter.
///
/// Lists own their elements, so cloning a value copies a list deeply and no
/// two variables ever alias the same list. File values are the exception:
/// they share one OS handle between all copies.
#[derive(Debug, Clone)]
pub enum Value {
    /// The value of unassigned variables and absent operands.
    Null,
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating point number.
    Float(f64),
    /// A string of characters.
    String(String),
    /// An ordered list of values, possibly nested.
    List(Vec<Self>),
    /// A file opened with `OPEN ... AS READ`.
    ReadFile(Rc<RefCell<ReadFile>>),
    /// A file opened with `OPEN ... AS WRITE`.
    WriteFile(Rc<RefCell<WriteFile>>),
    /// Result of ordering two values that cannot be ordered.
    ///
    /// Only ever produced by [`Value::greater_than`] and
    /// [`Value::less_than`]; it is never stored in a variable.
    NaN,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<ReadFile> for Value {
    fn from(file: ReadFile) -> Self {
        Self::ReadFile(Rc::new(RefCell::new(file)))
    }
}

impl From<WriteFile> for Value {
    fn from(file: WriteFile) -> Self {
        Self::WriteFile(Rc::new(RefCell::new(file)))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Value {
    /// The upper-case type name reported by `TYPE` and in diagnostics.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::from(vec![Value::Null]).type_name(), "LIST");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::String(_) => "STRING",
            Self::List(_) => "LIST",
            Self::ReadFile(_) => "READFILE",
            Self::WriteFile(_) => "WRITEFILE",
            Self::NaN => "NAN",
        }
    }
    /// Parses a number the way number literals are read.
    ///
    /// Integer syntax yields [`Value::Integer`], anything else `f64` accepts
    /// yields [`Value::Float`]. Texts containing letters other than an
    /// exponent marker are rejected, so `inf` and `nan` stay text.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::parse_number("-12"), Some(Value::Integer(-12)));
    /// assert_eq!(Value::parse_number("2.5e1"), Some(Value::Float(25.0)));
    /// assert_eq!(Value::parse_number("nan"), None);
    /// ```
    #[must_use]
    pub fn parse_number(text: &str) -> Option<Self> {
        if text.chars()
               .any(|c| c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'e'))
        {
            return None;
        }
        text.parse::<i64>()
            .map(Self::Integer)
            .or_else(|_| text.parse::<f64>().map(Self::Float))
            .ok()
    }
    /// Interprets a line read from a file or the console: an integer, else a
    /// float, else the raw string.
    #[must_use]
    pub fn parse_line(text: &str) -> Self {
        Self::parse_number(text.trim()).unwrap_or_else(|| Self::String(text.to_string()))
    }
    /// The name of the file a file value refers to.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        match self {
            Self::ReadFile(file) => Some(file.borrow().name().to_string()),
            Self::WriteFile(file) => Some(file.borrow().name().to_string()),
            _ => None,
        }
    }
    /// Closes this value if it is an open file, and every open file nested in
    /// it if it is a list.
    ///
    /// # Returns
    /// The number of files that were still open.
    ///
    /// # Errors
    /// Returns the first error raised while flushing a write file. Every file
    /// is closed regardless.
    pub fn close_files(&self) -> Result<usize, RuntimeError> {
        match self {
            Self::ReadFile(file) => {
                let mut file = file.borrow_mut();
                let was_open = file.is_open();
                file.close();
                Ok(usize::from(was_open))
            },
            Self::WriteFile(file) => {
                let mut file = file.borrow_mut();
                let was_open = file.is_open();
                file.close().map(|()| usize::from(was_open))
            },
            Self::List(elements) => {
                let mut closed = 0;
                let mut first_error = None;
                for element in elements {
                    match element.close_files() {
                        Ok(count) => closed += count,
                        Err(e) => {
                            first_error.get_or_insert(e);
                        },
                    }
                }
                first_error.map_or(Ok(closed), Err)
            },
            _ => Ok(0),
        }
    }
    /// Builds the error for an operation undefined on these operand types.
    pub(in crate::interpreter) fn undefined(&self,
                                            operation: &'static str,
                                            other: Option<&Self>)
                                            -> RuntimeError {
        RuntimeError::UndefinedOperation { operation,
                                           left: self.type_name(),
                                           right: other.map(Self::type_name) }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(elements) => {
                write!(f, "( ")?;
                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, " )")
            },
            Self::ReadFile(file) => {
                let file = file.borrow();
                write!(f, "READ FILE ({}) '{}'", open_state(file.is_open()), file.name())
            },
            Self::WriteFile(file) => {
                let file = file.borrow();
                write!(f, "WRITE FILE ({}) '{}'", open_state(file.is_open()), file.name())
            },
            Self::NaN => write!(f, "NaN"),
        }
    }
}

const fn open_state(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}
