use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::Lexer,
        memory::Memory,
        token::{ESCAPE, Token, TokenKind},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Memory {
    /// Evaluates an operand token to a value.
    ///
    /// - Numbers become integers when they have integer syntax, floats
    ///   otherwise.
    /// - Strings lose their quotes and have their escapes resolved.
    /// - Lists are lexed again and every element is evaluated recursively.
    /// - Variables are looked up, including indexed access.
    /// - The null token evaluates to `null`.
    ///
    /// # Errors
    /// Returns `RuntimeError::IncorrectOperandType` for keyword, symbol and
    /// comment tokens, and the lookup errors of [`Memory::get`].
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::{lexer::read_single_token, memory::Memory, value::core::Value};
    ///
    /// let mut memory = Memory::new();
    /// memory.set_name("x", Value::Integer(4), true).unwrap();
    ///
    /// let list = read_single_token("(1, x, \"a\\tb\", (2.5))").unwrap();
    /// assert_eq!(memory.evaluate(&list).unwrap().to_string(), "( 1, 4, a\tb, ( 2.5 ) )");
    /// ```
    pub fn evaluate(&self, token: &Token) -> EvalResult<Value> {
        match token.kind {
            TokenKind::Number => Value::parse_number(&token.text).ok_or_else(|| malformed(token)),
            TokenKind::String => Ok(Value::String(unescape(strip_delimiters(&token.text)))),
            TokenKind::List => self.evaluate_list(token),
            TokenKind::Variable => self.get(token),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::Keyword | TokenKind::Symbol | TokenKind::Comment => {
                Err(RuntimeError::IncorrectOperandType { expected: "a value",
                                                         found:    token.kind.name(), })
            },
        }
    }
    /// Evaluates an optional operand; an absent operand is `null`.
    pub fn evaluate_operand(&self, token: Option<&Token>) -> EvalResult<Value> {
        token.map_or(Ok(Value::Null), |token| self.evaluate(token))
    }
    fn evaluate_list(&self, token: &Token) -> EvalResult<Value> {
        let tokens = Lexer::new(strip_delimiters(&token.text)).read_tokens()
                                                             .map_err(|_| malformed(token))?;
        tokens.iter()
              .filter(|element| element.kind != TokenKind::Symbol)
              .map(|element| self.evaluate(element))
              .collect::<EvalResult<Vec<_>>>()
              .map(Value::List)
    }
}

/// Resolves the escapes of a string literal's contents.
///
/// `\t`, `\n`, `\"` and `\\` have their usual meaning; any other escaped
/// character stands for itself.
///
/// # Example
/// ```
/// use bna::interpreter::evaluator::unescape;
///
/// assert_eq!(unescape(r#"say \"hi\"\n"#), "say \"hi\"\n");
/// assert_eq!(unescape(r"\q"), "q");
/// ```
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some(other) => result.push(other),
            None => {},
        }
    }
    result
}

/// Removes the first and last character of a string or list literal.
fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn malformed(token: &Token) -> RuntimeError {
    RuntimeError::IncorrectOperandType { expected: "a well-formed literal",
                                         found:    token.kind.name(), }
}
