use crate::{
    ast::{Operation, Statement},
    error::CompileError,
    interpreter::{
        lexer::LexResult,
        parser::grammar::{
            ANY_VALUE, Accept, SCALAR, SIZED, VARIABLE, VARIABLE_OR_NUMBER, VARIABLE_OR_STRING,
            expect, expect_end, expect_keyword,
        },
        token::{
            EQUAL, GREATER_THAN, Keyword, LABEL_END, LABEL_START, LESS_THAN, NOT_EQUAL, Token,
            TokenKind,
        },
    },
};

/// The common `KEYWORD first MIDDLE second` statement shape.
///
/// `reversed` shapes store `first` in the second operand slot and `second` in
/// the first one, so that the slot acted upon is always `operand1`:
/// `ADD 1 TO x` and `MULTIPLY x BY 2` both act on `x`.
struct Shape {
    operation: Operation,
    first:     &'static [Accept],
    middle:    Keyword,
    second:    &'static [Accept],
    reversed:  bool,
}

impl Shape {
    /// The shape of a statement keyword, if it has the common form.
    fn of(keyword: Keyword) -> Option<Self> {
        use Keyword as K;

        let (operation, first, middle, second, reversed) = match keyword {
            K::Set => (Operation::Set, VARIABLE, K::To, ANY_VALUE, false),
            K::Add => (Operation::Add, VARIABLE_OR_NUMBER, K::To, VARIABLE, true),
            K::Subtract => (Operation::Subtract, VARIABLE_OR_NUMBER, K::From, VARIABLE, true),
            K::Multiply => (Operation::Multiply, VARIABLE, K::By, VARIABLE_OR_NUMBER, false),
            K::Divide => (Operation::Divide, VARIABLE, K::By, VARIABLE_OR_NUMBER, false),
            K::And => (Operation::BitwiseAnd, VARIABLE, K::With, VARIABLE_OR_NUMBER, false),
            K::Or => (Operation::BitwiseOr, VARIABLE, K::With, VARIABLE_OR_NUMBER, false),
            K::Xor => (Operation::BitwiseXor, VARIABLE, K::With, VARIABLE_OR_NUMBER, false),
            K::Mod => (Operation::Modulus, VARIABLE_OR_NUMBER, K::Of, VARIABLE, true),
            K::Log => (Operation::Logarithm, VARIABLE_OR_NUMBER, K::Of, VARIABLE, true),
            K::Raise => (Operation::Power, VARIABLE, K::To, VARIABLE_OR_NUMBER, false),
            K::Random => (Operation::Random, VARIABLE, K::Max, VARIABLE_OR_NUMBER, false),
            K::Goto => (Operation::Goto, VARIABLE, K::If, VARIABLE_OR_NUMBER, false),
            K::List => (Operation::List, VARIABLE, K::Size, VARIABLE_OR_NUMBER, false),
            K::Append => (Operation::Append, ANY_VALUE, K::To, VARIABLE, true),
            K::Size => (Operation::Size, VARIABLE, K::Of, SIZED, false),
            K::Write => (Operation::Write, ANY_VALUE, K::To, VARIABLE, true),
            K::Read => (Operation::Read, VARIABLE, K::From, VARIABLE, false),
            K::Input => (Operation::Input, VARIABLE, K::With, VARIABLE_OR_STRING, false),
            K::Type => (Operation::Type, VARIABLE, K::Of, ANY_VALUE, false),
            _ => return None,
        };

        Some(Self { operation,
                    first,
                    middle,
                    second,
                    reversed })
    }
    fn parse<'a, I>(&self, tokens: &mut I, line: &str) -> LexResult<Statement>
        where I: Iterator<Item = &'a Token>
    {
        let first = expect(tokens, self.first)?;
        expect_keyword(tokens, self.middle)?;
        let second = expect(tokens, self.second)?;

        let (operand1, operand2) = if self.reversed { (second, first) } else { (first, second) };
        Ok(Statement::new(self.operation, Some(operand1), Some(operand2), line))
    }
}

/// Parses the tokens of one line into a [`Statement`].
///
/// Empty and comment-only lines produce a `NULL` statement. A line starting
/// with `^` declares a label. Every other line must start with a statement
/// keyword and follow that keyword's grammar exactly, optionally followed by
/// a comment.
///
/// # Parameters
/// - `tokens`: The tokens of the line, as produced by the lexer.
/// - `line`: The raw line text, stored on the statement for diagnostics.
///
/// # Errors
/// Returns a `CompileError` if:
/// - the first token cannot start a statement,
/// - a token does not match its grammar position, or the line ends early,
/// - anything but a comment follows the complete statement.
///
/// # Example
/// ```
/// use bna::{
///     ast::Operation,
///     interpreter::{lexer::Lexer, parser::statement::parse_statement},
/// };
///
/// let line = "ADD 5 TO total # running sum";
/// let tokens = Lexer::new(line).read_tokens().unwrap();
/// let statement = parse_statement(&tokens, line).unwrap();
///
/// assert_eq!(statement.operation, Operation::Add);
/// assert_eq!(statement.operand1.unwrap().text, "total");
/// assert_eq!(statement.operand2.unwrap().text, "5");
///
/// let tokens = Lexer::new("ADD 5 TO 6").read_tokens().unwrap();
/// assert!(parse_statement(&tokens, "ADD 5 TO 6").is_err());
/// ```
pub fn parse_statement(tokens: &[Token], line: &str) -> LexResult<Statement> {
    let mut tokens = tokens.iter();

    let Some(first) = tokens.next() else {
        return Ok(Statement::null(line));
    };

    let statement = match first.kind {
        TokenKind::Comment => return Ok(Statement::null(line)),
        TokenKind::Symbol if first.is_symbol(LABEL_START) => parse_label(&mut tokens, line)?,
        TokenKind::Keyword => parse_keyword(first, &mut tokens, line)?,
        _ => return Err(invalid_start(first)),
    };

    expect_end(&mut tokens)?;
    Ok(statement)
}

/// `^ name :`
fn parse_label<'a, I>(tokens: &mut I, line: &str) -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = expect(tokens, VARIABLE)?;
    expect(tokens, &[Accept::Symbol(LABEL_END)])?;

    Ok(Statement::new(Operation::Label, Some(name), None, line))
}

fn parse_keyword<'a, I>(first: &Token, tokens: &mut I, line: &str) -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let Some(keyword) = first.as_keyword() else {
        return Err(invalid_start(first));
    };

    if let Some(shape) = Shape::of(keyword) {
        return shape.parse(tokens, line);
    }

    match keyword {
        Keyword::Negate => parse_unary(tokens, Operation::BitwiseNegate, line),
        Keyword::Round => parse_unary(tokens, Operation::Round, line),
        Keyword::Close => parse_unary(tokens, Operation::Close, line),
        Keyword::Wait => parse_output(tokens, Operation::Wait, VARIABLE_OR_NUMBER, line),
        Keyword::Print => parse_output(tokens, Operation::Print, ANY_VALUE, line),
        Keyword::Error => parse_output(tokens, Operation::Error, VARIABLE_OR_STRING, line),
        Keyword::Test => parse_test(tokens, line),
        Keyword::Open => parse_open(tokens, line),
        Keyword::Scope => parse_scope(tokens, line),
        Keyword::Exit => Ok(Statement::new(Operation::Exit, None, None, line)),
        _ => Err(invalid_start(first)),
    }
}

/// `KEYWORD var`, acting on `operand1`.
fn parse_unary<'a, I>(tokens: &mut I, operation: Operation, line: &str) -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let target = expect(tokens, VARIABLE)?;
    Ok(Statement::new(operation, Some(target), None, line))
}

/// `KEYWORD value`, reading from `operand2`.
fn parse_output<'a, I>(tokens: &mut I,
                       operation: Operation,
                       accepted: &[Accept],
                       line: &str)
                       -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let value = expect(tokens, accepted)?;
    Ok(Statement::new(operation, None, Some(value), line))
}

/// `TEST var > value`, `TEST var < value`, `TEST var = value` or
/// `TEST var ! value`.
///
/// Ordering tests never accept list literals; equality tests do.
fn parse_test<'a, I>(tokens: &mut I, line: &str) -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    const COMPARATORS: &[Accept] = &[Accept::Symbol(GREATER_THAN),
                                     Accept::Symbol(LESS_THAN),
                                     Accept::Symbol(EQUAL),
                                     Accept::Symbol(NOT_EQUAL)];

    let left = expect(tokens, VARIABLE)?;
    let comparator = expect(tokens, COMPARATORS)?;

    let (operation, accepted) = if comparator.is_symbol(GREATER_THAN) {
        (Operation::TestGreaterThan, SCALAR)
    } else if comparator.is_symbol(LESS_THAN) {
        (Operation::TestLessThan, SCALAR)
    } else if comparator.is_symbol(EQUAL) {
        (Operation::TestEqual, ANY_VALUE)
    } else {
        (Operation::TestNotEqual, ANY_VALUE)
    };

    let right = expect(tokens, accepted)?;
    Ok(Statement::new(operation, Some(left), Some(right), line))
}

/// `OPEN name AS READ var` or `OPEN name AS WRITE var`.
fn parse_open<'a, I>(tokens: &mut I, line: &str) -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = expect(tokens, VARIABLE_OR_STRING)?;
    expect_keyword(tokens, Keyword::As)?;
    let mode = expect(tokens,
                      &[Accept::Keyword(Keyword::Read), Accept::Keyword(Keyword::Write)])?;
    let target = expect(tokens, VARIABLE)?;

    let operation = if mode.as_keyword() == Some(Keyword::Read) {
        Operation::OpenRead
    } else {
        Operation::OpenWrite
    };

    Ok(Statement::new(operation, Some(target), Some(name), line))
}

/// `SCOPE OPEN` or `SCOPE CLOSE`.
fn parse_scope<'a, I>(tokens: &mut I, line: &str) -> LexResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let action = expect(tokens,
                        &[Accept::Keyword(Keyword::Open), Accept::Keyword(Keyword::Close)])?;

    let operation = if action.as_keyword() == Some(Keyword::Open) {
        Operation::ScopeOpen
    } else {
        Operation::ScopeClose
    };

    Ok(Statement::new(operation, None, None, line))
}

fn invalid_start(token: &Token) -> CompileError {
    CompileError::InvalidStatementStart { token: token.text.clone() }
}
