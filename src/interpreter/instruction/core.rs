use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    ast::{Operation, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        memory::{Memory, RESULT},
        token::Token,
        value::core::Value,
    },
    util::num::{MAX_JUMP_TARGET, i64_to_usize_checked, seconds_to_duration},
};

/// The execution state of a running program.
///
/// A machine owns the scope stack, the instruction pointer and the console
/// streams. It executes one [`Statement`] per [`Machine::step`]; the program
/// driving it decides which statement comes next from [`Machine::ip`].
///
/// ## Usage
///
/// Console input and output are generic so that tests can run programs
/// against in-memory buffers:
///
/// ```
/// use bna::interpreter::{compiler::compile_line, instruction::core::Machine};
///
/// let mut out = Vec::new();
/// let mut machine = Machine::new(&b""[..], &mut out);
/// machine.step(&compile_line("PRINT (1, 2)").unwrap()).unwrap();
/// assert_eq!(machine.ip(), 1);
/// drop(machine);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "( 1, 2 )\n");
/// ```
pub struct Machine<R, W> {
    /// The scope stack.
    pub memory:                      Memory,
    ip:                              usize,
    jump:                            Option<usize>,
    running:                         bool,
    pub(in crate::interpreter) input:  R,
    pub(in crate::interpreter) output: W,
}

impl<R, W> Machine<R, W>
    where R: BufRead,
          W: Write
{
    /// Creates a machine at statement 0 with an empty root scope.
    pub fn new(input: R, output: W) -> Self {
        Self { memory: Memory::new(),
               ip: 0,
               jump: None,
               running: true,
               input,
               output }
    }
    /// Index of the statement to execute next.
    #[must_use]
    pub const fn ip(&self) -> usize {
        self.ip
    }
    /// Whether `EXIT` has not been executed yet.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
    /// Flushes the console output.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if flushing fails.
    pub fn flush(&mut self) -> EvalResult<()> {
        self.output.flush()?;
        Ok(())
    }
    /// Executes `statement` and advances the instruction pointer, either to
    /// the next statement or to the target of a taken `GOTO`.
    ///
    /// # Errors
    /// Returns the statement's `RuntimeError`; the instruction pointer then
    /// still points at the failing statement.
    pub fn step(&mut self, statement: &Statement) -> EvalResult<()> {
        log::trace!("{:>4}: {statement}", self.ip);
        self.execute(statement)?;
        self.ip = self.jump.take().unwrap_or(self.ip + 1);
        Ok(())
    }
    /// Executes a single statement without moving the instruction pointer.
    ///
    /// Both operands are evaluated first: the primary operand from the slot
    /// the operation acts on, the secondary one from the other slot. Absent
    /// operands evaluate to `null`.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an operand cannot be evaluated or the
    /// operation fails on the operand values.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        let target = statement.primary().cloned().unwrap_or_else(Token::null);
        let primary = self.memory.evaluate(&target)?;
        let secondary = self.memory.evaluate_operand(statement.secondary())?;

        match statement.operation {
            Operation::Null | Operation::Label => Ok(()),
            Operation::Set => self.memory.set(&target, secondary, true),
            Operation::Add => self.memory.set(&target, primary.add(&secondary)?, false),
            Operation::Subtract => self.memory.set(&target, primary.subtract(&secondary)?, false),
            Operation::Multiply => self.memory.set(&target, primary.multiply(&secondary)?, false),
            Operation::Divide => self.memory.set(&target, primary.divide(&secondary)?, false),
            Operation::Power => {
                self.memory.set(&target, primary.exponentiate(&secondary)?, false)
            },
            Operation::Modulus => self.memory.set(&target, primary.modulus(&secondary)?, false),
            Operation::Logarithm => self.memory.set(&target, primary.log(&secondary)?, false),
            Operation::BitwiseAnd => {
                self.memory.set(&target, primary.bitwise_and(&secondary)?, false)
            },
            Operation::BitwiseOr => {
                self.memory.set(&target, primary.bitwise_or(&secondary)?, false)
            },
            Operation::BitwiseXor => {
                self.memory.set(&target, primary.bitwise_xor(&secondary)?, false)
            },
            Operation::BitwiseNegate => {
                self.memory.set(&target, primary.bitwise_negate()?, false)
            },
            Operation::Round => self.memory.set(&target, primary.round()?, false),
            Operation::Random => self.memory.set(&target, random(&secondary)?, true),
            Operation::List => self.memory.set(&target, list(&secondary)?, true),
            Operation::Append => self.memory.set(&target, primary.append(secondary)?, false),
            Operation::Size => self.memory.set(&target, secondary.size()?, true),
            Operation::Type => {
                self.memory.set(&target, Value::from(secondary.type_name()), true)
            },
            Operation::OpenRead | Operation::OpenWrite => {
                self.open(statement.operation, &target, &secondary)
            },
            Operation::Close => self.close(&target, &primary),
            Operation::Read => self.read(&target, &primary, statement.secondary()),
            Operation::Write => self.write(&primary, &secondary),
            Operation::Input => self.input(&target, &secondary),
            Operation::Print => self.print(&primary),
            Operation::TestGreaterThan
            | Operation::TestLessThan
            | Operation::TestEqual
            | Operation::TestNotEqual => self.test(statement.operation, &primary, &secondary),
            Operation::ScopeOpen => {
                self.memory.open_scope();
                Ok(())
            },
            Operation::ScopeClose => self.memory.close_scope(),
            Operation::Wait => wait(&primary),
            Operation::Goto => self.goto(&primary, &secondary),
            Operation::Exit => {
                self.running = false;
                Ok(())
            },
            Operation::Error => Err(RuntimeError::UserError { message: primary.to_string() }),
        }
    }
    /// Stores the outcome of a `TEST` in `result` as `1` or `0`.
    fn test(&mut self, operation: Operation, left: &Value, right: &Value) -> EvalResult<()> {
        let outcome = match operation {
            Operation::TestGreaterThan => ordered(left, right, left.greater_than(right))?,
            Operation::TestLessThan => ordered(left, right, left.less_than(right))?,
            Operation::TestEqual => Value::from(left.equals(right)),
            _ => Value::from(!left.equals(right)),
        };
        self.memory.set_name(RESULT, outcome, true)
    }
    /// Schedules a jump to `target` unless `condition` equals integer `0`.
    fn goto(&mut self, target: &Value, condition: &Value) -> EvalResult<()> {
        let Value::Integer(index) = target else {
            return Err(incorrect_type("INTEGER", target));
        };
        let out_of_range = || RuntimeError::ValueOutOfRange { value: index.to_string(),
                                                              range: "a valid statement index" };
        if !(0..=MAX_JUMP_TARGET).contains(index) {
            return Err(out_of_range());
        }

        if !condition.equals(&Value::Integer(0)) {
            self.jump = Some(i64_to_usize_checked(*index, out_of_range())?);
        }
        Ok(())
    }
}

/// Turns the `NaN` sentinel of an ordering into an error.
fn ordered(left: &Value, right: &Value, outcome: Value) -> EvalResult<Value> {
    match outcome {
        Value::NaN => Err(RuntimeError::CouldNotCompare { left:  left.type_name(),
                                                          right: right.type_name(), }),
        outcome => Ok(outcome),
    }
}

/// A uniformly random number below `bound`.
///
/// Integer bounds draw an integer from `[0, bound)`, with `0` for a zero bound.
/// Float bounds scale a draw from `[0, 1)`.
fn random(bound: &Value) -> EvalResult<Value> {
    let mut rng = rand::thread_rng();
    match bound {
        Value::Integer(0) => Ok(Value::Integer(0)),
        Value::Integer(n) if *n > 0 => Ok(Value::Integer(rng.gen_range(0..*n))),
        Value::Integer(n) => Err(RuntimeError::ValueOutOfRange { value: n.to_string(),
                                                                 range: "a non-negative bound" }),
        Value::Float(f) => Ok(Value::Float(rng.gen_range(0.0..1.0) * f)),
        _ => Err(incorrect_type("INTEGER or FLOAT", bound)),
    }
}

/// A list of `size` nulls.
fn list(size: &Value) -> EvalResult<Value> {
    let Value::Integer(n) = size else {
        return Err(incorrect_type("INTEGER", size));
    };
    let len = i64_to_usize_checked(*n,
                                   RuntimeError::ValueOutOfRange { value: n.to_string(),
                                                                   range: "a non-negative size" })?;
    let mut elements = Vec::new();
    elements.try_reserve_exact(len)
            .map_err(|_| RuntimeError::ValueOutOfRange { value: n.to_string(),
                                                         range: "a list size that fits in memory" })?;
    elements.resize(len, Value::Null);
    Ok(Value::List(elements))
}

/// Blocks the running thread for `seconds`.
fn wait(seconds: &Value) -> EvalResult<()> {
    let Some(secs) = seconds.as_float() else {
        return Err(incorrect_type("INTEGER or FLOAT", seconds));
    };
    let duration =
        seconds_to_duration(secs).ok_or_else(|| RuntimeError::ValueOutOfRange { value: seconds.to_string(),
                                                                                 range: "a non-negative number of seconds" })?;
    std::thread::sleep(duration);
    Ok(())
}

pub(in crate::interpreter) const fn incorrect_type(expected: &'static str,
                                                   found: &Value)
                                                   -> RuntimeError {
    RuntimeError::IncorrectOperandType { expected,
                                         found: found.type_name() }
}
