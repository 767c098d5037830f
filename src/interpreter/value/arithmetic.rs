use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, value::core::Value},
    util::num::{f64_to_i64_saturating, i64_to_f64},
};

impl Value {
    /// Applies a numeric binary operation with integer-to-float promotion.
    ///
    /// Two integers use `int`; any pairing involving a float promotes the
    /// integer and uses `float`.
    fn numeric(&self,
               rhs: &Self,
               operation: &'static str,
               int: impl Fn(i64, i64) -> EvalResult<i64>,
               float: impl Fn(f64, f64) -> f64)
               -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Ok(Self::Integer(int(*a, *b)?)),
            (Self::Integer(a), Self::Float(b)) => Ok(Self::Float(float(i64_to_f64(*a), *b))),
            (Self::Float(a), Self::Integer(b)) => Ok(Self::Float(float(*a, i64_to_f64(*b)))),
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(float(*a, *b))),
            _ => Err(self.undefined(operation, Some(rhs))),
        }
    }
    /// Applies an operation that is only defined on two integers.
    fn integral(&self,
                rhs: &Self,
                operation: &'static str,
                int: impl Fn(i64, i64) -> EvalResult<i64>)
                -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Ok(Self::Integer(int(*a, *b)?)),
            _ => Err(self.undefined(operation, Some(rhs))),
        }
    }
    /// Numeric addition. Integer overflow wraps.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// let sum = Value::Integer(1).add(&Value::Float(0.5)).unwrap();
    /// assert_eq!(sum, Value::Float(1.5));
    ///
    /// let wrapped = Value::Integer(i64::MAX).add(&Value::Integer(1)).unwrap();
    /// assert_eq!(wrapped, Value::Integer(i64::MIN));
    ///
    /// assert!(Value::from("a").add(&Value::Integer(1)).is_err());
    /// ```
    pub fn add(&self, rhs: &Self) -> EvalResult<Self> {
        self.numeric(rhs, "+", |a, b| Ok(a.wrapping_add(b)), |a, b| a + b)
    }
    /// Numeric subtraction. Integer overflow wraps.
    pub fn subtract(&self, rhs: &Self) -> EvalResult<Self> {
        self.numeric(rhs, "-", |a, b| Ok(a.wrapping_sub(b)), |a, b| a - b)
    }
    /// Numeric multiplication. Integer overflow wraps.
    pub fn multiply(&self, rhs: &Self) -> EvalResult<Self> {
        self.numeric(rhs, "*", |a, b| Ok(a.wrapping_mul(b)), |a, b| a * b)
    }
    /// Numeric division.
    ///
    /// Integer division truncates toward zero and fails on a zero divisor.
    /// Float division follows IEEE 754 and may yield infinities.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(-7).divide(&Value::Integer(2)).unwrap(), Value::Integer(-3));
    /// assert!(Value::Integer(1).divide(&Value::Integer(0)).is_err());
    ///
    /// let infinite = Value::Float(1.0).divide(&Value::Integer(0)).unwrap();
    /// assert_eq!(infinite, Value::Float(f64::INFINITY));
    /// ```
    pub fn divide(&self, rhs: &Self) -> EvalResult<Self> {
        self.numeric(rhs,
                     "/",
                     |a, b| {
                         if b == 0 {
                             return Err(RuntimeError::DivisionByZero);
                         }
                         Ok(a.wrapping_div(b))
                     },
                     |a, b| a / b)
    }
    /// Integer remainder, with the sign of the dividend.
    pub fn modulus(&self, rhs: &Self) -> EvalResult<Self> {
        self.integral(rhs, "MOD", |a, b| {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(a.wrapping_rem(b))
            })
    }
    /// Raises the value to the power `rhs`.
    ///
    /// Two integers with a non-negative exponent give a wrapping integer
    /// power. A negative integer exponent, or any float operand, gives a
    /// float.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(2).exponentiate(&Value::Integer(10)).unwrap(),
    ///            Value::Integer(1024));
    /// assert_eq!(Value::Integer(2).exponentiate(&Value::Integer(-1)).unwrap(),
    ///            Value::Float(0.5));
    /// ```
    pub fn exponentiate(&self, rhs: &Self) -> EvalResult<Self> {
        if let (Self::Integer(base), Self::Integer(exponent)) = (self, rhs)
           && *exponent >= 0
        {
            return Ok(Self::Integer(wrapping_pow(*base, exponent.unsigned_abs())));
        }
        match (self.as_float(), rhs.as_float()) {
            (Some(base), Some(exponent)) => Ok(Self::Float(base.powf(exponent))),
            _ => Err(self.undefined("POW", Some(rhs))),
        }
    }
    /// The logarithm of the value to base `base`, always a float.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(8).log(&Value::Integer(2)).unwrap(), Value::Float(3.0));
    /// ```
    pub fn log(&self, base: &Self) -> EvalResult<Self> {
        let (Some(value), Some(base_value)) = (self.as_float(), base.as_float()) else {
            return Err(self.undefined("LOG", Some(base)));
        };
        Ok(Self::Float(value.ln() / base_value.ln()))
    }
    /// Rounds a float to the nearest integer, ties to even.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Float(2.5).round().unwrap(), Value::Integer(2));
    /// assert_eq!(Value::Float(3.5).round().unwrap(), Value::Integer(4));
    /// assert_eq!(Value::Float(-1.6).round().unwrap(), Value::Integer(-2));
    /// assert!(Value::Integer(3).round().is_err());
    /// ```
    pub fn round(&self) -> EvalResult<Self> {
        match self {
            Self::Float(r) => Ok(Self::Integer(f64_to_i64_saturating(r.round_ties_even()))),
            _ => Err(self.undefined("ROUND", None)),
        }
    }
    /// Bitwise AND of two integers.
    pub fn bitwise_and(&self, rhs: &Self) -> EvalResult<Self> {
        self.integral(rhs, "AND", |a, b| Ok(a & b))
    }
    /// Bitwise OR of two integers.
    pub fn bitwise_or(&self, rhs: &Self) -> EvalResult<Self> {
        self.integral(rhs, "OR", |a, b| Ok(a | b))
    }
    /// Bitwise XOR of two integers.
    pub fn bitwise_xor(&self, rhs: &Self) -> EvalResult<Self> {
        self.integral(rhs, "XOR", |a, b| Ok(a ^ b))
    }
    /// Bitwise complement of an integer.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(0).bitwise_negate().unwrap(), Value::Integer(-1));
    /// ```
    pub fn bitwise_negate(&self) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => Ok(Self::Integer(!n)),
            _ => Err(self.undefined("NEGATE", None)),
        }
    }
    /// The value as a float, if it is numeric.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Float(r) => Some(*r),
            _ => None,
        }
    }
}

/// Integer power by squaring, wrapping on overflow, for any `u64` exponent.
fn wrapping_pow(mut base: i64, mut exponent: u64) -> i64 {
    let mut result: i64 = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    result
}
