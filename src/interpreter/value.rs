/// The `Value` enum, conversions, parsing of numbers and display.
pub mod core;

/// Numeric operations: arithmetic with integer-to-float promotion, logarithm,
/// power, rounding and the bitwise operations.
pub mod arithmetic;

/// Equality and ordering between values.
///
/// Equality never fails. Ordering yields the `NaN` sentinel for pairings that
/// cannot be ordered, which the instruction layer reports as an error.
pub mod comparison;

/// String and list operations: append, size and indexed element access.
pub mod collection;

/// File handles backing the `READFILE` and `WRITEFILE` values.
pub mod file;
