/// Numeric conversion helpers.
///
/// This module provides the conversions the interpreter needs between `i64`,
/// `usize`, `f64` and [`std::time::Duration`]. Conversions that can fail
/// return a `Result` or an `Option`; the lossy ones are named after the loss
/// they accept (`saturating`) or document it.
pub mod num;
