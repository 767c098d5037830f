/// The execution machine and the dispatch of every operation.
///
/// Holds the instruction pointer, the scope stack and the console streams,
/// and implements the arithmetic, collection, comparison and control-flow
/// instructions.
pub mod core;

/// File and console instructions: `OPEN`, `CLOSE`, `READ`, `WRITE`, `INPUT`
/// and `PRINT`.
pub mod io;
