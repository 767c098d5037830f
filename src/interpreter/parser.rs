/// Token acceptance sets and the cursor helpers shared by all grammars.
///
/// Each grammar position names the token kinds, keywords or symbols it
/// accepts. The helpers here consume one token, check it against such a set
/// and build the *unexpected token* or *missing token* error otherwise.
pub mod grammar;

/// Statement parsing.
///
/// Dispatches on a line's leading token to the fixed-shape grammar of each
/// keyword and produces one [`crate::ast::Statement`] per line.
pub mod statement;
