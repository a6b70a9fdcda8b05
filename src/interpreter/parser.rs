/// Parses expressions.
///
/// Implements the operator precedence ladder, loosest to tightest:
/// assignment, equality, comparison, bitwise, additive, multiplicative,
/// prefix, the `.` join/index operator and finally calls and literals.
pub mod core;
/// Parses statements and whole programs.
///
/// Covers expression statements, blocks, `if`/`else`, `while`, `break`,
/// `continue`, `return` and `fn` declarations.
pub mod statement;
