/// Executes parsed programs.
///
/// Hosts the evaluator, scopes, operator evaluation and the builtins. All
/// arithmetic on `/`-results is exact: divisions build fractions instead of
/// floats, and fraction math cross-multiplies integers.
pub mod evaluator;
/// Turns source text into tokens.
///
/// Built on a derived logos lexer that tracks line numbers and the running
/// bracket balance the `eval` builtin checks before running a fragment.
pub mod lexer;
/// Turns tokens into a syntax tree.
///
/// A recursive-descent parser: one function per precedence level for
/// expressions, and a statement parser for blocks, conditionals, loops and
/// function declarations.
pub mod parser;
/// Defines runtime values.
///
/// The `Value` enum, the exact `Fraction` type and their display forms.
pub mod value;
