/// Hosts the `Evaluator` and expression dispatch.
///
/// The evaluator owns the recursion-depth guard; every expression evaluation
/// passes through it before reaching the per-node handlers.
pub mod core;
/// Evaluates function calls and the `print`/`eval` builtins.
pub mod function;
/// Evaluates infix operations.
///
/// Implements the promotion order: integers (with booleans as 0/1), then
/// fractions, then mixed fraction/integer, then string operations.
pub mod infix;
/// Evaluates prefix operations.
pub mod prefix;
/// Implements variable and function scopes.
///
/// Lookups copy values out and may walk a parent chain; assignments always
/// land in the current scope. Function calls snapshot the caller's bindings
/// into a fresh scope.
pub mod scope;
/// Evaluates statements: blocks, conditionals, loops and the control-flow
/// signal statements.
pub mod statement;
