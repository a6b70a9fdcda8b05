//! # fracta
//!
//! fracta is a small imperative scripting language whose arithmetic is
//! exact. Dividing two integers produces a rational number instead of a
//! float, and all rational math is performed with integer
//! cross-multiplication, kept in lowest terms. The language has variables,
//! functions, `if`/`while` control flow and a `print`/`eval` pair of
//! builtins.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::{core::Evaluator, scope::Scope},
                         lexer::scan_tokens,
                         parser::statement::parse_program,
                         value::core::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to every node for error reporting.
/// - Names operators for reuse in diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. Every variant carries the source line it points at,
/// and the rendered messages are what the command-line front end prints.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representations to provide a complete runtime for fracta scripts. It
/// exposes the building blocks the crate-level entry points are made of.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for tokenizing, parsing and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across the interpreter.
///
/// Currently integer helpers backing the fraction type: greatest common
/// divisor and decimal digit counting.
pub mod util;

/// Evaluates a complete script and returns its final value.
///
/// The value of a script is the value of its last statement; a top-level
/// `return` stops the script early with its payload.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error the script raises.
///
/// # Examples
/// ```
/// use fracta::{eval_source, interpreter::value::core::Value};
///
/// // Integer division is exact: 1/3 + 1/6 is precisely 1/2.
/// let result = eval_source("1/3 + 1/6;").unwrap();
/// assert_eq!(result.to_string(), "1/2");
///
/// // 'y' is not defined.
/// assert!(eval_source("x = y + 1;").is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let scanned = scan_tokens(source)?;
    let program = parse_program(&scanned.tokens)?;

    let mut scope = Scope::root();
    let mut evaluator = Evaluator::new();

    evaluator.eval_program(&program, &mut scope)
             .map_err(Into::into)
}

/// Runs a script for its effects.
///
/// With `auto_print` set, the script's final value is printed after the run
/// unless it is null; this backs the command line's pipe mode.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if any runtime error
/// occurs.
///
/// # Examples
/// ```
/// use fracta::get_result;
///
/// let res = get_result("x = 2 + 2; print(x);", false);
/// assert!(res.is_ok());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = eval_source(source)?;

    if auto_print && !matches!(value, Value::Null) {
        println!("{value}");
    }

    Ok(())
}
