use crate::{ast::{Expr, InfixOperator, Program},
            error::RuntimeError,
            interpreter::{evaluator::scope::Scope, value::core::Value}};

/// The result type of every evaluation step.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How deep expression evaluation may nest before it is aborted.
///
/// Function bodies, `eval` fragments and plain expression nesting all count
/// against the same budget.
pub const MAX_RECURSION_DEPTH: usize = 200;

/// Walks a syntax tree and produces values.
///
/// The evaluator itself only carries the recursion-depth counter; all
/// bindings live in the `Scope` passed alongside every call, so one
/// evaluator can serve any number of programs and scopes.
///
/// # Example
/// ```
/// use fracta::interpreter::{evaluator::{core::Evaluator, scope::Scope},
///                           lexer::scan_tokens,
///                           parser::statement::parse_program,
///                           value::core::Value};
///
/// let scanned = scan_tokens("x = 2; x * x;").unwrap();
/// let program = parse_program(&scanned.tokens).unwrap();
///
/// let mut scope = Scope::root();
/// let mut evaluator = Evaluator::new();
/// let result = evaluator.eval_program(&program, &mut scope).unwrap();
/// assert_eq!(result, Value::Integer(4));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    depth: usize,
}

impl Evaluator {
    /// Creates an evaluator with an empty recursion budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Runs every statement of a program against `scope` and returns the
    /// value of the last one.
    ///
    /// A top-level `return` stops the program and yields its payload; a
    /// stray `break` or `continue` stops it with null.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn eval_program(&mut self, program: &Program, scope: &mut Scope<'_>) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &program.statements {
            match self.eval_statement(statement, scope)? {
                Value::Return(value) => return Ok(*value),
                Value::Break | Value::Continue => return Ok(Value::Null),
                value => result = value,
            }
        }

        Ok(result)
    }

    /// Evaluates a single expression against `scope`.
    ///
    /// Every call passes the recursion guard first, so runaway recursion
    /// through function calls or `eval` surfaces as a clean error instead of
    /// exhausting the stack.
    ///
    /// # Errors
    /// - `RecursionLimitExceeded` when nested deeper than
    ///   [`MAX_RECURSION_DEPTH`].
    /// - Any `RuntimeError` raised by the expression itself.
    pub fn eval_expression(&mut self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult<Value> {
        if self.depth >= MAX_RECURSION_DEPTH {
            return Err(RuntimeError::RecursionLimitExceeded { line: expr.line_number() });
        }

        self.depth += 1;
        let result = self.dispatch_expression(expr, scope);
        self.depth -= 1;

        result
    }

    fn dispatch_expression(&mut self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name, line } => {
                scope.lookup(name)
                     .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.clone(),
                                                                      line: *line, })
            },
            Expr::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expr::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Prefix { op, right, line } => {
                let operand = self.eval_expression(right, scope)?;
                Self::eval_prefix(*op, &operand, *line)
            },
            Expr::Infix { op, left, right, line } => {
                // The left side of `=` is a binding target, not a read.
                let left = if *op == InfixOperator::Assign {
                    Self::assignment_target(left)?
                } else {
                    self.eval_expression(left, scope)?
                };
                let right = self.eval_expression(right, scope)?;
                Self::eval_infix(*op, left, right, scope, *line)
            },
            Expr::Call { name, arguments, line } => self.eval_call(name, arguments, scope, *line),
            Expr::Array { elements, .. } => {
                // The value model has no sequence type; elements run for
                // their effect only.
                for element in elements {
                    self.eval_expression(element, scope)?;
                }
                Ok(Value::Null)
            },
        }
    }

    /// Resolves the left side of an assignment without reading it.
    fn assignment_target(expr: &Expr) -> EvalResult<Value> {
        if let Expr::Identifier { name, .. } = expr {
            Ok(Value::Identifier(name.clone()))
        } else {
            Err(RuntimeError::NotAnIdentifier { details: expr.describe().to_string(),
                                                line:    expr.line_number(), })
        }
    }
}
