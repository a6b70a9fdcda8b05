use crate::{ast::{Expr, Statement},
            interpreter::{evaluator::{core::{EvalResult, Evaluator}, scope::Scope},
                          value::core::Value}};

impl Evaluator {
    /// Evaluates a single statement against `scope`.
    ///
    /// Control-flow statements produce signal values (`Break`, `Continue`,
    /// `Return`) that blocks pass upward until a loop or a function call
    /// consumes them.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the contained expressions.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          scope: &mut Scope<'_>)
                          -> EvalResult<Value> {
        match statement {
            Statement::Expression { expr, .. } => self.eval_expression(expr, scope),
            Statement::Block { statements, .. } => self.eval_block(statements, scope),
            Statement::If { condition,
                            consequence,
                            alternative,
                            .. } => {
                let condition = self.eval_expression(condition, scope)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, scope)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, scope)
                } else {
                    Ok(Value::Null)
                }
            },
            Statement::While { condition, body, .. } => self.eval_while(condition, body, scope),
            Statement::Function(decl) => {
                scope.declare_function(decl.clone());
                Ok(Value::Null)
            },
            Statement::Return { value, .. } => {
                let payload = match value {
                    Some(expr) => self.eval_expression(expr, scope)?,
                    None => Value::Null,
                };
                Ok(Value::Return(Box::new(payload)))
            },
            Statement::Break { .. } => Ok(Value::Break),
            Statement::Continue { .. } => Ok(Value::Continue),
        }
    }

    /// Evaluates a statement list in the current scope.
    ///
    /// A signal value short-circuits the block and becomes its result;
    /// otherwise the block yields the value of its last statement, or null
    /// when empty. Blocks do not open a scope of their own.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by a contained statement.
    pub fn eval_block(&mut self,
                      statements: &[Statement],
                      scope: &mut Scope<'_>)
                      -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in statements {
            let value = self.eval_statement(statement, scope)?;
            if matches!(value, Value::Break | Value::Continue | Value::Return(_)) {
                return Ok(value);
            }
            result = value;
        }

        Ok(result)
    }

    /// Runs a `while` loop.
    ///
    /// `Break` ends the loop, `Continue` re-checks the condition, and a
    /// `Return` signal passes through to the enclosing function call. The
    /// loop itself always yields null.
    fn eval_while(&mut self,
                  condition: &Expr,
                  body: &[Statement],
                  scope: &mut Scope<'_>)
                  -> EvalResult<Value> {
        loop {
            let decision = self.eval_expression(condition, scope)?;
            if !decision.is_truthy() {
                break;
            }

            match self.eval_block(body, scope)? {
                Value::Break => break,
                signal @ Value::Return(_) => return Ok(signal),
                _ => {},
            }
        }

        Ok(Value::Null)
    }
}
