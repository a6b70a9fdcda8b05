use crate::{ast::Expr,
            error::RuntimeError,
            interpreter::{evaluator::{core::{EvalResult, Evaluator}, scope::Scope},
                          lexer::scan_fragment,
                          parser::statement::parse_program,
                          value::core::Value}};

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// User-declared functions are looked up first, so a script may shadow
    /// the builtins. If the name matches neither a declaration nor `print`
    /// or `eval`, the call fails.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the arity does not match exactly.
    /// - `UnknownFunction` if the name resolves to nothing.
    /// - Any `RuntimeError` raised by the arguments or the body.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            scope: &mut Scope<'_>,
                            line: usize)
                            -> EvalResult<Value> {
        if let Some(decl) = scope.function(name) {
            let decl = decl.clone();

            if arguments.len() != decl.params.len() {
                return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                                 expected: decl.params.len(),
                                                                 found:    arguments.len(),
                                                                 line });
            }

            // Arguments evaluate in the caller's scope, before the call
            // scope snapshot is taken.
            let mut values = Vec::with_capacity(arguments.len());
            for argument in arguments {
                values.push(self.eval_expression(argument, scope)?);
            }

            let mut call_scope = scope.call_scope();
            for (param, value) in decl.params.iter().zip(values) {
                call_scope.assign(param, value);
            }

            let result = self.eval_block(&decl.body, &mut call_scope)?;
            return Ok(match result {
                Value::Return(value) => *value,
                _ => Value::Null,
            });
        }

        match name {
            "print" => self.eval_print(arguments, scope, line),
            "eval" => self.eval_eval(arguments, scope, line),
            _ => Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                     line }),
        }
    }

    /// The `print` builtin: writes the argument's display form and a
    /// newline, and yields null.
    fn eval_print(&mut self,
                  arguments: &[Expr],
                  scope: &mut Scope<'_>,
                  line: usize)
                  -> EvalResult<Value> {
        if arguments.len() != 1 {
            return Err(RuntimeError::ArgumentCountMismatch { name:     "print".to_string(),
                                                             expected: 1,
                                                             found:    arguments.len(),
                                                             line });
        }

        let value = self.eval_expression(&arguments[0], scope)?;
        println!("{value}");
        Ok(Value::Null)
    }

    /// The `eval` builtin: runs its argument's display form as a script
    /// against the caller's scope.
    ///
    /// Incomplete fragments are a deliberate no-op yielding null: the source
    /// must close every bracket and end in `;` or `}` before anything runs.
    /// A complete fragment that still fails to lex or parse is an error.
    fn eval_eval(&mut self,
                 arguments: &[Expr],
                 scope: &mut Scope<'_>,
                 line: usize)
                 -> EvalResult<Value> {
        if arguments.len() != 1 {
            return Err(RuntimeError::ArgumentCountMismatch { name:     "eval".to_string(),
                                                             expected: 1,
                                                             found:    arguments.len(),
                                                             line });
        }

        let source = self.eval_expression(&arguments[0], scope)?.to_string();

        // Completeness is judged over the recognized tokens, so unlexable
        // input in an unterminated fragment is still a no-op.
        let (scanned, lex_error) = scan_fragment(&source);
        if !scanned.is_complete() {
            return Ok(Value::Null);
        }
        if let Some(error) = lex_error {
            return Err(RuntimeError::NestedEvalFailed { details: error.to_string(),
                                                        line });
        }

        let program =
            parse_program(&scanned.tokens).map_err(|e| {
                                              RuntimeError::NestedEvalFailed { details: e.to_string(),
                                                                               line }
                                          })?;
        self.eval_program(&program, scope)
    }
}
