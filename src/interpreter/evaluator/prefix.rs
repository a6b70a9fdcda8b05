use crate::{ast::PrefixOperator,
            error::RuntimeError,
            interpreter::{evaluator::core::{EvalResult, Evaluator}, value::core::Value}};

impl Evaluator {
    /// Evaluates a prefix operation on an already-evaluated operand.
    ///
    /// `+` and `-` work on integers and fractions. On a boolean, `-` means
    /// the same as `!`: logical negation. Everything else is a type error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `operand`: The evaluated operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub(crate) fn eval_prefix(op: PrefixOperator,
                              operand: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        match (op, operand) {
            (PrefixOperator::Plus, Value::Integer(n)) => Ok(Value::Integer(*n)),
            (PrefixOperator::Minus, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (PrefixOperator::Plus, Value::Fraction(f)) => Ok(Value::Fraction(*f)),
            (PrefixOperator::Minus, Value::Fraction(f)) => Ok(Value::Fraction(f.negated(line)?)),
            (PrefixOperator::Bang | PrefixOperator::Minus, Value::Boolean(b)) => {
                Ok(Value::Boolean(!b))
            },
            (op, operand) => {
                Err(RuntimeError::TypeError { details: format!("cannot apply prefix '{op}' to a {}",
                                                               operand.kind()),
                                              line })
            },
        }
    }
}
