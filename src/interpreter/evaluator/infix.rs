use crate::{ast::InfixOperator,
            error::RuntimeError,
            interpreter::{evaluator::{core::{EvalResult, Evaluator},
                                      scope::Scope},
                          value::{core::Value, fraction::Fraction}}};

impl Evaluator {
    /// Evaluates an infix operation between two already-evaluated values.
    ///
    /// Assignment is handled first, against `scope`. Everything else is
    /// routed by operand types, in promotion order: two integer-like values
    /// (booleans count as 0/1) use integer arithmetic, two fractions use
    /// fraction arithmetic, a fraction next to an integer-like value
    /// promotes the latter, and strings support concatenation, equality,
    /// repetition and indexing. Any other pairing is a type error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `scope`: The scope assignments write into.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub(crate) fn eval_infix(op: InfixOperator,
                             left: Value,
                             right: Value,
                             scope: &mut Scope<'_>,
                             line: usize)
                             -> EvalResult<Value> {
        use Value::{Boolean, Integer, Str};

        if op == InfixOperator::Assign {
            return match left {
                Value::Identifier(name) => {
                    scope.assign(&name, right.clone());
                    Ok(right)
                },
                other => Err(RuntimeError::NotAnIdentifier { details: other.kind().to_string(),
                                                             line }),
            };
        }

        match (&left, &right) {
            (Integer(_) | Boolean(_), Integer(_) | Boolean(_)) => {
                Self::eval_integer_infix(op, integer_operand(&left), integer_operand(&right), line)
            },
            (Value::Fraction(l), Value::Fraction(r)) => Self::eval_fraction_infix(op, *l, *r, line),
            (Value::Fraction(l), Integer(_) | Boolean(_)) => {
                Self::eval_fraction_infix(op, *l, Fraction::from_integer(integer_operand(&right)), line)
            },
            (Integer(_) | Boolean(_), Value::Fraction(r)) => {
                Self::eval_fraction_infix(op, Fraction::from_integer(integer_operand(&left)), *r, line)
            },
            (Str(l), Str(r)) => Self::eval_string_infix(op, l, r, line),
            (Str(l), Integer(r)) => Self::eval_string_integer_infix(op, l, *r, line),
            (left, right) => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to a {} and a {}",
                                                               left.kind(),
                                                               right.kind()),
                                              line })
            },
        }
    }

    /// Evaluates an infix operation on two integers.
    ///
    /// `/` always builds a fraction, `//` truncates toward zero, `.` joins
    /// its operands into a decimal fraction and `^`/`&` are bitwise.
    fn eval_integer_infix(op: InfixOperator, l: i64, r: i64, line: usize) -> EvalResult<Value> {
        use InfixOperator::{Add, BitAnd, BitXor, Div, Dot, Equal, FloorDiv, Greater,
                            GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub};

        match op {
            Add => checked(l.checked_add(r), line),
            Sub => checked(l.checked_sub(r), line),
            Mul => checked(l.checked_mul(r), line),
            Div => Ok(Value::Fraction(Fraction::new(l, r, line)?)),
            FloorDiv => {
                if r == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                checked(l.checked_div(r), line)
            },
            Mod => {
                if r == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                checked(l.checked_rem(r), line)
            },
            Dot => Ok(Value::Fraction(Fraction::from_decimal(l, r, line)?)),
            Equal => Ok(Value::Boolean(l == r)),
            NotEqual => Ok(Value::Boolean(l != r)),
            Less => Ok(Value::Boolean(l < r)),
            Greater => Ok(Value::Boolean(l > r)),
            LessEqual => Ok(Value::Boolean(l <= r)),
            GreaterEqual => Ok(Value::Boolean(l >= r)),
            BitXor => Ok(Value::Integer(l ^ r)),
            BitAnd => Ok(Value::Integer(l & r)),
            InfixOperator::Assign => unreachable!("assignment is resolved before type dispatch"),
        }
    }

    /// Evaluates an infix operation on two fractions.
    fn eval_fraction_infix(op: InfixOperator,
                           l: Fraction,
                           r: Fraction,
                           line: usize)
                           -> EvalResult<Value> {
        use InfixOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
                            NotEqual, Sub};

        match op {
            Add => Ok(Value::Fraction(l.add(r, line)?)),
            Sub => Ok(Value::Fraction(l.sub(r, line)?)),
            Mul => Ok(Value::Fraction(l.mul(r, line)?)),
            Div => Ok(Value::Fraction(l.div(r, line)?)),
            Mod => Ok(Value::Fraction(l.rem(r, line)?)),
            Equal => Ok(Value::Boolean(l == r)),
            NotEqual => Ok(Value::Boolean(l != r)),
            Less => Ok(Value::Boolean(l < r)),
            Greater => Ok(Value::Boolean(l > r)),
            LessEqual => Ok(Value::Boolean(l <= r)),
            GreaterEqual => Ok(Value::Boolean(l >= r)),
            _ => Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to fractions"),
                                               line }),
        }
    }

    /// Evaluates an infix operation on two strings.
    fn eval_string_infix(op: InfixOperator, l: &str, r: &str, line: usize) -> EvalResult<Value> {
        match op {
            InfixOperator::Add => Ok(Value::Str(format!("{l}{r}"))),
            InfixOperator::Equal => Ok(Value::Boolean(l == r)),
            InfixOperator::NotEqual => Ok(Value::Boolean(l != r)),
            _ => Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to strings"),
                                               line }),
        }
    }

    /// Evaluates an infix operation between a string and an integer.
    ///
    /// `*` repeats the string (a negative count yields the empty string) and
    /// `.` indexes a single character, zero-based.
    fn eval_string_integer_infix(op: InfixOperator,
                                 l: &str,
                                 r: i64,
                                 line: usize)
                                 -> EvalResult<Value> {
        match op {
            InfixOperator::Mul => {
                let count = usize::try_from(r).unwrap_or(0);
                // The repeated string must fit in memory before it is built.
                if l.len().checked_mul(count).is_none() {
                    return Err(RuntimeError::Overflow { line });
                }
                Ok(Value::Str(l.repeat(count)))
            },
            InfixOperator::Dot => {
                let length = l.chars().count();
                match usize::try_from(r).ok().filter(|index| *index < length) {
                    Some(index) => Ok(Value::Str(l.chars()
                                                  .nth(index)
                                                  .map(String::from)
                                                  .unwrap_or_default())),
                    None => Err(RuntimeError::IndexOutOfBounds { index: r, length, line }),
                }
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to a string and an integer"),
                                              line })
            },
        }
    }
}

/// Reads an integer-like operand; booleans count as 0 and 1.
fn integer_operand(value: &Value) -> i64 {
    match value {
        Value::Integer(n) => *n,
        Value::Boolean(b) => i64::from(*b),
        _ => unreachable!("caller matched an integer-like value"),
    }
}

/// Narrows a checked integer result, reporting overflow.
fn checked(result: Option<i64>, line: usize) -> EvalResult<Value> {
    result.map(Value::Integer).ok_or(RuntimeError::Overflow { line })
}
