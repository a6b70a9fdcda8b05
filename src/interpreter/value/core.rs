use crate::interpreter::value::fraction::Fraction;

/// Represents any value a fracta expression can produce.
///
/// Besides the data-carrying variants there are three control-flow signals
/// (`Break`, `Continue` and `Return`) that blocks pass upward until a loop or
/// a function call consumes them, and an `Identifier` variant that only
/// appears as the resolved left side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A truth value.
    Boolean(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// An exact rational number.
    Fraction(Fraction),
    /// An owned piece of text.
    Str(String),
    /// An assignment target; never the result of a full evaluation.
    Identifier(String),
    /// The absence of a value.
    Null,
    /// Signal: leave the innermost loop.
    Break,
    /// Signal: skip to the next loop iteration.
    Continue,
    /// Signal: leave the current function with a payload.
    Return(Box<Value>),
}

impl Value {
    /// Decides whether this value counts as true in a condition.
    ///
    /// Booleans use their own value, numbers are true when nonzero, strings
    /// are true when non-empty and everything else is false.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Fraction(f) => f.numerator() != 0,
            Self::Str(s) => !s.is_empty(),
            _ => false,
        }
    }

    /// Names the kind of this value for use in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Fraction(_) => "fraction",
            Self::Str(_) => "string",
            Self::Identifier(_) => "identifier",
            Self::Null => "null",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Return(_) => "return",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Fraction(fraction) => write!(f, "{fraction}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Null | Self::Break | Self::Continue | Self::Return(_) => Ok(()),
        }
    }
}
