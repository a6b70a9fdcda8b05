#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in any visible scope.
    UnknownIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is neither user-declared nor built in.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// How many arguments the function takes.
        expected: usize,
        /// How many arguments were supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division (or remainder) by zero, or a fraction with a zero
    /// denominator.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to index a string outside its bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the indexed string.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The left side of an assignment was not a plain name.
    NotAnIdentifier {
        /// A description of what was found instead.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Evaluation nested deeper than the recursion limit allows.
    RecursionLimitExceeded {
        /// The source line where the limit was hit.
        line: usize,
    },
    /// A complete `eval` fragment failed to lex or parse.
    NestedEvalFailed {
        /// The rendered parse error.
        details: String,
        /// The source line of the `eval` call.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, line } => {
                write!(f, "Error on line {line}: Identifier '{name}' not found.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name, expected, found, line } => write!(f,
                                                                                  "Error on line {line}: Function '{name}' takes {expected} argument(s), but {found} were supplied."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                     "Error on line {line}: Index {index} is out of bounds for a string of length {length}."),
            Self::NotAnIdentifier { details, line } => write!(f,
                                                              "Error on line {line}: Cannot assign to {details}; not an identifier."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::RecursionLimitExceeded { line } => {
                write!(f, "Error on line {line}: Recursion limit exceeded.")
            },
            Self::NestedEvalFailed { details, line } => {
                write!(f, "Error on line {line}: eval failed: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
