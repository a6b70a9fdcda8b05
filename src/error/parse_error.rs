#[derive(Debug)]
/// Represents all errors that can occur during lexing and parsing.
pub enum ParseError {
    /// The lexer or parser met a token it cannot use at this position.
    UnexpectedToken {
        /// The offending token text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The source ended in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the input ran out.
        line: usize,
    },
    /// A name was required, for example after `fn`.
    ExpectedIdentifier {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// A description of the expected token.
        expected: String,
        /// The token text that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token '{token}'.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::ExpectedIdentifier { line } => {
                write!(f, "Error on line {line}: Expected an identifier.")
            },
            Self::ExpectedToken { expected, found, line } => write!(f,
                                                                    "Error on line {line}: Expected {expected}, but found '{found}' instead."),
        }
    }
}

impl std::error::Error for ParseError {}
