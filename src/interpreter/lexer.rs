use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `fn`
    #[token("fn")]
    Fn,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `.`
    #[token(".")]
    Dot,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(", |lex| lex.extras.balance += 1)]
    LParen,
    /// `)`
    #[token(")", |lex| lex.extras.balance -= 1)]
    RParen,
    /// `{`
    #[token("{", |lex| lex.extras.balance += 1)]
    LBrace,
    /// `}`
    #[token("}", |lex| lex.extras.balance -= 1)]
    RBrace,
    /// `[`
    #[token("[", |lex| lex.extras.balance += 1)]
    LBracket,
    /// `]`
    #[token("]", |lex| lex.extras.balance -= 1)]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Line breaks; counted for diagnostics, never emitted.
    #[token("\n", newline)]
    NewLine,
    /// Tabs, feeds and other blanks.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
            Self::Return => write!(f, "return"),
            Self::Fn => write!(f, "fn"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Comment => write!(f, "#"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::SlashSlash => write!(f, "//"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Dot => write!(f, "."),
            Self::Caret => write!(f, "^"),
            Self::Ampersand => write!(f, "&"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Equals => write!(f, "="),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting, and a running bracket
/// balance that the `eval` builtin uses to decide whether a fragment of
/// source is complete.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:    usize,
    /// Open brackets minus closed brackets, over `()`, `[]` and `{}`.
    pub balance: i64,
}

/// The outcome of tokenizing a piece of source text.
pub struct ScannedSource {
    /// The tokens, each paired with the line it appeared on.
    pub tokens:  Vec<(Token, usize)>,
    /// The final bracket balance; zero when every bracket was closed.
    pub balance: i64,
}

impl ScannedSource {
    /// Decides whether the scanned source forms a complete script: every
    /// bracket closed and a statement terminator (`;` or `}`) at the end.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::lexer::scan_tokens;
    ///
    /// assert!(scan_tokens("x = 1;").unwrap().is_complete());
    /// assert!(!scan_tokens("x = 1").unwrap().is_complete());
    /// assert!(!scan_tokens("while (x) { x;").unwrap().is_complete());
    /// ```
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.balance == 0
        && matches!(self.tokens.last(), Some((Token::Semicolon | Token::RBrace, _)))
    }
}

/// Tokenizes a full source string.
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// A `ScannedSource` with every token paired with its line number.
///
/// # Errors
/// `ParseError::UnexpectedToken` if the source contains a character sequence
/// that forms no token.
pub fn scan_tokens(source: &str) -> Result<ScannedSource, ParseError> {
    match scan_fragment(source) {
        (scanned, None) => Ok(scanned),
        (_, Some(error)) => Err(error),
    }
}

/// Tokenizes a source fragment, tolerating unlexable character sequences.
///
/// The recognized tokens and the final bracket balance are collected even
/// when parts of the input form no token; the first lex error, if any, is
/// returned alongside them. The `eval` builtin needs this split: it judges
/// completeness over the recognized tokens before deciding whether a lex
/// error is worth reporting.
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// The scan over the recognized tokens, and the first lex error if the
/// input contained one.
#[must_use]
pub fn scan_fragment(source: &str) -> (ScannedSource, Option<ParseError>) {
    let mut tokens = Vec::new();
    let mut first_error = None;
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1, balance: 0 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => {
                if first_error.is_none() {
                    first_error = Some(ParseError::UnexpectedToken { token: lexer.slice()
                                                                                 .to_string(),
                                                                     line:  lexer.extras.line, });
                }
            },
        }
    }

    (ScannedSource { tokens,
                     balance: lexer.extras.balance },
     first_error)
}

/// Counts a line break and skips it.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    logos::Skip
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes off a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
