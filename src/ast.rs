/// An entire parsed script: the list of top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements of the script.
    pub statements: Vec<Statement>,
}

/// Represents a single statement in the language.
///
/// Statements are executed for their effect; most of them still produce a
/// value so that the last statement of a script or block can be observed.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression followed by a terminator, such as `x = 1;`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// The source line the statement starts on.
        line: usize,
    },
    /// A braced group of statements, such as `{ a = 1; b = 2; }`.
    Block {
        /// The statements inside the braces.
        statements: Vec<Statement>,
        /// The source line of the opening brace.
        line:       usize,
    },
    /// A conditional with an optional alternative, such as
    /// `if (x) { ... } else { ... }`.
    If {
        /// The condition deciding which branch runs.
        condition:   Expr,
        /// The statements of the `if` branch.
        consequence: Vec<Statement>,
        /// The statements of the `else` branch, if present.
        alternative: Option<Vec<Statement>>,
        /// The source line of the `if` keyword.
        line:        usize,
    },
    /// A pre-checked loop, such as `while (i < 10) { ... }`.
    While {
        /// The condition checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// The source line of the `while` keyword.
        line:      usize,
    },
    /// A function declaration, such as `fn add(a, b) { return a + b; }`.
    Function(FunctionDecl),
    /// `return` with an optional payload.
    Return {
        /// The returned expression; `None` returns null.
        value: Option<Expr>,
        /// The source line of the `return` keyword.
        line:  usize,
    },
    /// `break`, leaving the innermost loop.
    Break {
        /// The source line of the keyword.
        line: usize,
    },
    /// `continue`, skipping to the next loop iteration.
    Continue {
        /// The source line of the keyword.
        line: usize,
    },
}

/// A user-declared function: its name, parameter names and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The function name.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements of the function body.
    pub body:   Vec<Statement>,
    /// The source line of the `fn` keyword.
    pub line:   usize,
}

/// Represents a single expression node in the syntax tree.
///
/// Every node carries the line it came from so that runtime errors can point
/// back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable reference, such as `x`.
    Identifier {
        /// The referenced name.
        name: String,
        /// The source line of the name.
        line: usize,
    },
    /// An integer literal, such as `42`.
    Integer {
        /// The literal value.
        value: i64,
        /// The source line of the literal.
        line:  usize,
    },
    /// A boolean literal, `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// The source line of the literal.
        line:  usize,
    },
    /// A string literal, such as `"hello"`.
    Str {
        /// The literal text, without the surrounding quotes.
        value: String,
        /// The source line of the literal.
        line:  usize,
    },
    /// A prefix operation, such as `-x` or `!done`.
    Prefix {
        /// The applied operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Expr>,
        /// The source line of the operator.
        line:  usize,
    },
    /// An infix operation, such as `a + b` or `x = 1`.
    Infix {
        /// The applied operator.
        op:    InfixOperator,
        /// The left operand.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
        /// The source line of the operator.
        line:  usize,
    },
    /// A function call, such as `add(1, 2)`.
    Call {
        /// The called function's name.
        name:      String,
        /// The argument expressions, in call order.
        arguments: Vec<Expr>,
        /// The source line of the call.
        line:      usize,
    },
    /// An array literal, such as `[1, 2, 3]`.
    Array {
        /// The element expressions, in source order.
        elements: Vec<Expr>,
        /// The source line of the opening bracket.
        line:     usize,
    },
}

impl Expr {
    /// Names this node kind for use in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Identifier { .. } => "an identifier",
            Self::Integer { .. } => "an integer literal",
            Self::Boolean { .. } => "a boolean literal",
            Self::Str { .. } => "a string literal",
            Self::Prefix { .. } => "a prefix expression",
            Self::Infix { .. } => "an infix expression",
            Self::Call { .. } => "a function call",
            Self::Array { .. } => "an array literal",
        }
    }

    /// Returns the source line this expression starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::Integer { line, .. }
            | Self::Boolean { line, .. }
            | Self::Str { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::Call { line, .. }
            | Self::Array { line, .. } => *line,
        }
    }
}

/// The operators that connect two expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`; always produces a fraction on integers.
    Div,
    /// `//`; integer division truncating toward zero.
    FloorDiv,
    /// `%`
    Mod,
    /// `.`; joins two integers into a fraction, or indexes a string.
    Dot,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `^`; bitwise exclusive or.
    BitXor,
    /// `&`; bitwise and.
    BitAnd,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Assign => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Dot => ".",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::BitXor => "^",
            Self::BitAnd => "&",
        };
        write!(f, "{symbol}")
    }
}

/// The operators that precede a single expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// `+`
    Plus,
    /// `-`; also negates booleans, like `!`.
    Minus,
    /// `!`
    Bang,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
        };
        write!(f, "{symbol}")
    }
}
