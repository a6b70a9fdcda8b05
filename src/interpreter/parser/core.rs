use std::iter::Peekable;

use crate::{ast::{Expr, InfixOperator, PrefixOperator},
            error::ParseError,
            interpreter::lexer::Token};

/// The result type of every parse function.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression, starting at the loosest precedence level.
///
/// # Parameters
/// - `tokens`: The token stream, peekable, paired with line numbers.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// Any `ParseError` raised while descending the precedence ladder.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_assignment(tokens)
}

/// Parses `=`; right-associative so `a = b = 1` assigns through.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_equality(tokens)?;

    if let Some((Token::Equals, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let right = parse_assignment(tokens)?;
        return Ok(Expr::Infix { op: InfixOperator::Assign,
                                left: Box::new(left),
                                right: Box::new(right),
                                line });
    }

    Ok(left)
}

/// Parses `==` and `!=`.
fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, parse_comparison, |token| {
        match token {
            Token::EqualEqual => Some(InfixOperator::Equal),
            Token::BangEqual => Some(InfixOperator::NotEqual),
            _ => None,
        }
    })
}

/// Parses `<`, `>`, `<=` and `>=`.
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, parse_bitwise, |token| {
        match token {
            Token::Less => Some(InfixOperator::Less),
            Token::Greater => Some(InfixOperator::Greater),
            Token::LessEqual => Some(InfixOperator::LessEqual),
            Token::GreaterEqual => Some(InfixOperator::GreaterEqual),
            _ => None,
        }
    })
}

/// Parses the bitwise operators `^` and `&`.
fn parse_bitwise<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, parse_additive, |token| {
        match token {
            Token::Caret => Some(InfixOperator::BitXor),
            Token::Ampersand => Some(InfixOperator::BitAnd),
            _ => None,
        }
    })
}

/// Parses `+` and `-`.
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, parse_multiplicative, |token| {
        match token {
            Token::Plus => Some(InfixOperator::Add),
            Token::Minus => Some(InfixOperator::Sub),
            _ => None,
        }
    })
}

/// Parses `*`, `/`, `//` and `%`.
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, parse_unary, |token| {
        match token {
            Token::Star => Some(InfixOperator::Mul),
            Token::Slash => Some(InfixOperator::Div),
            Token::SlashSlash => Some(InfixOperator::FloorDiv),
            Token::Percent => Some(InfixOperator::Mod),
            _ => None,
        }
    })
}

/// Parses the prefix operators `+`, `-` and `!`.
///
/// Prefix binds looser than `.`, so `-1.5` negates the whole fraction
/// instead of attaching the sign to the integer part alone.
fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((token, line)) = tokens.peek() {
        let op = match token {
            Token::Plus => Some(PrefixOperator::Plus),
            Token::Minus => Some(PrefixOperator::Minus),
            Token::Bang => Some(PrefixOperator::Bang),
            _ => None,
        };
        if let Some(op) = op {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens)?;
            return Ok(Expr::Prefix { op,
                                     right: Box::new(right),
                                     line });
        }
    }

    parse_dot(tokens)
}

/// Parses the `.` operator; left-associative and the tightest infix level.
fn parse_dot<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, parse_primary, |token| {
        match token {
            Token::Dot => Some(InfixOperator::Dot),
            _ => None,
        }
    })
}

/// Parses literals, identifiers, calls, array literals and grouping.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(Expr::Integer { value: *value, line: *line }),
        Some((Token::Bool(value), line)) => Ok(Expr::Boolean { value: *value, line: *line }),
        Some((Token::Str(value), line)) => Ok(Expr::Str { value: value.clone(),
                                                          line:  *line, }),
        Some((Token::Identifier(name), line)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_call_arguments(tokens, *line)?;
                Ok(Expr::Call { name: name.clone(),
                                arguments,
                                line: *line })
            } else {
                Ok(Expr::Identifier { name: name.clone(),
                                      line: *line, })
            }
        },
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'", *line)?;
            Ok(expr)
        },
        Some((Token::LBracket, line)) => {
            let elements = parse_array_elements(tokens, *line)?;
            Ok(Expr::Array { elements,
                             line: *line })
        },
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses one left-associative precedence level.
///
/// Repeatedly folds `left <op> right` while the peeked token maps to one of
/// this level's operators; everything else falls through to `next_level`.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           next_level: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           operator_for: fn(&Token) -> Option<InfixOperator>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = next_level(tokens)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((token, line)) => match operator_for(token) {
                Some(op) => (op, *line),
                None => break,
            },
            None => break,
        };
        tokens.next();
        let right = next_level(tokens)?;
        left = Expr::Infix { op,
                             left: Box::new(left),
                             right: Box::new(right),
                             line };
    }

    Ok(left)
}

/// Parses a comma-separated argument list up to the closing parenthesis.
///
/// The opening parenthesis has already been consumed; `line` is its line,
/// used when the input runs out before the list closes.
fn parse_call_arguments<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut arguments = Vec::new();

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => return Ok(arguments),
            Some((token, line)) => {
                return Err(ParseError::ExpectedToken { expected: "',' or ')'".to_string(),
                                                       found:    token.to_string(),
                                                       line:     *line, })
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
}

/// Parses a comma-separated element list up to the closing bracket.
fn parse_array_elements<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut elements = Vec::new();

    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(elements);
    }

    loop {
        elements.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBracket, _)) => return Ok(elements),
            Some((token, line)) => {
                return Err(ParseError::ExpectedToken { expected: "',' or ']'".to_string(),
                                                       found:    token.to_string(),
                                                       line:     *line, })
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: The token stream.
/// - `expected`: The token that must come next.
/// - `description`: How to name the expected token in an error.
/// - `line`: The line of the surrounding construct, used when the input
///   runs out.
///
/// # Returns
/// The line the consumed token was on.
///
/// # Errors
/// `ExpectedToken` on a mismatch, `UnexpectedEndOfInput` at the end.
pub(crate) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                  expected: &Token,
                                  description: &str,
                                  line: usize)
                                  -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((token, line)) => Err(ParseError::ExpectedToken { expected: description.to_string(),
                                                               found:    token.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
