use std::iter::Peekable;

use crate::{ast::{FunctionDecl, Program, Statement},
            error::ParseError,
            interpreter::{lexer::Token,
                          parser::core::{expect_token, parse_expression, ParseResult}}};

/// Parses a whole token stream into a program.
///
/// # Parameters
/// - `tokens`: All tokens of the script, paired with line numbers.
///
/// # Returns
/// The parsed program.
///
/// # Errors
/// The first `ParseError` met while parsing statements.
///
/// # Example
/// ```
/// use fracta::interpreter::{lexer::scan_tokens, parser::statement::parse_program};
///
/// let scanned = scan_tokens("x = 1; print(x);").unwrap();
/// let program = parse_program(&scanned.tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(Program { statements })
}

/// Parses a single statement, deciding its kind from the first token.
///
/// # Errors
/// Any `ParseError` raised by the matched statement form.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::If, line)) => {
            let line = *line;
            parse_if(tokens, line)
        },
        Some((Token::While, line)) => {
            let line = *line;
            parse_while(tokens, line)
        },
        Some((Token::Fn, line)) => {
            let line = *line;
            parse_function(tokens, line)
        },
        Some((Token::Return, line)) => {
            let line = *line;
            parse_return(tokens, line)
        },
        Some((Token::Break, line)) => {
            let line = *line;
            tokens.next();
            terminate_statement(tokens)?;
            Ok(Statement::Break { line })
        },
        Some((Token::Continue, line)) => {
            let line = *line;
            tokens.next();
            terminate_statement(tokens)?;
            Ok(Statement::Continue { line })
        },
        Some((Token::LBrace, line)) => {
            let line = *line;
            let statements = parse_block(tokens, line)?;
            Ok(Statement::Block { statements, line })
        },
        Some((_, line)) => {
            let line = *line;
            let expr = parse_expression(tokens)?;
            terminate_statement(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses `if (cond) { ... }` with optional `else` or `else if` chains.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let condition = parse_expression(tokens)?;
    let consequence = parse_block(tokens, line)?;

    let alternative = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        if let Some((Token::If, else_line)) = tokens.peek() {
            let else_line = *else_line;
            Some(vec![parse_if(tokens, else_line)?])
        } else {
            Some(parse_block(tokens, line)?)
        }
    } else {
        None
    };

    Ok(Statement::If { condition,
                       consequence,
                       alternative,
                       line })
}

/// Parses `while (cond) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses `fn name(a, b) { ... }`.
fn parse_function<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();

    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((_, line)) => return Err(ParseError::ExpectedIdentifier { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    expect_token(tokens, &Token::LParen, "'('", line)?;

    let mut params = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
    } else {
        loop {
            match tokens.next() {
                Some((Token::Identifier(param), _)) => params.push(param.clone()),
                Some((_, line)) => return Err(ParseError::ExpectedIdentifier { line: *line }),
                None => return Err(ParseError::UnexpectedEndOfInput { line }),
            }
            match tokens.next() {
                Some((Token::Comma, _)) => {},
                Some((Token::RParen, _)) => break,
                Some((token, line)) => {
                    return Err(ParseError::ExpectedToken { expected: "',' or ')'".to_string(),
                                                           found:    token.to_string(),
                                                           line:     *line, })
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line }),
            }
        }
    }

    let body = parse_block(tokens, line)?;

    Ok(Statement::Function(FunctionDecl { name,
                                          params,
                                          body,
                                          line }))
}

/// Parses `return;`, `return expr;` or a bare `return` before `}`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();

    let value = match tokens.peek() {
        Some((Token::Semicolon | Token::RBrace, _)) | None => None,
        _ => Some(parse_expression(tokens)?),
    };
    terminate_statement(tokens)?;

    Ok(Statement::Return { value, line })
}

/// Parses a braced statement list; `line` is the line of the construct that
/// owns the block, used when the input runs out before `}`.
fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::LBrace, "'{'", line)?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
            _ => statements.push(parse_statement(tokens)?),
        }
    }
}

/// Closes a statement: consumes one or more `;`, or accepts a following `}`
/// or the end of input without consuming anything.
fn terminate_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            while let Some((Token::Semicolon, _)) = tokens.peek() {
                tokens.next();
            }
            Ok(())
        },
        Some((Token::RBrace, _)) | None => Ok(()),
        Some((token, line)) => Err(ParseError::ExpectedToken { expected: "';'".to_string(),
                                                               found:    token.to_string(),
                                                               line:     *line, }),
    }
}
