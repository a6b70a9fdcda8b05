/// Errors raised while turning source text into a syntax tree.
///
/// Covers both lexer rejects (characters that form no token) and structural
/// parse failures such as missing braces or misplaced tokens.
pub mod parse_error;
/// Errors raised while executing a syntax tree.
///
/// Covers name resolution, type mismatches, arithmetic failures and the
/// recursion guard. Every variant carries the source line it points at.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
