//! Diagnostics for the lexing and parsing pipeline.
//!
//! Two error kinds exist: [`LexError`] for character-level failures and [`ParseError`]
//! for grammar-level failures. Both are terminal for the call that produced them; the
//! only designed recovery is the contract rule's single-token skip for unrecognized
//! members, which happens before an error is ever constructed.
//!
//! ## Notes
//! - Every variant carries the source position (1-based line/column) where known.
//! - The library performs no logging or retry itself; callers surface the error.

use miette::Diagnostic;
use thiserror::Error;

/// Character-level lexing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unexpected character '{ch}' at line {line}, column {column}")]
    #[diagnostic(code(solv::lexer::unexpected_char))]
    UnexpectedChar { ch: char, line: u32, column: u32 },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    #[diagnostic(
        code(solv::lexer::unterminated_string),
        help("close the literal with the same quote character it was opened with")
    )]
    UnterminatedString { line: u32, column: u32 },

    #[error("unterminated block comment starting at line {line}, column {column}")]
    #[diagnostic(code(solv::lexer::unterminated_comment), help("close the comment with `*/`"))]
    UnterminatedComment { line: u32, column: u32 },
}

/// Grammar-level parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at line {line}, column {column}")]
    #[diagnostic(code(solv::parser::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(code(solv::parser::unexpected_eof))]
    UnexpectedEof { expected: String },

    #[error("{found} cannot start an expression (line {line}, column {column})")]
    #[diagnostic(
        code(solv::parser::invalid_expression_start),
        help("expressions are identifiers or dotted names, optionally called with arguments")
    )]
    InvalidExpressionStart { found: String, line: u32, column: u32 },

    #[error("expected an identifier or keyword after `.` at line {line}, column {column}")]
    #[diagnostic(code(solv::parser::expected_name_after_dot))]
    ExpectedNameAfterDot { line: u32, column: u32 },
}

/// Either kind of syntax failure, as returned by the composed source-to-AST entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}
