//! Lexing and parsing for the Solv contract language.
//!
//! The pipeline has two stages: [`lexer::lex`] turns source text into a flat token
//! sequence, and [`parser::parse`] turns that sequence into a [`ast::Contract`].
//! [`parse_contract`] runs both and unifies their error types.
//!
//! Language vocabulary (keywords, operators, symbols) lives in `solv_core`; this
//! crate consumes those registries, it never defines spellings of its own.
//!
//! ## Examples
//! ```
//! let contract = solv_syntax::parse_contract(
//!     "contract Wallet {
//!          uint balance;
//!          function deposit() public payable {
//!              balance += msg.value;
//!          }
//!      }",
//! )
//! .unwrap();
//! assert_eq!(contract.name, "Wallet");
//! assert_eq!(contract.members.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

pub use diagnostics::{LexError, ParseError, SyntaxError};

use crate::ast::Contract;
use crate::parser::ParseOptions;

/// Lex and parse a source unit with default options.
///
/// ## Errors
/// Returns [`SyntaxError::Lex`] if tokenization fails, [`SyntaxError::Parse`] if the
/// token sequence does not form a valid contract.
pub fn parse_contract(source: &str) -> Result<Contract, SyntaxError> {
    parse_contract_with(source, ParseOptions::default())
}

/// Lex and parse a source unit.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_contract_with(source: &str, options: ParseOptions) -> Result<Contract, SyntaxError> {
    let tokens = lexer::lex(source)?;
    let contract = parser::parse_with(tokens, options)?;
    Ok(contract)
}
