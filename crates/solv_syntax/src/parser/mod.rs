//! Recursive-descent parsing over the lexer's token sequence.
//!
//! The parser is organized as a set of grammar rules (one per production) that
//! communicate through a central [`Dispatcher`]. The dispatcher owns the
//! [`TokenStream`] cursor; rules invoke one another by [`RuleKind`], never by type.
//!
//! ## Notes
//! The grammar accepts a single contract per source unit. Trailing tokens after the
//! closing `}` of the contract are rejected.
//!
//! ## Examples
//! ```
//! use solv_syntax::lexer::lex;
//! use solv_syntax::parser::parse;
//!
//! let tokens = lex("contract Wallet { uint balance; }").unwrap();
//! let contract = parse(tokens).unwrap();
//! assert_eq!(contract.name, "Wallet");
//! assert_eq!(contract.members.len(), 1);
//! ```

mod dispatcher;
mod rules;
mod stream;


pub use dispatcher::{Dispatcher, RuleKind, RuleOutput};
pub use stream::TokenStream;

use crate::ast::Contract;
use crate::diagnostics::ParseError;
use crate::lexer::Token;

/// Knobs controlling parser behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject any token that starts no known contract member instead of skipping it.
    ///
    /// The default (lenient) mode skips one token at a time past constructs the
    /// grammar does not cover, such as `event` declarations.
    pub strict_members: bool,
}

/// Parse a token sequence into a [`Contract`] with default options.
pub fn parse(tokens: Vec<Token>) -> Result<Contract, ParseError> {
    parse_with(tokens, ParseOptions::default())
}

/// Parse a token sequence into a [`Contract`].
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; there is no multi-error recovery.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), ?options))]
pub fn parse_with(tokens: Vec<Token>, options: ParseOptions) -> Result<Contract, ParseError> {
    let mut dispatcher = Dispatcher::new(tokens, options);
    let contract = dispatcher.parse_rule(RuleKind::Contract)?.into_contract();
    if dispatcher.stream.current().is_some() {
        return Err(dispatcher.stream.unexpected("end of input"));
    }
    tracing::debug!(contract = %contract.name, members = contract.members.len(), "parsed contract");
    Ok(contract)
}
