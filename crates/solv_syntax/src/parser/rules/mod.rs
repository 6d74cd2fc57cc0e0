//! Grammar rules: one module per production.
//!
//! Each rule owns the syntax for one grammar production and is driven purely by
//! lookahead on the current (and, at most, the next) token. Rules receive the shared
//! [`Dispatcher`](crate::parser::Dispatcher) and recurse into other rules by
//! [`RuleKind`](crate::parser::RuleKind) only.

mod constructor;
mod contract;
mod function;
mod statement;
mod variable;

pub use constructor::ConstructorRule;
pub use contract::ContractRule;
pub use function::FunctionRule;
pub use statement::StatementRule;
pub use variable::VariableRule;

use crate::ast::Variable;
use crate::diagnostics::ParseError;
use crate::parser::stream::TokenStream;
use solv_core::lang::keywords;
use solv_core::lang::symbols::SymbolId;

/// Parse a parenthesized parameter list: `(type identifier, …)`.
///
/// Shared between the function and constructor rules, which accept identical
/// parameter syntax.
pub(crate) fn parameter_list(stream: &mut TokenStream) -> Result<Vec<Variable>, ParseError> {
    let mut parameters = Vec::new();
    stream.expect_symbol(SymbolId::LParen)?;
    while !stream.match_symbol(SymbolId::RParen) {
        if !parameters.is_empty() {
            stream.expect_symbol(SymbolId::Comma)?;
        }
        let type_kw = stream.expect_any_keyword()?;
        let name = stream.expect_ident()?;
        parameters.push(Variable {
            type_name: keywords::as_str(type_kw).to_string(),
            name,
            visibility: None,
        });
    }
    Ok(parameters)
}
