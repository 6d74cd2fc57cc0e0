//! The state-variable rule.

use crate::ast::{Variable, Visibility};
use crate::diagnostics::ParseError;
use crate::parser::dispatcher::Dispatcher;
use solv_core::lang::keywords;
use solv_core::lang::symbols::SymbolId;

/// Parses a state variable declaration: `type [visibility] name;`.
///
/// This rule is self-contained; it never recurses into other rules.
pub struct VariableRule<'a> {
    ctx: &'a mut Dispatcher,
}

impl<'a> VariableRule<'a> {
    pub fn new(ctx: &'a mut Dispatcher) -> Self {
        Self { ctx }
    }

    pub fn parse(self) -> Result<Variable, ParseError> {
        let stream = &mut self.ctx.stream;

        let type_kw = stream.expect_any_keyword()?;

        let mut visibility = None;
        if let Some(kw) = stream.current().and_then(|t| t.keyword_id()) {
            if let Some(vis) = Visibility::from_keyword(kw) {
                visibility = Some(vis);
                stream.advance();
            }
        }

        let name = stream.expect_ident()?;
        stream.expect_symbol(SymbolId::Semicolon)?;

        Ok(Variable {
            type_name: keywords::as_str(type_kw).to_string(),
            name,
            visibility,
        })
    }
}
