//! The constructor rule.

use crate::ast::{Constructor, Visibility};
use crate::diagnostics::ParseError;
use crate::parser::dispatcher::{Dispatcher, RuleKind};
use crate::parser::rules::parameter_list;
use solv_core::lang::keywords::KeywordId;
use solv_core::lang::symbols::SymbolId;

/// Parses `constructor(params) [visibility] { body }`. No name, no return types.
pub struct ConstructorRule<'a> {
    ctx: &'a mut Dispatcher,
}

impl<'a> ConstructorRule<'a> {
    pub fn new(ctx: &'a mut Dispatcher) -> Self {
        Self { ctx }
    }

    pub fn parse(mut self) -> Result<Constructor, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::Constructor)?;
        let parameters = parameter_list(&mut self.ctx.stream)?;
        let visibility = self.visibility();

        self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
        let body = self.ctx.parse_rule(RuleKind::Statements)?.into_statements();
        self.ctx.stream.expect_symbol(SymbolId::RBrace)?;

        Ok(Constructor {
            parameters,
            visibility,
            body,
        })
    }

    /// Consume a single optional visibility keyword.
    fn visibility(&mut self) -> Option<Visibility> {
        let kw = self.ctx.stream.current().and_then(|t| t.keyword_id())?;
        let vis = Visibility::from_keyword(kw)?;
        self.ctx.stream.advance();
        Some(vis)
    }
}
