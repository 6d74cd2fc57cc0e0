//! The function rule.

use crate::ast::{Function, Variable, Visibility};
use crate::diagnostics::ParseError;
use crate::parser::dispatcher::{Dispatcher, RuleKind};
use crate::parser::rules::parameter_list;
use solv_core::lang::keywords::{self, KeywordId};
use solv_core::lang::symbols::SymbolId;

/// Parses `function name(params) modifiers… [returns (types)] { body }`.
///
/// Modifiers are any visibility keyword and/or `payable`, in either order. Duplicates
/// are accepted silently; for visibility, the last spelling wins. Return slots are
/// unnamed: each is a type keyword only.
pub struct FunctionRule<'a> {
    ctx: &'a mut Dispatcher,
}

impl<'a> FunctionRule<'a> {
    pub fn new(ctx: &'a mut Dispatcher) -> Self {
        Self { ctx }
    }

    pub fn parse(mut self) -> Result<Function, ParseError> {
        let name = self.header()?;
        let parameters = parameter_list(&mut self.ctx.stream)?;
        let (visibility, is_payable) = self.modifiers();
        let returns = self.returns()?;

        self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
        let body = self.ctx.parse_rule(RuleKind::Statements)?.into_statements();
        self.ctx.stream.expect_symbol(SymbolId::RBrace)?;

        Ok(Function {
            name,
            visibility,
            is_payable,
            parameters,
            returns,
            body,
        })
    }

    /// Parse the `function` keyword and the function name.
    fn header(&mut self) -> Result<String, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::Function)?;
        self.ctx.stream.expect_ident()
    }

    /// Consume visibility/`payable` modifier keywords until something else appears.
    fn modifiers(&mut self) -> (Option<Visibility>, bool) {
        let mut visibility = None;
        let mut is_payable = false;
        while let Some(kw) = self.ctx.stream.current().and_then(|t| t.keyword_id()) {
            if let Some(vis) = Visibility::from_keyword(kw) {
                visibility = Some(vis);
            } else if kw == KeywordId::Payable {
                is_payable = true;
            } else {
                break;
            }
            self.ctx.stream.advance();
        }
        (visibility, is_payable)
    }

    /// Parse the optional `returns (type, …)` clause into unnamed return slots.
    fn returns(&mut self) -> Result<Vec<Variable>, ParseError> {
        if !self.ctx.stream.match_keyword(KeywordId::Returns) {
            return Ok(Vec::new());
        }
        self.ctx.stream.expect_symbol(SymbolId::LParen)?;
        let mut returns = Vec::new();
        while !self.ctx.stream.match_symbol(SymbolId::RParen) {
            if !returns.is_empty() {
                self.ctx.stream.expect_symbol(SymbolId::Comma)?;
            }
            let type_kw = self.ctx.stream.expect_any_keyword()?;
            returns.push(Variable {
                type_name: keywords::as_str(type_kw).to_string(),
                name: String::new(),
                visibility: None,
            });
        }
        Ok(returns)
    }
}
