//! The contract rule: the top-level grammar production.

use crate::ast::{Contract, Member};
use crate::diagnostics::ParseError;
use crate::parser::dispatcher::{Dispatcher, RuleKind};
use solv_core::lang::keywords::{self, KeywordId};
use solv_core::lang::symbols::SymbolId;

/// Parses `contract Name { members… }`.
///
/// Member dispatch inspects the current keyword: `function` starts a function,
/// `constructor` a constructor, and an elementary type keyword a state variable.
/// A token that starts no known member is skipped (one token, then retry) in the
/// default lenient mode, or rejected outright in strict mode.
pub struct ContractRule<'a> {
    ctx: &'a mut Dispatcher,
}

impl<'a> ContractRule<'a> {
    pub fn new(ctx: &'a mut Dispatcher) -> Self {
        Self { ctx }
    }

    pub fn parse(mut self) -> Result<Contract, ParseError> {
        let name = self.header()?;
        let members = self.members()?;
        Ok(Contract { name, members })
    }

    /// Parse the `contract` keyword, the contract name, and the opening brace.
    fn header(&mut self) -> Result<String, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::Contract)?;
        let name = self.ctx.stream.expect_ident()?;
        self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
        Ok(name)
    }

    /// Parse members until the closing brace; end of input before `}` is an error.
    fn members(&mut self) -> Result<Vec<Member>, ParseError> {
        let mut members = Vec::new();
        loop {
            if self.ctx.stream.current().is_none() {
                return Err(ParseError::UnexpectedEof {
                    expected: "`}` closing the contract body".to_string(),
                });
            }
            if self.ctx.stream.match_symbol(SymbolId::RBrace) {
                break;
            }
            match self.member_start() {
                Some(rule) => members.push(self.ctx.parse_rule(rule)?.into_member()),
                None => self.skip_unrecognized()?,
            }
        }
        Ok(members)
    }

    /// Decide which member rule the current token starts, if any.
    fn member_start(&self) -> Option<RuleKind> {
        let kw = self.ctx.stream.current()?.keyword_id()?;
        if kw == KeywordId::Function {
            Some(RuleKind::Function)
        } else if kw == KeywordId::Constructor {
            Some(RuleKind::Constructor)
        } else if keywords::is_value_type(kw) {
            Some(RuleKind::Variable)
        } else {
            None
        }
    }

    /// Recovery for a token that starts no known member: skip exactly one token and
    /// let the member loop retry. This bounds the damage an unrecognized construct
    /// can do, at the cost of silently swallowing it. Strict mode turns the skip
    /// into a hard error instead.
    fn skip_unrecognized(&mut self) -> Result<(), ParseError> {
        if self.ctx.options.strict_members {
            return Err(self
                .ctx
                .stream
                .unexpected("a contract member (function, state variable, or constructor)"));
        }
        if let Some(token) = self.ctx.stream.advance() {
            tracing::trace!(
                token = %token.describe(),
                line = token.line,
                column = token.column,
                "skipping token that does not start a contract member"
            );
        }
        Ok(())
    }
}
