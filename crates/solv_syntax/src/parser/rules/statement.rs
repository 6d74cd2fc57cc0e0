//! The statement rule: a state machine over the token stream.
//!
//! Parses a block of statements until a `}` is observed; nested blocks (if/while/for
//! bodies) re-enter the same loop. Dispatch is first-match-wins on the current token,
//! with one two-token lookahead: a leading identifier is an assignment only when the
//! *next* token is an operator, otherwise it falls through to a generic
//! expression-statement. The cursor never moves backwards.
//!
//! The expression sub-grammar is intentionally restricted: a dotted name, optionally
//! called with comma-separated arguments. Operator tokens are only consumed on the
//! assignment path, so conditions like `x > 0` do not parse; `require(x)` does.

use crate::ast::{BuiltinKind, Expr, Statement};
use crate::diagnostics::ParseError;
use crate::lexer::TokenKind;
use crate::parser::dispatcher::Dispatcher;
use solv_core::lang::keywords::{self, KeywordId};
use solv_core::lang::symbols::SymbolId;

/// Parses statement blocks and the restricted expression sub-grammar.
pub struct StatementRule<'a> {
    ctx: &'a mut Dispatcher,
}

impl<'a> StatementRule<'a> {
    pub fn new(ctx: &'a mut Dispatcher) -> Self {
        Self { ctx }
    }

    /// Parse statements until the enclosing `}`. The brace itself is left for the
    /// caller to consume.
    pub fn parse(mut self) -> Result<Vec<Statement>, ParseError> {
        self.block()
    }

    fn block(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();
        loop {
            match self.ctx.stream.current() {
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "`}` closing the block".to_string(),
                    });
                }
                Some(token) if token.is_symbol(SymbolId::RBrace) => break,
                Some(_) => {}
            }
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    // ========================================================================
    // Statement dispatch
    // ========================================================================

    fn statement(&mut self) -> Result<Statement, ParseError> {
        if self.ctx.stream.check_keyword(KeywordId::Return) {
            return self.return_stmt();
        }
        if self.at_assignment() {
            return self.assignment();
        }
        if self.ctx.stream.check_keyword(KeywordId::Require) {
            return self.require_stmt();
        }
        if self.ctx.stream.check_keyword(KeywordId::If) {
            return self.if_stmt();
        }
        if self.ctx.stream.check_keyword(KeywordId::Revert) {
            return self.builtin_stmt(KeywordId::Revert, BuiltinKind::Revert);
        }
        if self.ctx.stream.check_keyword(KeywordId::Assert) {
            return self.builtin_stmt(KeywordId::Assert, BuiltinKind::Assert);
        }
        if self.ctx.stream.check_keyword(KeywordId::Emit) {
            return self.emit_stmt();
        }
        if self.ctx.stream.check_keyword(KeywordId::While) {
            return self.while_stmt();
        }
        if self.ctx.stream.check_keyword(KeywordId::For) {
            return self.for_stmt();
        }
        if self.ctx.stream.match_keyword(KeywordId::Break) {
            self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
            return Ok(Statement::Break);
        }
        if self.ctx.stream.match_keyword(KeywordId::Continue) {
            self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
            return Ok(Statement::Continue);
        }
        self.expression_stmt()
    }

    /// An identifier opens an assignment only when the token after it is an operator.
    /// Deciding with two-token lookahead keeps the cursor monotonic: no token is ever
    /// consumed and handed back.
    fn at_assignment(&self) -> bool {
        self.ctx.stream.check_ident()
            && matches!(
                self.ctx.stream.peek(1).map(|t| &t.kind),
                Some(TokenKind::Operator(_))
            )
    }

    // ========================================================================
    // Statement forms
    // ========================================================================

    /// `return;` or `return expr;`
    fn return_stmt(&mut self) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::Return)?;
        if self.ctx.stream.match_symbol(SymbolId::Semicolon) {
            return Ok(Statement::Return(None));
        }
        let value = self.expression()?;
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
        Ok(Statement::Return(Some(value)))
    }

    /// `name op expr;`
    fn assignment(&mut self) -> Result<Statement, ParseError> {
        let left = self.ctx.stream.expect_ident()?;
        let operator = self.ctx.stream.expect_operator()?;
        let right = self.expression()?;
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
        Ok(Statement::Assignment {
            left,
            operator,
            right,
        })
    }

    /// `require(args);`, represented as an expression-statement wrapping a call.
    fn require_stmt(&mut self) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::Require)?;
        let arguments = self.paren_arguments()?;
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
        Ok(Statement::Expression(Expr::Call {
            function: keywords::as_str(KeywordId::Require).to_string(),
            arguments,
        }))
    }

    /// `revert(args);` and `assert(args);` produce dedicated builtin statements.
    fn builtin_stmt(&mut self, kw: KeywordId, kind: BuiltinKind) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(kw)?;
        let arguments = self.paren_arguments()?;
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
        Ok(Statement::Builtin { kind, arguments })
    }

    /// `if (cond) { … } [else { … }]`
    fn if_stmt(&mut self) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::If)?;
        self.ctx.stream.expect_symbol(SymbolId::LParen)?;
        let condition = self.expression()?;
        self.ctx.stream.expect_symbol(SymbolId::RParen)?;

        self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
        let then_block = self.block()?;
        self.ctx.stream.expect_symbol(SymbolId::RBrace)?;

        let else_block = if self.ctx.stream.match_keyword(KeywordId::Else) {
            self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
            let block = self.block()?;
            self.ctx.stream.expect_symbol(SymbolId::RBrace)?;
            Some(block)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_block,
            else_block,
        })
    }

    /// `emit Name(args);`
    fn emit_stmt(&mut self) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::Emit)?;
        let event = self.ctx.stream.expect_ident()?;
        let arguments = self.paren_arguments()?;
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
        Ok(Statement::Emit { event, arguments })
    }

    /// `while (cond) { … }`
    fn while_stmt(&mut self) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::While)?;
        self.ctx.stream.expect_symbol(SymbolId::LParen)?;
        let condition = self.expression()?;
        self.ctx.stream.expect_symbol(SymbolId::RParen)?;

        self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
        let body = self.block()?;
        self.ctx.stream.expect_symbol(SymbolId::RBrace)?;

        Ok(Statement::While { condition, body })
    }

    /// `for (init?; cond?; incr?) { … }` where each clause is independently optional,
    /// detected by looking for the `;` or `)` that would follow it.
    fn for_stmt(&mut self) -> Result<Statement, ParseError> {
        self.ctx.stream.expect_keyword(KeywordId::For)?;
        self.ctx.stream.expect_symbol(SymbolId::LParen)?;

        // The initializer is a full statement and consumes its own `;`.
        let init = if self.ctx.stream.match_symbol(SymbolId::Semicolon) {
            None
        } else {
            Some(Box::new(self.statement()?))
        };

        let condition = if self.ctx.stream.check_symbol(SymbolId::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;

        let increment = if self.ctx.stream.check_symbol(SymbolId::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.ctx.stream.expect_symbol(SymbolId::RParen)?;

        self.ctx.stream.expect_symbol(SymbolId::LBrace)?;
        let body = self.block()?;
        self.ctx.stream.expect_symbol(SymbolId::RBrace)?;

        Ok(Statement::For {
            init,
            condition,
            increment,
            body,
        })
    }

    /// Fallback: a bare expression terminated by `;`.
    fn expression_stmt(&mut self) -> Result<Statement, ParseError> {
        let expr = self.expression()?;
        self.ctx.stream.expect_symbol(SymbolId::Semicolon)?;
        Ok(Statement::Expression(expr))
    }

    // ========================================================================
    // Expression sub-grammar
    // ========================================================================

    /// One identifier-or-keyword token, zero or more `.`-qualified segments, and an
    /// optional parenthesized argument list.
    fn expression(&mut self) -> Result<Expr, ParseError> {
        let first = match self.ctx.stream.current() {
            None => {
                return Err(ParseError::UnexpectedEof {
                    expected: "an expression".to_string(),
                });
            }
            Some(token) => match &token.kind {
                TokenKind::Ident(name) => name.clone(),
                TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
                _ => {
                    return Err(ParseError::InvalidExpressionStart {
                        found: token.describe(),
                        line: token.line,
                        column: token.column,
                    });
                }
            },
        };
        self.ctx.stream.advance();

        let mut parts = vec![first];
        while self.ctx.stream.match_symbol(SymbolId::Dot) {
            parts.push(self.name_after_dot()?);
        }
        let full_name = parts.join(".");

        if !self.ctx.stream.match_symbol(SymbolId::LParen) {
            return Ok(Expr::Name(full_name));
        }
        let arguments = self.argument_list()?;
        Ok(Expr::Call {
            function: full_name,
            arguments,
        })
    }

    fn name_after_dot(&mut self) -> Result<String, ParseError> {
        let segment = match self.ctx.stream.current() {
            None => {
                return Err(ParseError::UnexpectedEof {
                    expected: "an identifier or keyword after `.`".to_string(),
                });
            }
            Some(token) => match &token.kind {
                TokenKind::Ident(name) => name.clone(),
                TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
                _ => {
                    return Err(ParseError::ExpectedNameAfterDot {
                        line: token.line,
                        column: token.column,
                    });
                }
            },
        };
        self.ctx.stream.advance();
        Ok(segment)
    }

    /// `(args)` where the opening parenthesis has not been consumed yet.
    fn paren_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.ctx.stream.expect_symbol(SymbolId::LParen)?;
        self.argument_list()
    }

    /// Comma-separated expressions up to the closing `)`; the opening parenthesis
    /// has already been consumed.
    fn argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();
        loop {
            if self.ctx.stream.current().is_none() {
                return Err(ParseError::UnexpectedEof {
                    expected: "`)` closing the argument list".to_string(),
                });
            }
            if self.ctx.stream.match_symbol(SymbolId::RParen) {
                break;
            }
            if !arguments.is_empty() {
                self.ctx.stream.expect_symbol(SymbolId::Comma)?;
            }
            arguments.push(self.expression()?);
        }
        Ok(arguments)
    }
}
