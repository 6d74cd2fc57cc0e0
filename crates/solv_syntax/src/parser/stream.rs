//! Cursor-based access to the lexer's output.
//!
//! [`TokenStream`] wraps the flat token sequence and gives grammar rules peekable,
//! consume-on-match access without letting them touch the underlying buffer. The
//! token sequence is owned and immutable; the integer cursor is the only mutable
//! state, and it only ever moves forward.

use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use solv_core::lang::keywords::{self, KeywordId};
use solv_core::lang::operators::OperatorId;
use solv_core::lang::symbols::{self, SymbolId};

/// A forward-only cursor over an immutable token sequence.
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Wrap a token sequence produced by the lexer.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Return the token at `offset` positions past the cursor, or `None` if that
    /// would run off the end. Never panics.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.cursor + offset)
    }

    /// Shortcut for `self.peek(0)`.
    pub fn current(&self) -> Option<&Token> {
        self.peek(0)
    }

    /// Return the most recently consumed token, or `None` before any consumption.
    pub fn last(&self) -> Option<&Token> {
        if self.cursor > 0 {
            self.tokens.get(self.cursor - 1)
        } else {
            None
        }
    }

    /// Return `true` if the current token is the given keyword.
    pub fn check_keyword(&self, id: KeywordId) -> bool {
        self.current().is_some_and(|t| t.is_keyword(id))
    }

    /// Return `true` if the current token is the given symbol.
    pub fn check_symbol(&self, id: SymbolId) -> bool {
        self.current().is_some_and(|t| t.is_symbol(id))
    }

    /// Return `true` if the current token is an identifier.
    pub fn check_ident(&self) -> bool {
        matches!(self.current().map(|t| &t.kind), Some(TokenKind::Ident(_)))
    }

    // ========================================================================
    // Consumption
    // ========================================================================

    /// Move the cursor forward and return the consumed token.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
            self.tokens.get(self.cursor - 1)
        } else {
            None
        }
    }

    /// If the current token is the given keyword, consume it and return `true`.
    pub fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// If the current token is the given symbol, consume it and return `true`.
    pub fn match_symbol(&mut self, id: SymbolId) -> bool {
        if self.check_symbol(id) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Like [`match_keyword`](Self::match_keyword), but fails with a [`ParseError`]
    /// describing the expected vs. actual token when no match.
    pub fn expect_keyword(&mut self, id: KeywordId) -> Result<(), ParseError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("keyword `{}`", keywords::as_str(id))))
        }
    }

    /// Like [`match_symbol`](Self::match_symbol), but fails when no match.
    pub fn expect_symbol(&mut self, id: SymbolId) -> Result<(), ParseError> {
        if self.match_symbol(id) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{}`", symbols::as_char(id))))
        }
    }

    /// Consume an identifier and return its spelling, or fail.
    pub fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.current().map(|t| &t.kind) {
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                self.cursor += 1;
                Ok(name)
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    /// Consume any reserved word and return its id, or fail.
    ///
    /// Used for type slots, where every keyword spelling is accepted and validated
    /// no further (the grammar performs no type checking).
    pub fn expect_any_keyword(&mut self) -> Result<KeywordId, ParseError> {
        match self.current().map(|t| &t.kind) {
            Some(TokenKind::Keyword(id)) => {
                let id = *id;
                self.cursor += 1;
                Ok(id)
            }
            _ => Err(self.unexpected("a type keyword")),
        }
    }

    /// Consume any operator token and return its id, or fail.
    pub fn expect_operator(&mut self) -> Result<OperatorId, ParseError> {
        match self.current().map(|t| &t.kind) {
            Some(TokenKind::Operator(id)) => {
                let id = *id;
                self.cursor += 1;
                Ok(id)
            }
            _ => Err(self.unexpected("an operator")),
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Build the error for an unmet expectation at the current position.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.describe(),
                line: token.line,
                column: token.column,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn stream(source: &str) -> TokenStream {
        TokenStream::new(lex(source).unwrap())
    }

    #[test]
    fn test_peek_is_bounds_safe() {
        let s = stream("contract Wallet");
        assert!(s.peek(0).is_some());
        assert!(s.peek(1).is_some());
        assert!(s.peek(2).is_none());
        assert!(s.peek(1000).is_none());
    }

    #[test]
    fn test_advance_and_last() {
        let mut s = stream("contract Wallet");
        assert!(s.last().is_none());
        assert!(s.advance().is_some_and(|t| t.is_keyword(KeywordId::Contract)));
        assert!(s.last().is_some_and(|t| t.is_keyword(KeywordId::Contract)));
        assert!(s.advance().is_some());
        assert!(s.advance().is_none());
        assert!(s.last().is_some_and(|t| matches!(&t.kind, TokenKind::Ident(n) if n == "Wallet")));
    }

    #[test]
    fn test_match_only_advances_on_match() {
        let mut s = stream("{ }");
        assert!(!s.match_symbol(SymbolId::RBrace));
        assert!(s.match_symbol(SymbolId::LBrace));
        assert!(s.match_symbol(SymbolId::RBrace));
        assert!(!s.match_symbol(SymbolId::RBrace));
    }

    #[test]
    fn test_expect_reports_expected_and_actual() {
        let mut s = stream("function");
        let err = s.expect_keyword(KeywordId::Contract).unwrap_err();
        match err {
            ParseError::UnexpectedToken {
                expected,
                found,
                line,
                column,
            } => {
                assert_eq!(expected, "keyword `contract`");
                assert_eq!(found, "keyword `function`");
                assert_eq!((line, column), (1, 1));
            }
            other => panic!("expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_expect_at_end_of_input() {
        let mut s = stream("");
        let err = s.expect_ident().unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_expect_ident_returns_spelling() {
        let mut s = stream("owner ;");
        assert_eq!(s.expect_ident().unwrap(), "owner");
        assert!(s.check_symbol(SymbolId::Semicolon));
    }
}
