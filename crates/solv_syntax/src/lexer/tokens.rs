//! Token types for the Solv lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Symbol(SymbolId)` for single-character structural symbols
//! - `Operator(OperatorId)` for operators (subgrouped via the operator registry)
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Tokens are created only by the lexer and never mutated afterwards.

use solv_core::lang::keywords::{self, KeywordId};
use solv_core::lang::operators::{self, OperatorGroup, OperatorId};
use solv_core::lang::symbols::{self, SymbolId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Ident(String),
    Symbol(SymbolId),
    Operator(OperatorId),
    /// Decimal integer literal, kept as source text.
    Number(String),
    /// String literal with its quotes stripped and escaped quotes resolved.
    Str(String),
}

/// A token with its kind and 1-based source position (first character).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.symbol_id()`.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        self.kind.symbol_id()
    }

    /// Convenience wrapper for `self.kind.is_keyword(id)`.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    /// Convenience wrapper for `self.kind.is_symbol(id)`.
    pub fn is_symbol(&self, id: SymbolId) -> bool {
        self.kind.is_symbol(id)
    }

    /// Human-readable rendering for diagnostics, e.g. ``keyword `contract` ``.
    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return the operator subgroup, if this is an operator token.
    pub fn operator_group(&self) -> Option<OperatorGroup> {
        self.operator_id().map(operators::group_of)
    }

    /// Return the symbol id, if this is a symbol token.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        match self {
            TokenKind::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given symbol.
    pub fn is_symbol(&self, id: SymbolId) -> bool {
        matches!(self, TokenKind::Symbol(s) if *s == id)
    }

    /// The textual value this token stands for.
    pub fn text(&self) -> String {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Symbol(id) => symbols::as_char(*id).to_string(),
            TokenKind::Operator(id) => operators::as_str(*id).to_string(),
            TokenKind::Number(text) => text.clone(),
            TokenKind::Str(value) => value.clone(),
        }
    }

    /// Human-readable rendering for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword `{}`", keywords::as_str(*id)),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Symbol(id) => format!("`{}`", symbols::as_char(*id)),
            TokenKind::Operator(id) => format!("operator `{}`", operators::as_str(*id)),
            TokenKind::Number(text) => format!("number `{text}`"),
            TokenKind::Str(_) => "string literal".to_string(),
        }
    }
}
