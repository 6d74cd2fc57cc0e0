//! Structural symbol vocabulary.
//!
//! This module defines the single-character structural symbols (delimiters, separators,
//! and markers) recognized by the lexer. Symbols are matched before operators, so `.`
//! is always a symbol token even though the lexer also scans multi-character operators.
//!
//! ## Examples
//! ```rust
//! use solv_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_char('{'), Some(SymbolId::LBrace));
//! assert_eq!(symbols::as_char(SymbolId::Semicolon), ';');
//! ```

/// Stable identifier for structural symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,

    // Separators
    Semicolon,
    Comma,
    Colon,

    // Markers
    Dot,
    Question,
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub canonical: char,
}

/// Registry of all structural symbols.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(SymbolId::LBrace, '{'),
    info(SymbolId::RBrace, '}'),
    info(SymbolId::LParen, '('),
    info(SymbolId::RParen, ')'),
    info(SymbolId::LBracket, '['),
    info(SymbolId::RBracket, ']'),
    info(SymbolId::Semicolon, ';'),
    info(SymbolId::Comma, ','),
    info(SymbolId::Colon, ':'),
    info(SymbolId::Dot, '.'),
    info(SymbolId::Question, '?'),
];

/// Canonical character for `id`.
pub fn as_char(id: SymbolId) -> char {
    info_for(id).canonical
}

/// Full metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    SYMBOLS.iter().find(|s| s.id == id).expect("symbol info missing")
}

/// Lookup by character.
pub fn from_char(c: char) -> Option<SymbolId> {
    SYMBOLS.iter().find(|s| s.canonical == c).map(|s| s.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: SymbolId, canonical: char) -> SymbolInfo {
    SymbolInfo { id, canonical }
}
