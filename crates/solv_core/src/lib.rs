//! Provide the canonical language vocabulary for the Solv syntax frontend.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables
//! that define the dialect's reserved words, operators, and structural symbols, so that
//! the lexer, parser, and any downstream tooling agree on a single source of truth.
//!
//! ## Notes
//! - This is a vocabulary crate: **no IO**, no global state, and no tokenization logic.
//! - Callers work with stable IDs ([`lang::keywords::KeywordId`], [`lang::operators::OperatorId`],
//!   [`lang::symbols::SymbolId`]) and look up spellings/metadata via the registry tables.
//! - Extending the language surface means adding a registry entry; the lexer's control flow
//!   is driven by the tables and does not change.

pub mod lang;
