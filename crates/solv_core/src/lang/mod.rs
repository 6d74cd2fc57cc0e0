//! Language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved keywords,
//! operators (grouped by role), and single-character structural symbols.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and
//! parser. Callers work with **stable IDs** (e.g. [`keywords::KeywordId`]) and look up
//! spellings and metadata via the registry tables.
//!
//! ## Examples
//! ```rust
//! use solv_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("contract"), Some(KeywordId::Contract));
//! assert_eq!(keywords::as_str(KeywordId::Contract), "contract");
//! ```

pub mod keywords;
pub mod operators;
pub mod symbols;
