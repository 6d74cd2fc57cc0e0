//! Reserved keyword vocabulary.
//!
//! This module is the single source of truth for the dialect's reserved words: a stable
//! identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording the
//! canonical spelling and a coarse category for each word.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Reserved words always win over identifier classification in the lexer; `contract`
//!   is a keyword even though it would otherwise be a legal identifier.
//! - This registry is intentionally **pure** (no tokens, no IO, no side effects).
//!
//! ## Examples
//! ```rust
//! use solv_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("payable"), Some(KeywordId::Payable));
//! assert_eq!(keywords::as_str(KeywordId::Payable), "payable");
//! assert!(keywords::is_visibility(KeywordId::Public));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Contract,
    Interface,
    Library,
    Function,
    Modifier,
    Constructor,
    Event,
    Enum,
    Struct,
    Import,
    Pragma,

    // Control flow
    If,
    Else,
    While,
    For,
    Do,
    Return,
    Break,
    Continue,
    Try,
    Catch,
    Throw,
    Unchecked,
    Assembly,

    // Builtin statements
    Emit,
    Require,
    Revert,
    Assert,
    New,
    Delete,

    // Visibility
    Public,
    Private,
    Internal,
    External,

    // Modifiers / mutability / data location
    View,
    Pure,
    Payable,
    Constant,
    Storage,
    Memory,
    Calldata,
    Override,
    Virtual,
    Returns,

    // Types
    Address,
    Bool,
    String,
    Bytes,
    Int,
    Uint,
    Fixed,
    Ufixed,
    Byte,
    Mapping,

    // Literals
    True,
    False,

    // Global objects
    This,
    Super,
    Msg,
    Tx,
    Block,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Builtin,
    Visibility,
    Modifier,
    Type,
    Literal,
    Global,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Contract, "contract", KeywordCategory::Declaration),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    info(KeywordId::Library, "library", KeywordCategory::Declaration),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::Modifier, "modifier", KeywordCategory::Declaration),
    info(KeywordId::Constructor, "constructor", KeywordCategory::Declaration),
    info(KeywordId::Event, "event", KeywordCategory::Declaration),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    info(KeywordId::Struct, "struct", KeywordCategory::Declaration),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::Pragma, "pragma", KeywordCategory::Declaration),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    info(KeywordId::Throw, "throw", KeywordCategory::ControlFlow),
    info(KeywordId::Unchecked, "unchecked", KeywordCategory::ControlFlow),
    info(KeywordId::Assembly, "assembly", KeywordCategory::ControlFlow),
    // Builtin statements
    info(KeywordId::Emit, "emit", KeywordCategory::Builtin),
    info(KeywordId::Require, "require", KeywordCategory::Builtin),
    info(KeywordId::Revert, "revert", KeywordCategory::Builtin),
    info(KeywordId::Assert, "assert", KeywordCategory::Builtin),
    info(KeywordId::New, "new", KeywordCategory::Builtin),
    info(KeywordId::Delete, "delete", KeywordCategory::Builtin),
    // Visibility
    info(KeywordId::Public, "public", KeywordCategory::Visibility),
    info(KeywordId::Private, "private", KeywordCategory::Visibility),
    info(KeywordId::Internal, "internal", KeywordCategory::Visibility),
    info(KeywordId::External, "external", KeywordCategory::Visibility),
    // Modifiers / mutability / data location
    info(KeywordId::View, "view", KeywordCategory::Modifier),
    info(KeywordId::Pure, "pure", KeywordCategory::Modifier),
    info(KeywordId::Payable, "payable", KeywordCategory::Modifier),
    info(KeywordId::Constant, "constant", KeywordCategory::Modifier),
    info(KeywordId::Storage, "storage", KeywordCategory::Modifier),
    info(KeywordId::Memory, "memory", KeywordCategory::Modifier),
    info(KeywordId::Calldata, "calldata", KeywordCategory::Modifier),
    info(KeywordId::Override, "override", KeywordCategory::Modifier),
    info(KeywordId::Virtual, "virtual", KeywordCategory::Modifier),
    info(KeywordId::Returns, "returns", KeywordCategory::Modifier),
    // Types
    info(KeywordId::Address, "address", KeywordCategory::Type),
    info(KeywordId::Bool, "bool", KeywordCategory::Type),
    info(KeywordId::String, "string", KeywordCategory::Type),
    info(KeywordId::Bytes, "bytes", KeywordCategory::Type),
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Uint, "uint", KeywordCategory::Type),
    info(KeywordId::Fixed, "fixed", KeywordCategory::Type),
    info(KeywordId::Ufixed, "ufixed", KeywordCategory::Type),
    info(KeywordId::Byte, "byte", KeywordCategory::Type),
    info(KeywordId::Mapping, "mapping", KeywordCategory::Type),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    // Global objects
    info(KeywordId::This, "this", KeywordCategory::Global),
    info(KeywordId::Super, "super", KeywordCategory::Global),
    info(KeywordId::Msg, "msg", KeywordCategory::Global),
    info(KeywordId::Tx, "tx", KeywordCategory::Global),
    info(KeywordId::Block, "block", KeywordCategory::Global),
];

/// Canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category for `id`.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `id` is a visibility keyword (`public`/`private`/`internal`/`external`).
pub fn is_visibility(id: KeywordId) -> bool {
    info_for(id).category == KeywordCategory::Visibility
}

/// Return `true` if `id` is an elementary value type that can open a variable
/// declaration or fill a parameter/return type slot.
///
/// `mapping` is categorized as a type but excluded here: mapping declarations need
/// their own production and are not parseable as a plain `type name;` member.
pub fn is_value_type(id: KeywordId) -> bool {
    info_for(id).category == KeywordCategory::Type && id != KeywordId::Mapping
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
