//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with its grouping metadata
//! (assignment, comparison, arithmetic, logical, bitwise, increment). The lexer matches
//! operators **longest spelling first** via [`longest_match_at`], so compound operators
//! like `+=` are never mis-split into `+` followed by `=`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - Adding an operator is a registry change only; the lexer's control flow is
//!   table-driven and does not need to be touched.
//!
//! ## Examples
//! ```rust
//! use solv_core::lang::operators::{self, OperatorGroup, OperatorId};
//!
//! assert_eq!(operators::from_str("+="), Some(OperatorId::PlusAssign));
//! assert_eq!(operators::group_of(OperatorId::PlusAssign), OperatorGroup::Assignment);
//! assert_eq!(operators::longest_match_at("+= 1").map(|o| o.id), Some(OperatorId::PlusAssign));
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,

    // Logical
    AndAnd,
    OrOr,
    Not,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,

    // Increment / decrement
    PlusPlus,
    MinusMinus,
}

/// Role grouping for operators.
///
/// The group is carried on every operator token so downstream tooling can classify
/// operators without re-deriving the grouping from spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorGroup {
    Assignment,
    Comparison,
    Arithmetic,
    Logical,
    Bitwise,
    Increment,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub group: OperatorGroup,
}

/// Registry of all operators.
///
/// ## Notes
/// - Ordering is grouped for readability; matching does not depend on table order
///   (see [`longest_match_at`]).
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, "=", OperatorGroup::Assignment),
    op(OperatorId::PlusAssign, "+=", OperatorGroup::Assignment),
    op(OperatorId::MinusAssign, "-=", OperatorGroup::Assignment),
    op(OperatorId::StarAssign, "*=", OperatorGroup::Assignment),
    op(OperatorId::SlashAssign, "/=", OperatorGroup::Assignment),
    op(OperatorId::PercentAssign, "%=", OperatorGroup::Assignment),
    // Comparison
    op(OperatorId::EqEq, "==", OperatorGroup::Comparison),
    op(OperatorId::NotEq, "!=", OperatorGroup::Comparison),
    op(OperatorId::Lt, "<", OperatorGroup::Comparison),
    op(OperatorId::Gt, ">", OperatorGroup::Comparison),
    op(OperatorId::LtEq, "<=", OperatorGroup::Comparison),
    op(OperatorId::GtEq, ">=", OperatorGroup::Comparison),
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorGroup::Arithmetic),
    op(OperatorId::Minus, "-", OperatorGroup::Arithmetic),
    op(OperatorId::Star, "*", OperatorGroup::Arithmetic),
    op(OperatorId::Slash, "/", OperatorGroup::Arithmetic),
    op(OperatorId::Percent, "%", OperatorGroup::Arithmetic),
    op(OperatorId::StarStar, "**", OperatorGroup::Arithmetic),
    // Logical
    op(OperatorId::AndAnd, "&&", OperatorGroup::Logical),
    op(OperatorId::OrOr, "||", OperatorGroup::Logical),
    op(OperatorId::Not, "!", OperatorGroup::Logical),
    // Bitwise
    op(OperatorId::Amp, "&", OperatorGroup::Bitwise),
    op(OperatorId::Pipe, "|", OperatorGroup::Bitwise),
    op(OperatorId::Caret, "^", OperatorGroup::Bitwise),
    op(OperatorId::Tilde, "~", OperatorGroup::Bitwise),
    op(OperatorId::Shl, "<<", OperatorGroup::Bitwise),
    op(OperatorId::Shr, ">>", OperatorGroup::Bitwise),
    // Increment / decrement
    op(OperatorId::PlusPlus, "++", OperatorGroup::Increment),
    op(OperatorId::MinusMinus, "--", OperatorGroup::Increment),
];

/// Canonical spelling for `id`.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Group for `id`.
pub fn group_of(id: OperatorId) -> OperatorGroup {
    info_for(id).group
}

/// Full metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Exact lookup by spelling.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Match the longest operator spelling that prefixes `input`.
///
/// ## Returns
/// - The registry entry whose spelling is the longest prefix of `input`, or `None`
///   if no operator starts there.
///
/// ## Notes
/// - Longest-first matching is what keeps `+=` from lexing as `+` then `=`.
pub fn longest_match_at(input: &str) -> Option<&'static OperatorInfo> {
    let mut best: Option<&'static OperatorInfo> = None;
    for info in OPERATORS {
        if input.starts_with(info.spelling)
            && best.map_or(true, |b| info.spelling.len() > b.spelling.len())
        {
            best = Some(info);
        }
    }
    best
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, group: OperatorGroup) -> OperatorInfo {
    OperatorInfo { id, spelling, group }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_round_trip_all_operators() {
        for o in OPERATORS {
            assert_eq!(from_str(o.spelling), Some(o.id), "spelling {:?}", o.spelling);
            assert_eq!(as_str(o.id), o.spelling);
            assert_eq!(group_of(o.id), o.group);
        }
    }

    #[test]
    fn test_spellings_are_unique() {
        let spellings: BTreeSet<_> = OPERATORS.iter().map(|o| o.spelling).collect();
        assert_eq!(spellings.len(), OPERATORS.len());
    }

    #[test]
    fn test_longest_match_prefers_compound_operators() {
        assert_eq!(longest_match_at("+= 1").map(|o| o.id), Some(OperatorId::PlusAssign));
        assert_eq!(longest_match_at("==x").map(|o| o.id), Some(OperatorId::EqEq));
        assert_eq!(longest_match_at("<<y").map(|o| o.id), Some(OperatorId::Shl));
        assert_eq!(longest_match_at("**2").map(|o| o.id), Some(OperatorId::StarStar));
        assert_eq!(longest_match_at("!=b").map(|o| o.id), Some(OperatorId::NotEq));
    }

    #[test]
    fn test_longest_match_falls_back_to_simple_operators() {
        assert_eq!(longest_match_at("+ 1").map(|o| o.id), Some(OperatorId::Plus));
        assert_eq!(longest_match_at("=x").map(|o| o.id), Some(OperatorId::Assign));
        assert_eq!(longest_match_at("<y").map(|o| o.id), Some(OperatorId::Lt));
        assert_eq!(longest_match_at("!b").map(|o| o.id), Some(OperatorId::Not));
    }

    #[test]
    fn test_longest_match_is_exact_on_every_spelling() {
        for o in OPERATORS {
            let matched = longest_match_at(o.spelling).expect("spelling should match itself");
            assert_eq!(matched.id, o.id, "spelling {:?}", o.spelling);
        }
    }

    #[test]
    fn test_no_match_on_non_operator_input() {
        assert_eq!(longest_match_at("abc").map(|o| o.id), None);
        assert_eq!(longest_match_at("").map(|o| o.id), None);
        assert_eq!(longest_match_at("@").map(|o| o.id), None);
    }
}
