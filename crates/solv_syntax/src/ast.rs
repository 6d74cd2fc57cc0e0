//! Abstract syntax tree for the Solv dialect.
//!
//! All node types are plain data records: immutable after construction, no behavior,
//! and strictly hierarchical ownership (a contract exclusively owns its members, a
//! function exclusively owns its body statements). Nothing here validates shape; a
//! node is only ever built by a grammar rule that has already matched the syntax.

use solv_core::lang::keywords::KeywordId;
use solv_core::lang::operators::OperatorId;

/// A parsed contract: the root of every syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub name: String,
    pub members: Vec<Member>,
}

/// One member of a contract body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Function(Function),
    Variable(Variable),
    Constructor(Constructor),
}

/// A function declaration with its header, modifiers, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub visibility: Option<Visibility>,
    pub is_payable: bool,
    pub parameters: Vec<Variable>,
    /// Unnamed return slots: each entry carries a type and an empty name.
    pub returns: Vec<Variable>,
    pub body: Vec<Statement>,
}

/// A typed variable: state variable, parameter, or return slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub type_name: String,
    pub name: String,
    pub visibility: Option<Visibility>,
}

/// A constructor declaration. No name, no return types.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub parameters: Vec<Variable>,
    pub visibility: Option<Visibility>,
    pub body: Vec<Statement>,
}

/// Visibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
    Internal,
    External,
}

impl Visibility {
    /// Map a visibility keyword to its typed form, if `id` is one.
    pub fn from_keyword(id: KeywordId) -> Option<Visibility> {
        match id {
            KeywordId::Public => Some(Visibility::Public),
            KeywordId::Private => Some(Visibility::Private),
            KeywordId::Internal => Some(Visibility::Internal),
            KeywordId::External => Some(Visibility::External),
            _ => None,
        }
    }
}

/// A statement inside a function or constructor body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `return;` or `return expr;`
    Return(Option<Expr>),
    /// `name op expr;` where `op` is any operator token (`=`, `+=`, …).
    Assignment {
        left: String,
        operator: OperatorId,
        right: Expr,
    },
    /// A bare expression terminated by `;`. `require(...)` lands here too.
    Expression(Expr),
    /// `revert(args);` / `assert(args);`
    Builtin {
        kind: BuiltinKind,
        arguments: Vec<Expr>,
    },
    /// `if (cond) { … } else { … }`
    If {
        condition: Expr,
        then_block: Vec<Statement>,
        else_block: Option<Vec<Statement>>,
    },
    /// `emit Name(args);`
    Emit { event: String, arguments: Vec<Expr> },
    /// `while (cond) { … }`
    While { condition: Expr, body: Vec<Statement> },
    /// `for (init?; cond?; incr?) { … }` with each clause independently optional.
    For {
        init: Option<Box<Statement>>,
        condition: Option<Expr>,
        increment: Option<Expr>,
        body: Vec<Statement>,
    },
    /// `break;`
    Break,
    /// `continue;`
    Continue,
}

/// Builtin statements that keep their own node instead of a generic call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Revert,
    Assert,
}

/// The restricted expression grammar: a dotted name, optionally called.
///
/// No binary, comparison, or arithmetic operators are representable here; operator
/// tokens are only consumed on the assignment-statement path.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare (possibly dot-qualified) name, e.g. `balance` or `msg.sender`.
    Name(String),
    /// A call with a (possibly dot-qualified) target, e.g. `wallet.deposit(x, y)`.
    Call { function: String, arguments: Vec<Expr> },
}
