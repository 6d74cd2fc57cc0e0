//! Rule dispatch: the hub that lets grammar rules invoke one another.
//!
//! Rules are deliberately decoupled: a rule never names another rule's type, only a
//! [`RuleKind`]. The dispatcher owns the shared [`TokenStream`], constructs the rule
//! implementation for a kind, and hands back the resulting AST fragment as a
//! [`RuleOutput`]. Dispatch is a closed match over a fixed enumeration, so an unknown
//! rule is unrepresentable.

use crate::ast::{Constructor, Contract, Function, Member, Statement, Variable};
use crate::diagnostics::ParseError;
use crate::lexer::Token;
use crate::parser::ParseOptions;
use crate::parser::rules::{
    ConstructorRule, ContractRule, FunctionRule, StatementRule, VariableRule,
};
use crate::parser::stream::TokenStream;

/// The fixed set of grammar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Contract,
    Function,
    Variable,
    Constructor,
    Statements,
}

/// The AST fragment a rule application produces.
///
/// Each [`RuleKind`] maps to exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutput {
    Contract(Contract),
    Function(Function),
    Variable(Variable),
    Constructor(Constructor),
    Statements(Vec<Statement>),
}

impl RuleOutput {
    /// Unwrap a member-producing rule application.
    pub(crate) fn into_member(self) -> Member {
        match self {
            RuleOutput::Function(f) => Member::Function(f),
            RuleOutput::Variable(v) => Member::Variable(v),
            RuleOutput::Constructor(c) => Member::Constructor(c),
            other => unreachable!("rule output {other:?} is not a contract member"),
        }
    }

    /// Unwrap the statement-list rule application.
    pub(crate) fn into_statements(self) -> Vec<Statement> {
        match self {
            RuleOutput::Statements(stmts) => stmts,
            other => unreachable!("rule output {other:?} is not a statement list"),
        }
    }

    /// Unwrap the contract rule application.
    pub(crate) fn into_contract(self) -> Contract {
        match self {
            RuleOutput::Contract(c) => c,
            other => unreachable!("rule output {other:?} is not a contract"),
        }
    }
}

/// Shared parsing context: the token stream, the options, and the dispatch table.
pub struct Dispatcher {
    pub(crate) stream: TokenStream,
    pub(crate) options: ParseOptions,
}

impl Dispatcher {
    /// Create a dispatcher over a token sequence.
    pub fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            options,
        }
    }

    /// Apply the grammar rule for `rule` at the current stream position.
    ///
    /// ## Errors
    /// Propagates the rule's [`ParseError`] unchanged; no retry happens here.
    pub fn parse_rule(&mut self, rule: RuleKind) -> Result<RuleOutput, ParseError> {
        match rule {
            RuleKind::Contract => ContractRule::new(self).parse().map(RuleOutput::Contract),
            RuleKind::Function => FunctionRule::new(self).parse().map(RuleOutput::Function),
            RuleKind::Variable => VariableRule::new(self).parse().map(RuleOutput::Variable),
            RuleKind::Constructor => ConstructorRule::new(self).parse().map(RuleOutput::Constructor),
            RuleKind::Statements => StatementRule::new(self).parse().map(RuleOutput::Statements),
        }
    }
}
