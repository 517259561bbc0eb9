//! Parser infrastructure for the query language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary operators and AND/OR lists are wrapped
//!   retroactively once the operator is seen
//! - Parser-driven lexing: the lexer is pulled one token at a time under a mode the
//!   parser picks, because `/` is a regex delimiter in filters and division in expressions
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Tokens that cannot continue a step are wrapped in `SyntaxKind::Error` nodes and skipped
//!    up to the next `|`, `;` or `}`
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Unclosed delimiters are reported once, spanning from the opener
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    AndFilter, Arg, ArgValue, ArrayExpr, CaseExpr, EvalFunctionShorthand, EvalShorthand, Expr,
    FieldComparison, FieldShorthand, Filter, FreeTextPattern, FunctionCall, Guard, MatchArm,
    MatchExpr, NotFilter, OrFilter, Pipeline, QueryParameter, Regex, Root, Step, Subquery, Value,
};

pub use core::Parser;

use crate::Result;
use crate::diagnostics::Diagnostics;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }
}

/// Main entry point. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> Result<(Parse, Diagnostics)> {
    parse_with_parser(Parser::new(source))
}

/// Parse with a pre-configured parser (for custom fuel limits).
pub(crate) fn parse_with_parser(mut parser: Parser) -> Result<(Parse, Diagnostics)> {
    parser.parse_root();
    let (cst, diagnostics) = parser.finish()?;
    Ok((Parse { cst }, diagnostics))
}
