//! Parsed queries.
//!
//! [`Query`] runs the parser with fuel limits and keeps the tree together with
//! its diagnostics. Everything downstream (formatting, tree dumps, the token
//! view) starts from a `Query`.

mod dump;
mod printer;
mod serialize;
mod tokens;

pub use printer::QueryPrinter;
pub use serialize::JsonNode;
pub use tokens::QueryToken;

#[cfg(test)]
mod mod_tests;

use rowan::GreenNodeBuilder;

use crate::diagnostics::Diagnostics;
use crate::format::{FormatOptions, format_tree};
use crate::parser::cst::SyntaxKind;
use crate::parser::{Parser, Root, SyntaxNode, parse_with_parser};
use crate::{Error, Result};

const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
// Bounded by the deepest tree the layout walk can format on a 2 MiB stack.
const DEFAULT_RECURSION_FUEL: u32 = 512;

/// A parsed query.
///
/// Create with [`new`](Self::new), optionally configure fuel limits,
/// then call [`exec`](Self::exec) to parse.
///
/// Syntax errors do not fail [`exec`](Self::exec): the tree is always built and
/// problems are collected in [`diagnostics`](Self::diagnostics).
#[derive(Debug, Clone)]
pub struct Query<'a> {
    source: &'a str,
    root: Root,
    diagnostics: Diagnostics,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

fn empty_root() -> Root {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::Query.into());
    builder.finish_node();
    let green = builder.finish();
    Root::cast(SyntaxNode::new_root(green)).expect("we just built a Query node")
}

impl<'a> Query<'a> {
    /// Create a new query from source text.
    ///
    /// Call [`exec`](Self::exec) to parse it.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            root: empty_root(),
            diagnostics: Diagnostics::new(),
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// Execution fuel never replenishes. It protects against large inputs.
    /// Returns error from [`exec`](Self::exec) when exhausted.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// Recursion fuel restores when exiting recursion. It protects against
    /// deeply nested input. Returns error from [`exec`](Self::exec) when exhausted.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Parse the source.
    ///
    /// Returns `Err` only if fuel limits are exceeded.
    pub fn exec(mut self) -> Result<Self> {
        let parser = Parser::new(self.source)
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel);

        let (parse, diagnostics) = parse_with_parser(parser)?;
        tracing::debug!(
            bytes = self.source.len(),
            diagnostics = diagnostics.len(),
            "parsed query"
        );

        self.root = Root::cast(parse.syntax()).unwrap_or_else(empty_root);
        self.diagnostics = diagnostics;
        Ok(self)
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Query is valid if there are no error-severity diagnostics.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Canonical text with default [`FormatOptions`].
    pub fn format(&self) -> Result<String> {
        self.format_with(&FormatOptions::default())
    }

    /// Canonical text. Fails with [`Error::FormatError`] if the query has
    /// syntax errors.
    pub fn format_with(&self, options: &FormatOptions) -> Result<String> {
        if !self.is_valid() {
            return Err(Error::FormatError(self.diagnostics.clone()));
        }
        Ok(format_tree(self.as_cst(), options))
    }

    pub fn printer(&self) -> QueryPrinter<'_, 'a> {
        QueryPrinter::new(self)
    }
}

impl<'a> TryFrom<&'a str> for Query<'a> {
    type Error = Error;

    fn try_from(source: &'a str) -> Result<Self> {
        Self::new(source).exec()
    }
}

impl<'a> TryFrom<&'a String> for Query<'a> {
    type Error = Error;

    fn try_from(source: &'a String) -> Result<Self> {
        Self::new(source.as_str()).exec()
    }
}
