//! Canonical formatter.
//!
//! The CST is turned into a [`Doc`] by per-node layout rules, then printed
//! within [`FormatOptions::width`]. Output depends only on the tree's tokens
//! and comments, never on the source's whitespace, so formatting is idempotent.

mod doc;
mod layout;
mod printer;


pub use doc::Doc;
pub use printer::render;

use crate::parser::SyntaxNode;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_INDENT: usize = 2;

/// Layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    width: usize,
    indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent: DEFAULT_INDENT,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferred maximum line width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Spaces per indentation level.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn get_width(&self) -> usize {
        self.width
    }

    pub fn get_indent(&self) -> usize {
        self.indent
    }
}

/// Builds the document for a tree without printing it.
pub fn to_doc(root: &SyntaxNode) -> Doc {
    layout::layout(root)
}

/// Formats a tree. Does not check for syntax errors; error nodes are printed
/// as they appear in the source.
pub fn format_tree(root: &SyntaxNode, options: &FormatOptions) -> String {
    let doc = to_doc(root);
    let out = render(&doc, options.width, options.indent);
    tracing::debug!(
        width = options.width,
        indent = options.indent,
        bytes = out.len(),
        "formatted query"
    );
    out
}
