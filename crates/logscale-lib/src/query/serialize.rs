//! S-expression and JSON views of the tree.
//!
//! Both list nodes only. Tokens show up as the `text` of the leaf node that
//! holds them.

use std::fmt::Write;

use logscale_core::utils::to_snake_case;
use serde::Serialize;

use crate::parser::cst::SyntaxKind;
use crate::parser::SyntaxNode;

use super::Query;

/// Node name used by both dumps: `field_comparison`, or `ERROR`.
pub(crate) fn node_type(kind: SyntaxKind) -> String {
    if kind == SyntaxKind::Error {
        return "ERROR".to_string();
    }
    to_snake_case(&format!("{:?}", kind))
}

/// One node of the JSON dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: u32,
    pub end: u32,
    pub has_error: bool,
    /// Source text, for nodes without child nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    pub fn from_node(node: &SyntaxNode) -> Self {
        let children: Vec<_> = node.children().map(|n| JsonNode::from_node(&n)).collect();
        let has_error =
            node.kind() == SyntaxKind::Error || children.iter().any(|c| c.has_error);
        let text = children.is_empty().then(|| node.text().to_string());
        let range = node.text_range();
        Self {
            kind: node_type(node.kind()),
            start: range.start().into(),
            end: range.end().into(),
            has_error,
            text,
            children,
        }
    }
}

impl Query<'_> {
    /// `(query (pipeline (free_text_pattern (pattern))))`.
    pub fn to_sexp(&self) -> String {
        let mut out = String::new();
        write_sexp(self.as_cst(), &mut out).expect("String write never fails");
        out
    }

    pub fn to_json_tree(&self) -> JsonNode {
        JsonNode::from_node(self.as_cst())
    }

    /// Pretty-printed JSON (two-space indent) of [`to_json_tree`](Self::to_json_tree).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_tree()).expect("tree serialization never fails")
    }
}

fn write_sexp(node: &SyntaxNode, w: &mut impl Write) -> std::fmt::Result {
    write!(w, "({}", node_type(node.kind()))?;
    for child in node.children() {
        w.write_char(' ')?;
        write_sexp(&child, w)?;
    }
    w.write_char(')')
}
