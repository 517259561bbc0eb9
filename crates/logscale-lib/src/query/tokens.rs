//! Labelled tokens for the token visualizer.

use rowan::TextRange;

use crate::parser::SyntaxToken;
use crate::parser::cst::SyntaxKind;

use super::Query;
use super::serialize::node_type;

/// A non-whitespace token with the syntax kind it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken {
    pub kind: SyntaxKind,
    /// Kind of the enclosing leaf node for punctuation, keywords and leaf
    /// content; the token's own kind for comments and other loose tokens.
    pub label_kind: SyntaxKind,
    pub text: String,
    pub range: TextRange,
}

impl QueryToken {
    fn new(token: &SyntaxToken) -> Self {
        let label_kind = match token.parent() {
            Some(parent) if token.kind().is_fixed_text() => parent.kind(),
            Some(parent) if !token.kind().is_trivia() && parent.first_child().is_none() => {
                parent.kind()
            }
            _ => token.kind(),
        };
        Self {
            kind: token.kind(),
            label_kind,
            text: token.text().to_string(),
            range: token.text_range(),
        }
    }

    /// `field_name`, `arg_list`, `line_comment`, ...
    pub fn label(&self) -> String {
        node_type(self.label_kind).to_lowercase()
    }
}

impl Query<'_> {
    /// Leaf tokens in source order, whitespace and newlines excluded.
    pub fn tokens(&self) -> Vec<QueryToken> {
        self.as_cst()
            .descendants_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !matches!(t.kind(), SyntaxKind::Whitespace | SyntaxKind::Newline))
            .map(|t| QueryToken::new(&t))
            .collect()
    }
}
