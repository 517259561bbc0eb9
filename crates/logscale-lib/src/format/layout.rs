//! Per-node layout rules: CST to [`Doc`].
//!
//! Every node kind has one rule, applied the same way wherever the node sits.
//! Whitespace and newlines from the source are dropped; comments are kept at
//! their position among the node's children.

use rowan::NodeOrToken;

use super::doc::Doc;
use crate::parser::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub fn layout(root: &SyntaxNode) -> Doc {
    node(root)
}

fn node(node: &SyntaxNode) -> Doc {
    match node.kind() {
        SyntaxKind::Pipeline => pipeline(node),

        SyntaxKind::AndFilter
        | SyntaxKind::OrFilter
        | SyntaxKind::FieldComparison
        | SyntaxKind::ComparisonExpr
        | SyntaxKind::AdditiveExpr
        | SyntaxKind::MultiplicativeExpr
        | SyntaxKind::EvalShorthand
        | SyntaxKind::EvalFunctionShorthand
        | SyntaxKind::FieldShorthand
        | SyntaxKind::NamedArg => spaced(node),

        SyntaxKind::NotFilter => not_filter(node),
        SyntaxKind::ArgList | SyntaxKind::ArrayExpr => delimited_list(node),
        SyntaxKind::Subquery => subquery(node),
        SyntaxKind::CaseExpr | SyntaxKind::MatchExpr => block(node),
        SyntaxKind::MatchArm => match_arm(node),
        SyntaxKind::Error => verbatim(node),

        _ => tight(node),
    }
}

fn token(token: &SyntaxToken) -> Doc {
    match token.kind() {
        SyntaxKind::LineComment => Doc::line_comment(token.text().trim_end()),
        SyntaxKind::BlockComment => {
            Doc::concat([Doc::space(), Doc::text(token.text()), Doc::space()])
        }
        SyntaxKind::KwAnd => Doc::text("AND"),
        SyntaxKind::KwOr => Doc::text("OR"),
        SyntaxKind::KwNot => Doc::text("NOT"),
        _ => Doc::text(token.text()),
    }
}

fn element(element: &SyntaxElement) -> Doc {
    match element {
        NodeOrToken::Node(n) => node(n),
        NodeOrToken::Token(t) => token(t),
    }
}

/// Children that contribute to the layout: nodes, tokens and comments.
fn elements(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> {
    node.children_with_tokens()
        .filter(|it| !matches!(it.kind(), SyntaxKind::Whitespace | SyntaxKind::Newline))
}

fn is_comment(element: &SyntaxElement) -> bool {
    element.kind().is_comment()
}

/// Children printed back to back: names, calls, literals, parentheses.
fn tight(node: &SyntaxNode) -> Doc {
    Doc::concat(elements(node).map(|it| element(&it)))
}

/// Children separated by single spaces: operators and their operands.
fn spaced(node: &SyntaxNode) -> Doc {
    let mut docs = Vec::new();
    for it in elements(node) {
        if !docs.is_empty() {
            docs.push(Doc::space());
        }
        docs.push(element(&it));
    }
    Doc::concat(docs)
}

/// Source text without surrounding trivia.
fn verbatim(node: &SyntaxNode) -> Doc {
    Doc::text(node.text().to_string().trim())
}

/// Every `|` starts a new line.
fn pipeline(node: &SyntaxNode) -> Doc {
    let mut docs = Vec::new();
    for it in elements(node) {
        if it.kind() == SyntaxKind::Pipe {
            docs.extend([Doc::hardline(), Doc::text("|"), Doc::space()]);
        } else {
            docs.push(element(&it));
        }
    }
    Doc::concat(docs)
}

/// `NOT` is followed by a space, `!` attaches to its operand.
fn not_filter(node: &SyntaxNode) -> Doc {
    let keyword = elements(node)
        .next()
        .is_some_and(|it| it.kind() == SyntaxKind::KwNot);
    if keyword { spaced(node) } else { tight(node) }
}

/// `(a, b)` and `[a, b]`: flat when the whole list fits, otherwise one item
/// per line, indented, with the closer on its own line.
fn delimited_list(node: &SyntaxNode) -> Doc {
    let mut open = Doc::nil();
    let mut close = Doc::nil();
    let mut items = Vec::new();
    let mut pending_line = false;

    for it in elements(node) {
        match it.kind() {
            SyntaxKind::ParenOpen | SyntaxKind::BracketOpen if items.is_empty() => {
                open = element(&it);
            }
            SyntaxKind::ParenClose | SyntaxKind::BracketClose => close = element(&it),
            SyntaxKind::Comma => {
                items.push(Doc::text(","));
                pending_line = true;
            }
            // A comment after a comma stays on the comma's line.
            _ if is_comment(&it) => items.push(element(&it)),
            _ => {
                if pending_line {
                    items.push(Doc::line());
                    pending_line = false;
                }
                items.push(element(&it));
            }
        }
    }

    if items.is_empty() {
        return Doc::concat([open, close]);
    }
    Doc::group(Doc::concat([
        open,
        Doc::indent(Doc::concat([Doc::softline(), Doc::concat(items)])),
        Doc::softline(),
        close,
    ]))
}

/// `{ body }` when it fits, otherwise the body indented on its own lines.
fn subquery(node: &SyntaxNode) -> Doc {
    let mut body = Vec::new();
    let mut close = Doc::nil();
    for it in elements(node) {
        match it.kind() {
            SyntaxKind::BraceOpen if body.is_empty() => {}
            SyntaxKind::BraceClose => close = element(&it),
            _ => body.push(element(&it)),
        }
    }

    if body.is_empty() {
        return Doc::concat([Doc::text("{"), close]);
    }
    Doc::group(Doc::concat([
        Doc::text("{"),
        Doc::indent(Doc::concat([Doc::line(), Doc::concat(body)])),
        Doc::line(),
        close,
    ]))
}

/// `case { ... }` and `field match { ... }`: one branch per line, separated by
/// `;`. A trailing `;` after the last branch is dropped.
fn block(node: &SyntaxNode) -> Doc {
    let mut header = Vec::new();
    let mut branches = Vec::new();
    let mut close = Doc::nil();
    let mut in_body = false;
    let mut pending_semicolon = false;
    let mut pending_break = false;

    for it in elements(node) {
        if !in_body {
            if it.kind() == SyntaxKind::BraceOpen {
                in_body = true;
            } else {
                header.push(element(&it));
            }
            continue;
        }

        match it.kind() {
            SyntaxKind::BraceClose => close = element(&it),
            SyntaxKind::Semicolon => pending_semicolon = true,
            _ if is_comment(&it) => {
                if pending_semicolon {
                    branches.push(Doc::text(";"));
                    pending_semicolon = false;
                    pending_break = true;
                }
                branches.push(element(&it));
            }
            _ => {
                if pending_semicolon {
                    branches.extend([Doc::text(";"), Doc::hardline()]);
                } else if pending_break {
                    branches.push(Doc::hardline());
                }
                pending_semicolon = false;
                pending_break = false;
                branches.push(element(&it));
            }
        }
    }

    let mut docs = Vec::new();
    for doc in header {
        docs.extend([doc, Doc::space()]);
    }
    if !in_body {
        return Doc::concat(docs);
    }

    docs.push(Doc::text("{"));
    if branches.is_empty() {
        docs.push(close);
        return Doc::concat(docs);
    }
    docs.extend([
        Doc::indent(Doc::concat([Doc::hardline(), Doc::concat(branches)])),
        Doc::hardline(),
        close,
    ]);
    Doc::concat(docs)
}

/// `guard => pipeline`. Continuation lines of the body are indented past the guard.
fn match_arm(node: &SyntaxNode) -> Doc {
    let mut docs = Vec::new();
    for it in elements(node) {
        if !docs.is_empty() {
            docs.push(Doc::space());
        }
        let doc = element(&it);
        if it.kind() == SyntaxKind::Pipeline {
            docs.push(Doc::indent(doc));
        } else {
            docs.push(doc);
        }
    }
    Doc::concat(docs)
}
