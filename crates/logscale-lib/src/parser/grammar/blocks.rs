//! `case { ... }` and `field match { ... }` blocks.
//!
//! Branches are kept in source order; both constructs try them top to bottom.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, TokenSet};

const BRANCH_END: TokenSet = TokenSet::new(&[SyntaxKind::Semicolon, SyntaxKind::BraceClose]);

const GUARD_RECOVERY: TokenSet = TokenSet::new(&[
    SyntaxKind::FatArrow,
    SyntaxKind::Semicolon,
    SyntaxKind::BraceClose,
]);

impl Parser<'_> {
    /// `case { pipeline (; pipeline)* ;? }`.
    pub(crate) fn parse_case(&mut self) {
        self.start_node(SyntaxKind::CaseExpr);
        self.assert_current(SyntaxKind::KwCase);
        self.bump();

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_block_body("case block started here", |p| {
                p.parse_pipeline(BRANCH_END);
            });
        } else {
            self.expect(SyntaxKind::BraceOpen, "`{` after `case`");
        }
        self.finish_node();
    }

    /// `field match { guard => pipeline (; guard => pipeline)* ;? }`.
    pub(crate) fn parse_match(&mut self) {
        self.start_node(SyntaxKind::MatchExpr);
        self.bump_wrapped(SyntaxKind::FieldName);
        self.assert_current(SyntaxKind::KwMatch);
        self.bump();

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_block_body("match block started here", |p| p.parse_match_arm());
        } else {
            self.expect(SyntaxKind::BraceOpen, "`{` after `match`");
        }
        self.finish_node();
    }

    /// Shared `{ branch (; branch)* ;? }` loop. A trailing `;` before `}` is allowed.
    fn parse_block_body(&mut self, related_msg: &str, mut branch: impl FnMut(&mut Self)) {
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::BraceClose) {
                break;
            }
            branch(self);
            if !self.eat_token(SyntaxKind::Semicolon) {
                break;
            }
        }

        self.close_delimiter(related_msg);
    }

    fn parse_match_arm(&mut self) {
        self.start_node(SyntaxKind::MatchArm);

        if !self.parse_guard() && !self.currently_is_one_of(GUARD_RECOVERY) {
            self.error_recover("a match guard", GUARD_RECOVERY);
        }

        if self.expect(SyntaxKind::FatArrow, "`=>` after match guard") {
            self.parse_pipeline(BRANCH_END);
        }
        self.finish_node();
    }

    /// `*`, regex, function call, query parameter or anchored pattern.
    /// Returns `false` (after reporting) when no guard is present.
    fn parse_guard(&mut self) -> bool {
        match self.current() {
            SyntaxKind::PatternWord if self.current_text() == "*" => {
                self.bump_wrapped(SyntaxKind::Wildcard);
            }
            SyntaxKind::Slash => self.parse_regex(),
            SyntaxKind::Word | SyntaxKind::KwMatch if self.at_call_start() => {
                self.parse_function_call();
            }
            SyntaxKind::Question => self.parse_query_parameter(),
            SyntaxKind::Word
            | SyntaxKind::PatternWord
            | SyntaxKind::NumberLit
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse => {
                self.start_node(SyntaxKind::AnchoredPattern);
                self.bump_wrapped(SyntaxKind::Pattern);
                self.finish_node();
            }
            SyntaxKind::StringLit | SyntaxKind::UnterminatedString => {
                self.start_node(SyntaxKind::AnchoredPattern);
                self.parse_quoted_string();
                self.finish_node();
            }
            _ => {
                self.error_expected(DiagnosticKind::ExpectedGuard);
                return false;
            }
        }
        true
    }
}
