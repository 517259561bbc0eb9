//! Expressions (expression lexer mode).
//!
//! Precedence, lowest first: comparison, additive, multiplicative, unary.
//! Binary levels are left-nested via checkpoints: `m/fisk/i` is
//! `MultiplicativeExpr(MultiplicativeExpr(m / fisk) / i)`.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{ADDITIVE_OPS, COMPARISON_OPS, MULTIPLICATIVE_OPS};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::lexer::LexMode;

#[derive(Clone, Copy)]
enum Level {
    Comparison,
    Additive,
    Multiplicative,
}

impl Level {
    fn ops(self) -> TokenSet {
        match self {
            Level::Comparison => COMPARISON_OPS,
            Level::Additive => ADDITIVE_OPS,
            Level::Multiplicative => MULTIPLICATIVE_OPS,
        }
    }

    fn node(self) -> SyntaxKind {
        match self {
            Level::Comparison => SyntaxKind::ComparisonExpr,
            Level::Additive => SyntaxKind::AdditiveExpr,
            Level::Multiplicative => SyntaxKind::MultiplicativeExpr,
        }
    }

    fn next(self) -> Option<Level> {
        match self {
            Level::Comparison => Some(Level::Additive),
            Level::Additive => Some(Level::Multiplicative),
            Level::Multiplicative => None,
        }
    }
}

impl Parser<'_> {
    /// Parses one expression and returns the kind of its outermost node, or
    /// `None` when nothing could be parsed.
    pub(crate) fn parse_expr(&mut self) -> Option<SyntaxKind> {
        self.parse_binary(Level::Comparison)
    }

    fn parse_binary(&mut self, level: Level) -> Option<SyntaxKind> {
        let checkpoint = self.checkpoint();
        let mut kind = self.parse_operand(level)?;

        while self.currently_is_one_of(level.ops()) {
            self.start_node_at(checkpoint, level.node());
            self.bump();
            if self.parse_operand(level).is_none() {
                self.error_expected(DiagnosticKind::ExpectedExpression);
            }
            self.finish_node();
            kind = level.node();
        }
        Some(kind)
    }

    fn parse_operand(&mut self, level: Level) -> Option<SyntaxKind> {
        match level.next() {
            Some(next) => self.parse_binary(next),
            None => self.parse_unary(),
        }
    }

    fn parse_unary(&mut self) -> Option<SyntaxKind> {
        if !self.currently_is(SyntaxKind::Minus) && !self.currently_is(SyntaxKind::Bang) {
            return self.parse_primary_expr();
        }
        if !self.enter_recursion() {
            return None;
        }

        self.start_node(SyntaxKind::UnaryExpr);
        self.bump();
        if self.parse_unary().is_none() {
            self.error_expected(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();

        self.exit_recursion();
        Some(SyntaxKind::UnaryExpr)
    }

    fn parse_primary_expr(&mut self) -> Option<SyntaxKind> {
        let kind = match self.current() {
            SyntaxKind::NumberLit => {
                self.bump_wrapped(SyntaxKind::Number);
                SyntaxKind::Number
            }
            SyntaxKind::StringLit | SyntaxKind::UnterminatedString => {
                self.parse_quoted_string();
                SyntaxKind::QuotedString
            }
            SyntaxKind::Word | SyntaxKind::KwMatch if self.at_call_start() => {
                self.parse_function_call();
                SyntaxKind::FunctionCall
            }
            SyntaxKind::Word | SyntaxKind::KwTrue | SyntaxKind::KwFalse => {
                self.bump_wrapped(SyntaxKind::FieldName);
                SyntaxKind::FieldName
            }
            SyntaxKind::Question => {
                self.parse_query_parameter();
                SyntaxKind::QueryParameter
            }
            SyntaxKind::ParenOpen => return self.parse_paren_expr(),
            SyntaxKind::Slash => {
                self.parse_misplaced_regex();
                SyntaxKind::Error
            }
            _ => {
                self.error_expected(DiagnosticKind::ExpectedExpression);
                return None;
            }
        };
        Some(kind)
    }

    fn parse_paren_expr(&mut self) -> Option<SyntaxKind> {
        if !self.enter_recursion() {
            return None;
        }

        self.start_node(SyntaxKind::ParenExpr);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter("parenthesized expression started here");
        self.finish_node();

        self.exit_recursion();
        Some(SyntaxKind::ParenExpr)
    }

    /// A `/` at an expression primary opens a regex, which expressions do not
    /// admit. The literal is re-lexed as a regex and consumed into an `Error`
    /// node so the rest of the step still parses.
    fn parse_misplaced_regex(&mut self) {
        let start = self.current_span().start();
        self.with_mode(LexMode::Filter, |p| p.parse_regex_as(SyntaxKind::Error));
        let end = self.last_non_trivia_end().unwrap_or(start);
        self.error_at(
            DiagnosticKind::InvalidRegexContext,
            rowan::TextRange::new(start, end),
            None,
        );
    }
}
