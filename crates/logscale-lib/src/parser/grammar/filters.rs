//! Filters: `AND`/implicit-AND lists, `OR` lists, negation and filter primaries.
//!
//! Precedence is inverted relative to most languages: `OR` binds tighter than
//! `AND`, so `a OR b AND c` is `(a OR b) AND c`. The AND loop is the outermost
//! one and every operand it collects is an OR list.

use logscale_core::is_reserved;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{FIELD_COMPARISON_OPS, FILTER_FIRST};

impl Parser<'_> {
    /// `OrFilter ("AND"? OrFilter)*`. A single operand is not wrapped.
    ///
    /// Implicit AND: any token that can start a filter continues the list, so
    /// `error warning` and `error AND warning` have the same shape.
    pub(crate) fn parse_and_filter(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_or_filter();

        let mut operands = 1;
        loop {
            if self.should_stop() {
                break;
            }
            if self.eat_token(SyntaxKind::KwAnd) {
                if self.currently_is_one_of(FILTER_FIRST) {
                    self.parse_or_filter();
                } else {
                    self.error_expected(DiagnosticKind::ExpectedFilter);
                }
                operands += 1;
                continue;
            }
            if !self.currently_is_one_of(FILTER_FIRST) {
                break;
            }
            self.parse_or_filter();
            operands += 1;
        }

        if operands > 1 {
            self.start_node_at(checkpoint, SyntaxKind::AndFilter);
            self.finish_node();
        }
    }

    /// `NotFilter ("OR" NotFilter)*`. A single operand is not wrapped.
    fn parse_or_filter(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_not_filter();

        let mut operands = 1;
        while self.eat_token(SyntaxKind::KwOr) {
            if self.currently_is_one_of(FILTER_FIRST) {
                self.parse_not_filter();
            } else {
                self.error_expected(DiagnosticKind::ExpectedFilter);
            }
            operands += 1;
        }

        if operands > 1 {
            self.start_node_at(checkpoint, SyntaxKind::OrFilter);
            self.finish_node();
        }
    }

    fn parse_not_filter(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        if self.currently_is(SyntaxKind::KwNot) || self.currently_is(SyntaxKind::Bang) {
            self.start_node(SyntaxKind::NotFilter);
            self.bump();
            if self.currently_is_one_of(FILTER_FIRST) {
                self.parse_not_filter();
            } else {
                self.error_expected(DiagnosticKind::ExpectedFilter);
            }
            self.finish_node();
        } else {
            self.parse_filter_primary();
        }

        self.exit_recursion();
    }

    fn parse_filter_primary(&mut self) {
        match self.current() {
            SyntaxKind::ParenOpen => self.parse_parenthesized_filter(),
            SyntaxKind::KwTrue | SyntaxKind::KwFalse => {
                self.bump_wrapped(SyntaxKind::BooleanFilter);
            }
            SyntaxKind::Question => self.parse_query_parameter(),
            SyntaxKind::Word | SyntaxKind::KwMatch if self.at_call_start() => {
                self.parse_function_call();
            }
            SyntaxKind::Word if FIELD_COMPARISON_OPS.contains(self.peek_nth(1)) => {
                self.parse_field_comparison();
            }
            SyntaxKind::Word
            | SyntaxKind::PatternWord
            | SyntaxKind::NumberLit
            | SyntaxKind::StringLit
            | SyntaxKind::UnterminatedString
            | SyntaxKind::Slash => self.parse_free_text(),
            SyntaxKind::KwMatch => {
                let found = self.found_description();
                self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    format!("expected a field before `match`, found {}", found),
                );
            }
            _ => self.error_expected(DiagnosticKind::ExpectedFilter),
        }
    }

    fn parse_parenthesized_filter(&mut self) {
        self.start_node(SyntaxKind::ParenthesizedFilter);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if self.currently_is_one_of(FILTER_FIRST) {
            self.parse_and_filter();
        } else {
            self.error_expected(DiagnosticKind::ExpectedFilter);
        }

        self.close_delimiter("parenthesized filter started here");
        self.finish_node();
    }

    /// `field op value`. The left side is always a plain field name.
    fn parse_field_comparison(&mut self) {
        self.start_node(SyntaxKind::FieldComparison);
        self.bump_wrapped(SyntaxKind::FieldName);
        self.bump();

        match self.current() {
            SyntaxKind::StringLit | SyntaxKind::UnterminatedString => self.parse_quoted_string(),
            SyntaxKind::Slash => self.parse_regex(),
            SyntaxKind::Question => self.parse_query_parameter(),
            SyntaxKind::Word
            | SyntaxKind::PatternWord
            | SyntaxKind::NumberLit
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse => self.bump_wrapped(SyntaxKind::Pattern),
            _ => self.error_expected(DiagnosticKind::ExpectedValue),
        }
        self.finish_node();
    }

    /// Unanchored search: bare pattern, quoted string or regex.
    ///
    /// A bare reserved function name is rejected here: it has to be called, or
    /// quoted to be searched for.
    fn parse_free_text(&mut self) {
        self.start_node(SyntaxKind::FreeTextPattern);
        match self.current() {
            SyntaxKind::StringLit | SyntaxKind::UnterminatedString => self.parse_quoted_string(),
            SyntaxKind::Slash => self.parse_regex(),
            SyntaxKind::Word => {
                let word = self.current_text();
                let range = self.current_span();
                if is_reserved(word) && self.should_report(range.start()) {
                    self.diagnostics
                        .report(DiagnosticKind::ReservedWordMisuse, range)
                        .message(word)
                        .fix("quote it to search for the text", format!("\"{}\"", word))
                        .emit();
                }
                self.bump_wrapped(SyntaxKind::Pattern);
            }
            _ => self.bump_wrapped(SyntaxKind::Pattern),
        }
        self.finish_node();
    }
}
