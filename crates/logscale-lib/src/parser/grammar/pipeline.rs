use logscale_core::is_reserved;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{FILTER_FIRST, STEP_FIRST};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::lexer::LexMode;

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Query);
        self.parse_pipeline(TokenSet::EMPTY);
        self.eat_trivia();
        self.finish_node();
    }

    /// `Step? ("|" Step)*`, stopping before any token in `ends`.
    ///
    /// Leftovers after a step are skipped up to the next `|` or end token. The
    /// top-level pipeline may be empty; nested ones (case branches, match arms,
    /// subqueries) need at least one step.
    pub(crate) fn parse_pipeline(&mut self, ends: TokenSet) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::Pipeline);

        let recovery = ends.union(TokenSet::single(SyntaxKind::Pipe));
        let nested = ends != TokenSet::EMPTY;

        if self.currently_is_one_of(STEP_FIRST) {
            self.parse_step();
        } else if nested || self.currently_is(SyntaxKind::Pipe) {
            self.error_expected(DiagnosticKind::ExpectedStep);
        }

        loop {
            if self.should_stop() || self.currently_is_one_of(ends) {
                break;
            }
            if self.eat_token(SyntaxKind::Pipe) {
                if self.currently_is_one_of(STEP_FIRST) {
                    self.parse_step();
                } else {
                    self.error_expected(DiagnosticKind::ExpectedStep);
                }
                continue;
            }
            self.error_recover("`|`", recovery);
        }

        self.finish_node();
        self.exit_recursion();
    }

    fn parse_step(&mut self) {
        self.set_mode(LexMode::Filter);
        match self.current() {
            SyntaxKind::KwCase => self.parse_case(),
            SyntaxKind::BracketOpen => self.with_mode(LexMode::Expr, |p| p.parse_array()),
            SyntaxKind::Dollar => self.parse_saved_query(),
            SyntaxKind::Word => match self.peek_nth(1) {
                SyntaxKind::ColonEq => self.parse_eval_shorthand(),
                SyntaxKind::EqTilde => self.parse_field_shorthand(),
                SyntaxKind::KwMatch => self.parse_match(),
                _ => self.parse_and_filter(),
            },
            kind if FILTER_FIRST.contains(kind) => self.parse_and_filter(),
            _ => self.error_expected(DiagnosticKind::ExpectedStep),
        }
    }

    /// `field := expr`.
    ///
    /// Tie-break: when the whole right-hand side is one bare function call the
    /// step is an `EvalFunctionShorthand`; anything else, including a call in
    /// parentheses or inside arithmetic, is an `EvalShorthand`.
    fn parse_eval_shorthand(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump_wrapped(SyntaxKind::FieldName);
        self.assert_current(SyntaxKind::ColonEq);
        self.bump();

        let rhs = self.with_mode(LexMode::Expr, |p| p.parse_expr());
        let kind = match rhs {
            Some(SyntaxKind::FunctionCall) => SyntaxKind::EvalFunctionShorthand,
            _ => SyntaxKind::EvalShorthand,
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    /// `field =~ call(...)`.
    fn parse_field_shorthand(&mut self) {
        self.start_node(SyntaxKind::FieldShorthand);
        self.bump_wrapped(SyntaxKind::FieldName);
        self.assert_current(SyntaxKind::EqTilde);
        self.bump();

        if self.at_call_start() {
            self.parse_function_call();
        } else {
            self.error_expected(DiagnosticKind::ExpectedFunctionCall);
        }
        self.finish_node();
    }

    /// `$name(args)` or `$"name"(args)`.
    fn parse_saved_query(&mut self) {
        self.start_node(SyntaxKind::SavedQuery);
        self.assert_current(SyntaxKind::Dollar);
        self.bump();

        match self.current() {
            SyntaxKind::Word => self.parse_name(),
            SyntaxKind::StringLit | SyntaxKind::UnterminatedString => self.parse_quoted_string(),
            _ => self.error_expected(DiagnosticKind::ExpectedName),
        }

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.with_mode(LexMode::Expr, |p| p.parse_arg_list());
        } else {
            self.expect(SyntaxKind::ParenOpen, "`(` after saved query name");
        }
        self.finish_node();
    }

    /// Call detection.
    ///
    /// Tie-break: a word (or `match`) followed by `(` is a call when the `(` is
    /// adjacent, or when the word is a reserved function name. A namespaced name
    /// (`text:contains`) always starts a call. Otherwise the word is free text,
    /// so `error (a OR b)` is a search for `error` and a parenthesized filter.
    pub(crate) fn at_call_start(&mut self) -> bool {
        if !matches!(self.current(), SyntaxKind::Word | SyntaxKind::KwMatch) {
            return false;
        }
        match self.nth_raw(1) {
            SyntaxKind::ParenOpen => true,
            SyntaxKind::Colon => self.nth_raw(2) == SyntaxKind::Word,
            _ => {
                let name = self.current_text();
                self.next_is(SyntaxKind::ParenOpen) && is_reserved(name)
            }
        }
    }
}
