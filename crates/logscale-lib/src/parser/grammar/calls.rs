//! Function calls, argument lists, arrays and subqueries.
//!
//! Arguments are expressions, so argument lists are parsed in expression mode;
//! subquery bodies switch back to filter mode.

use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::ARG_RECOVERY;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::lexer::LexMode;

impl Parser<'_> {
    /// `name(args)`. The caller has checked [`Parser::at_call_start`].
    pub(crate) fn parse_function_call(&mut self) {
        self.start_node(SyntaxKind::FunctionCall);
        self.parse_name();

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.with_mode(LexMode::Expr, |p| p.parse_arg_list());
        } else {
            self.expect(SyntaxKind::ParenOpen, "`(` after function name");
        }
        self.finish_node();
    }

    /// `( (Arg ("," Arg)*)? )`.
    ///
    /// Only one argument may omit its name. Every unnamed argument after the
    /// first reports `MultipleUnnamedArgs`; the tree keeps all of them.
    pub(crate) fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ArgList);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.assert_current(SyntaxKind::ParenOpen);
        self.bump();

        let mut unnamed = 0;
        if !self.currently_is(SyntaxKind::ParenClose) {
            loop {
                if self.should_stop() {
                    break;
                }
                let start = self.current_span().start();
                if !self.parse_arg() {
                    unnamed += 1;
                    let end = self.last_non_trivia_end().unwrap_or(start);
                    if unnamed > 1 && start < end {
                        let range = TextRange::new(start, end);
                        self.error_at(DiagnosticKind::MultipleUnnamedArgs, range, None);
                    }
                }
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        if !self.currently_is(SyntaxKind::ParenClose) && !self.should_stop() {
            let recovery = TokenSet::new(&[
                SyntaxKind::ParenClose,
                SyntaxKind::Pipe,
                SyntaxKind::Semicolon,
                SyntaxKind::BraceClose,
            ]);
            self.error_recover("`,` or `)`", recovery);
        }
        self.close_delimiter("argument list started here");
        self.finish_node();
    }

    /// Returns `true` for a named argument.
    fn parse_arg(&mut self) -> bool {
        // LL(2): `name = value`
        if self.currently_is(SyntaxKind::Word) && self.next_is(SyntaxKind::Equals) {
            self.start_node(SyntaxKind::NamedArg);
            self.bump_wrapped(SyntaxKind::Identifier);
            self.bump();
            self.parse_arg_value();
            self.finish_node();
            return true;
        }

        self.start_node(SyntaxKind::UnnamedArg);
        self.parse_arg_value();
        self.finish_node();
        false
    }

    fn parse_arg_value(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_subquery(),
            SyntaxKind::BracketOpen => self.parse_array(),
            kind if ARG_RECOVERY.contains(kind) => {
                self.error_expected(DiagnosticKind::ExpectedExpression);
            }
            _ => {
                self.parse_expr();
            }
        }
    }

    /// `[ (ArgValue ("," ArgValue)*)? ]`, also a pipeline step on its own
    /// (`[count(), avg(x)]` runs several aggregates).
    pub(crate) fn parse_array(&mut self) {
        self.start_node(SyntaxKind::ArrayExpr);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.assert_current(SyntaxKind::BracketOpen);
        self.bump();

        if !self.currently_is(SyntaxKind::BracketClose) {
            loop {
                if self.should_stop() {
                    break;
                }
                self.parse_arg_value();
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        if !self.currently_is(SyntaxKind::BracketClose) && !self.should_stop() {
            let recovery = TokenSet::new(&[
                SyntaxKind::BracketClose,
                SyntaxKind::ParenClose,
                SyntaxKind::Pipe,
                SyntaxKind::Semicolon,
                SyntaxKind::BraceClose,
            ]);
            self.error_recover("`,` or `]`", recovery);
        }
        self.close_delimiter("array started here");
        self.finish_node();
    }

    /// `{ pipeline }` as an argument value.
    fn parse_subquery(&mut self) {
        self.start_node(SyntaxKind::Subquery);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.assert_current(SyntaxKind::BraceOpen);
        self.bump();

        self.with_mode(LexMode::Filter, |p| {
            p.parse_pipeline(TokenSet::single(SyntaxKind::BraceClose));
        });

        self.close_delimiter("subquery started here");
        self.finish_node();
    }
}
