use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::LexMode;

impl Parser<'_> {
    /// `/body/flags`. Must be entered in filter mode, where the lexer has
    /// already split the literal into its pieces.
    pub(crate) fn parse_regex(&mut self) {
        self.parse_regex_as(SyntaxKind::Regex);
    }

    /// Consume a regex literal into a node of `kind` (`Regex`, or `Error` where
    /// a regex is not allowed).
    pub(crate) fn parse_regex_as(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        let open = self.current_span();
        self.assert_current(SyntaxKind::Slash);
        self.bump();

        // The pieces are contiguous; trivia in between means the literal ended.
        self.eat_adjacent(SyntaxKind::RegexBody);
        if self.eat_adjacent(SyntaxKind::Slash) {
            self.eat_adjacent(SyntaxKind::RegexFlags);
        } else {
            let end = self.last_non_trivia_end().unwrap_or(open.end());
            let range = TextRange::new(open.start(), end);
            self.error_at(DiagnosticKind::UnterminatedRegex, range, None);
        }
        self.finish_node();
    }

    pub(crate) fn parse_quoted_string(&mut self) {
        if self.currently_is(SyntaxKind::UnterminatedString) {
            let range = self.current_span();
            self.error_at(DiagnosticKind::UnterminatedString, range, None);
        }
        self.bump_wrapped(SyntaxKind::QuotedString);
    }

    /// Function or saved-query name: `Word (":" Word)*` with no trivia between
    /// segments, as in `text:contains`.
    pub(crate) fn parse_name(&mut self) {
        self.start_node(SyntaxKind::Identifier);
        self.bump();
        while self.trivia_buffer.is_empty()
            && self.nth_raw(0) == SyntaxKind::Colon
            && self.nth_raw(1) == SyntaxKind::Word
        {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    /// `?name` or `?{name=default}`.
    pub(crate) fn parse_query_parameter(&mut self) {
        self.start_node(SyntaxKind::QueryParameter);
        self.assert_current(SyntaxKind::Question);
        self.bump();

        if self.currently_is(SyntaxKind::Word) {
            self.bump_wrapped(SyntaxKind::Identifier);
        } else if self.currently_is(SyntaxKind::BraceOpen) {
            self.push_delimiter(SyntaxKind::BraceOpen);
            self.bump();
            if self.currently_is(SyntaxKind::Word) {
                self.bump_wrapped(SyntaxKind::Identifier);
            } else {
                self.error_expected(DiagnosticKind::ExpectedName);
            }
            if self.eat_token(SyntaxKind::Equals) {
                self.with_mode(LexMode::Filter, |p| p.parse_default_value());
            }
            self.close_delimiter("parameter started here");
        } else {
            self.error_expected(DiagnosticKind::ExpectedName);
        }
        self.finish_node();
    }

    fn parse_default_value(&mut self) {
        match self.current() {
            SyntaxKind::StringLit | SyntaxKind::UnterminatedString => self.parse_quoted_string(),
            SyntaxKind::Word
            | SyntaxKind::PatternWord
            | SyntaxKind::NumberLit
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse => self.bump_wrapped(SyntaxKind::Pattern),
            _ => self.error_expected(DiagnosticKind::ExpectedValue),
        }
    }
}
