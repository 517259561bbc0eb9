//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{LexMode, Lexer, Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
///
/// Tokens are pulled from the lexer on demand under the current [`LexMode`].
/// Switching modes discards lookahead that has not been consumed yet and
/// re-lexes it, so a token is only ever produced under the mode in force when
/// the parser reaches it.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    lexer: Lexer<'src>,
    mode: LexMode,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            mode: LexMode::Filter,
            tokens: Vec::new(),
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub(super) fn finish(mut self) -> Result<(GreenNode, Diagnostics), Error> {
        self.drain_trivia();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        Ok((self.builder.finish(), self.diagnostics))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Switch the lexer mode for tokens not consumed yet.
    pub(super) fn set_mode(&mut self, mode: LexMode) {
        if self.mode == mode {
            return;
        }
        let offset = self
            .tokens
            .get(self.pos)
            .map_or_else(|| self.lexer.offset(), |t| t.span.start().into());
        tracing::trace!(?mode, offset, "lexer mode switch");
        self.mode = mode;
        self.tokens.truncate(self.pos);
        self.lexer.reset(offset);
    }

    /// Run `f` under `mode`, restoring the previous mode afterwards.
    pub(super) fn with_mode<T>(&mut self, mode: LexMode, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.mode;
        self.set_mode(mode);
        let result = f(self);
        self.set_mode(saved);
        result
    }

    /// Make sure the raw token at `pos + lookahead` is lexed, if the input has one.
    fn fill(&mut self, lookahead: usize) {
        while self.tokens.len() <= self.pos + lookahead {
            match self.lexer.next_token(self.mode) {
                Some(token) => self.tokens.push(token),
                None => break,
            }
        }
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    /// Raw lookahead, trivia included. `Error` past the end of input.
    pub(super) fn nth_raw(&mut self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.fill(lookahead);
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Source text of the current token, empty at end of input.
    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&mut self) -> bool {
        self.fill(0);
        self.pos >= self.tokens.len()
    }

    /// Trailing trivia does not count as input left to parse.
    pub(super) fn should_stop(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.has_fatal_error() || self.eof()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut offset = 0;
        loop {
            self.fill(offset);
            let Some(token) = self.tokens.get(self.pos + offset) else {
                return SyntaxKind::Error;
            };
            if !token.kind.is_trivia() {
                if count == n {
                    return token.kind;
                }
                count += 1;
            }
            offset += 1;
        }
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        loop {
            self.fill(0);
            match self.tokens.get(self.pos) {
                Some(token) if token.kind.is_trivia() => {
                    self.trivia_buffer.push(*token);
                    self.pos += 1;
                }
                _ => break,
            }
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    /// Consume the next non-trivia token; trivia before it lands in the parent.
    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    /// Wrap the current token in a node of its own.
    pub(super) fn bump_wrapped(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` only if it directly follows the previous token (no trivia).
    pub(super) fn eat_adjacent(&mut self, kind: SyntaxKind) -> bool {
        if self.trivia_buffer.is_empty() && self.nth_raw(0) == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        let found = self.found_description();
        self.error_msg(
            DiagnosticKind::UnexpectedToken,
            format!("expected {}, found {}", what, found),
        );
        false
    }

    /// How the current token reads in an "expected X, found Y" message.
    pub(super) fn found_description(&mut self) -> String {
        if self.eof() {
            return "end of input".to_string();
        }
        let text = self.current_text();
        let mut chars = text.chars();
        let short: String = chars.by_ref().take(24).collect();
        if chars.next().is_some() {
            format!("`{}...`", short)
        } else {
            format!("`{}`", short)
        }
    }

    pub(super) fn current_suppression_span(&mut self) -> TextRange {
        match self.delimiter_stack.last() {
            Some(d) => TextRange::new(d.span.start(), self.eof_offset()),
            None => self.current_span(),
        }
    }

    pub(super) fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    fn get_error_ranges(&mut self) -> Option<(TextRange, TextRange)> {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return None;
        }
        let suppression = self.current_suppression_span();
        Some((range, suppression))
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let Some((range, suppression)) = self.get_error_ranges() else {
            return;
        };
        self.diagnostics
            .report(kind, range)
            .message(message)
            .suppression_range(suppression)
            .emit();
    }

    /// Root-cause error reading "expected X, found Y" at the current token.
    pub(super) fn error_expected(&mut self, kind: DiagnosticKind) {
        let found = format!("found {}", self.found_description());
        self.error_msg(kind, found);
    }

    /// Report at an explicit range, e.g. a whole argument or literal.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange, message: Option<&str>) {
        if !self.should_report(range.start()) {
            return;
        }
        let builder = self.diagnostics.report(kind, range);
        match message {
            Some(message) => builder.message(message).emit(),
            None => builder.emit(),
        }
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Report the current token and skip to the next token in `recovery`.
    ///
    /// Skipped tokens are wrapped in a single `Error` node. Unrecognised characters
    /// report `InvalidCharacter`, anything else `UnexpectedToken` with `expected`.
    pub(super) fn error_recover(&mut self, expected: &str, recovery: TokenSet) {
        if self.currently_is(SyntaxKind::Garbage) {
            let text = self.current_text();
            self.error_msg(DiagnosticKind::InvalidCharacter, format!("`{}`", text));
        } else {
            let found = self.found_description();
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                format!("expected {}, found {}", expected, found),
            );
        }

        if self.currently_is_one_of(recovery) || self.should_stop() {
            return;
        }

        self.start_node(SyntaxKind::Error);
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Eat the closing delimiter for the innermost open one, or report it unclosed.
    pub(super) fn close_delimiter(&mut self, related_msg: &str) {
        let Some(open) = self.pop_delimiter() else {
            return;
        };
        let (close, kind) = match open.kind {
            SyntaxKind::ParenOpen => (SyntaxKind::ParenClose, DiagnosticKind::UnclosedParen),
            SyntaxKind::BracketOpen => (SyntaxKind::BracketClose, DiagnosticKind::UnclosedBracket),
            _ => (SyntaxKind::BraceClose, DiagnosticKind::UnclosedBrace),
        };
        if self.eat_token(close) {
            return;
        }
        self.error_unclosed_delimiter(kind, related_msg, open.span);
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let end = self.last_non_trivia_end().unwrap_or(open_range.end());
        if !self.should_report(open_range.start()) {
            return;
        }
        // Use full range for easier downstream error suppression
        let full_range = TextRange::new(open_range.start(), end.max(open_range.end()));
        self.diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open_range)
            .emit();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }
}
