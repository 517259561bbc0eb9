//! Diagnostic rendering: annotate-snippets reports, or one plain line each.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Renders diagnostics as source snippets when a source is attached,
/// as plain `error at S..E: message` lines otherwise.
pub struct DiagnosticsPrinter<'a> {
    diagnostics: &'a Diagnostics,
    source: Option<&'a str>,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub fn new(diagnostics: &'a Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut first = true;
        for diag in self.diagnostics.iter() {
            if !first {
                w.write_char('\n')?;
            }
            first = false;
            write!(w, "{}", renderer.render(&self.groups(diag, source)))?;
        }
        Ok(())
    }

    /// Title with the underlined source, then the fix and hints as help groups.
    ///
    /// The message lives in the title only; the caret carries no label.
    fn groups(&self, diag: &'a DiagnosticMessage, source: &'a str) -> Vec<Group<'a>> {
        let span = caret_span(diag.range, source.len());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(span.clone()));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        snippet = diag.related.iter().fold(snippet, |snippet, related| {
            snippet.annotation(
                AnnotationKind::Context
                    .span(caret_span(related.range, source.len()))
                    .label(&related.message),
            )
        });

        let title = match diag.severity() {
            Severity::Error => Level::ERROR,
            Severity::Warning => Level::WARNING,
        }
        .primary_title(&diag.message);
        let mut groups = vec![title.element(snippet)];

        if let Some(fix) = &diag.fix {
            let patched = Snippet::source(source)
                .line_start(1)
                .patch(Patch::new(span, &fix.replacement));
            groups.push(Level::HELP.secondary_title(&fix.description).element(patched));
        }
        groups.extend(
            diag.hints
                .iter()
                .map(|hint| Group::with_title(Level::HELP.secondary_title(hint))),
        );
        groups
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

/// Source byte range to underline; empty ranges still get one caret.
fn caret_span(range: TextRange, len: usize) -> std::ops::Range<usize> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    if start < end {
        start..end
    } else {
        start..(start + 1).min(len)
    }
}
