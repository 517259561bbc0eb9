//! Renders a [`Doc`] to text within a line width.
//!
//! Wadler-style: each group is printed flat if it fits in the remaining width,
//! measured up to the first possible line break after the group.

use super::doc::Doc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

#[derive(Debug, Clone, Copy)]
struct Command<'d> {
    indent: usize,
    mode: Mode,
    doc: &'d Doc,
}

impl<'d> Command<'d> {
    fn new(indent: usize, mode: Mode, doc: &'d Doc) -> Self {
        Self { indent, mode, doc }
    }
}

/// Print `doc` with lines of at most `width` columns where possible and
/// `indent` spaces per nesting level.
///
/// Consecutive newlines collapse into one, trailing spaces are removed, and
/// non-empty output ends with exactly one newline.
pub fn render(doc: &Doc, width: usize, indent: usize) -> String {
    let mut printer = Printer::new(width, indent);
    printer.print(doc);
    printer.finish()
}

struct Printer {
    width: usize,
    indent_unit: usize,
    out: String,
    column: usize,
    at_line_start: bool,
    /// Indentation written lazily by the first text on a line.
    pending_indent: usize,
}

impl Printer {
    fn new(width: usize, indent_unit: usize) -> Self {
        Self {
            width,
            indent_unit,
            out: String::new(),
            column: 0,
            at_line_start: true,
            pending_indent: 0,
        }
    }

    fn print(&mut self, doc: &Doc) {
        let mut stack = vec![Command::new(0, Mode::Break, doc)];

        while let Some(Command { indent, mode, doc }) = stack.pop() {
            match doc {
                Doc::Text(text) => self.write(text),
                Doc::Space => self.space(),
                Doc::Line => match mode {
                    Mode::Flat => self.space(),
                    Mode::Break => self.newline(indent),
                },
                Doc::SoftLine => {
                    if mode == Mode::Break {
                        self.newline(indent);
                    }
                }
                Doc::HardLine => self.newline(indent),
                Doc::LineComment(text) => {
                    self.space();
                    self.write(text);
                    self.newline(indent);
                }
                Doc::Concat(docs) => {
                    stack.extend(docs.iter().rev().map(|d| Command::new(indent, mode, d)));
                }
                Doc::Indent(inner) => {
                    stack.push(Command::new(indent + self.indent_unit, mode, inner));
                }
                Doc::Group(inner) => {
                    let mode = if mode == Mode::Flat || self.fits(inner, &stack) {
                        Mode::Flat
                    } else {
                        Mode::Break
                    };
                    stack.push(Command::new(indent, mode, inner));
                }
            }
        }
    }

    /// Whether `candidate` printed flat, followed by `rest` up to its next line
    /// break, stays within the width. A hard break inside the candidate never fits.
    fn fits(&self, candidate: &Doc, rest: &[Command<'_>]) -> bool {
        let mut remaining = self.width as isize - self.column as isize;
        let mut at_line_start = self.at_line_start;

        let mut flat = vec![candidate];
        let mut tail: Vec<(Mode, &Doc)> = Vec::new();
        let mut rest_idx = rest.len();

        loop {
            let (mode, doc, in_candidate) = if let Some(doc) = flat.pop() {
                (Mode::Flat, doc, true)
            } else if let Some((mode, doc)) = tail.pop() {
                (mode, doc, false)
            } else if rest_idx > 0 {
                rest_idx -= 1;
                (rest[rest_idx].mode, rest[rest_idx].doc, false)
            } else {
                return true;
            };

            match doc {
                Doc::Text(text) => {
                    remaining -= text.chars().count() as isize;
                    at_line_start = false;
                }
                Doc::Space => {
                    if !at_line_start {
                        remaining -= 1;
                    }
                }
                Doc::Line => match mode {
                    Mode::Flat => remaining -= 1,
                    Mode::Break => return true,
                },
                Doc::SoftLine => {
                    if mode == Mode::Break {
                        return true;
                    }
                }
                Doc::HardLine | Doc::LineComment(_) => return !in_candidate,
                Doc::Concat(docs) => {
                    if in_candidate {
                        flat.extend(docs.iter().rev());
                    } else {
                        tail.extend(docs.iter().rev().map(|d| (mode, d)));
                    }
                }
                Doc::Group(inner) | Doc::Indent(inner) => {
                    if in_candidate {
                        flat.push(&**inner);
                    } else {
                        tail.push((mode, &**inner));
                    }
                }
            }

            if remaining < 0 {
                return false;
            }
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.out.extend(std::iter::repeat_n(' ', self.pending_indent));
            self.column = self.pending_indent;
            self.at_line_start = false;
        }
        self.out.push_str(text);
        self.column += text.chars().count();
    }

    fn space(&mut self) {
        if self.at_line_start || self.out.ends_with(' ') {
            return;
        }
        self.out.push(' ');
        self.column += 1;
    }

    fn newline(&mut self, indent: usize) {
        if !self.at_line_start {
            self.trim_trailing_spaces();
            self.out.push('\n');
            self.at_line_start = true;
        }
        self.pending_indent = indent;
        self.column = indent;
    }

    fn trim_trailing_spaces(&mut self) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
    }

    fn finish(mut self) -> String {
        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out
    }
}
