//! Lexer for the query language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Modes
//!
//! What a `/` or a `-` means depends on where the parser stands, so the lexer is
//! driven one token at a time with a [`LexMode`] chosen by the parser:
//!
//! - [`LexMode::Expr`]: the Logos grammar on [`SyntaxKind`]. `/` is division and
//!   `* + -` are operators.
//! - [`LexMode::Filter`]: words may contain the pattern characters `* + - ~ ¬`, and
//!   a `/` that does not open a comment starts a regex literal, which is split
//!   into `Slash RegexBody Slash RegexFlags?`.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. Unterminated strings and regexes are still
//! tokenized; the parser reports them.

use std::collections::VecDeque;
use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Whether a regex literal may start at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Filters, match guards and pipeline step starts.
    #[default]
    Filter,
    /// Expression operands: function arguments, `:=` right-hand sides.
    Expr,
}

/// Field-name characters: ASCII alphanumerics, `_ . # % & @ \ ^` and Latin-1 letters.
pub fn is_field_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '.' | '#' | '%' | '&' | '@' | '\\' | '^')
        || matches!(c, '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{FF}')
}

/// Unquoted pattern characters: field characters plus `* + - ~ ¬`.
pub fn is_pattern_char(c: char) -> bool {
    is_field_char(c) || matches!(c, '*' | '+' | '-' | '~' | '¬')
}

const REGEX_FLAGS: &[u8] = b"dmi";

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// On-demand tokenizer. Not restartable except through [`Lexer::reset`].
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    offset: usize,
    /// Regex pieces already scanned but not yet handed out.
    pending: VecDeque<Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            pending: VecDeque::new(),
        }
    }

    /// Byte offset of the next token to be produced.
    pub fn offset(&self) -> usize {
        self.pending
            .front()
            .map_or(self.offset, |t| t.span.start().into())
    }

    /// Rewind (or skip) to `offset`, dropping anything scanned past it.
    pub fn reset(&mut self, offset: usize) {
        self.offset = offset;
        self.pending.clear();
    }

    pub fn next_token(&mut self, mode: LexMode) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.offset >= self.source.len() {
            return None;
        }

        if mode == LexMode::Filter
            && let Some(token) = self.scan_filter_token()
        {
            return Some(token);
        }
        Some(self.scan_logos_token(mode))
    }

    /// Words and regex literals, the tokens whose shape differs in filter mode.
    fn scan_filter_token(&mut self) -> Option<Token> {
        let rest = &self.source[self.offset..];
        let first = rest.chars().next()?;

        if first == '/' {
            if rest[1..].starts_with(['/', '*']) {
                return None;
            }
            return Some(self.scan_regex());
        }

        if !is_pattern_char(first) {
            return None;
        }

        let len = rest.find(|c| !is_pattern_char(c)).unwrap_or(rest.len());
        let kind = classify_word(&rest[..len]);
        Some(self.emit(kind, len))
    }

    /// `/body/flags`. The body ends at an unescaped `/`; a line break or end of input
    /// leaves the literal unterminated (no closing `Slash`).
    fn scan_regex(&mut self) -> Token {
        let start = self.offset;
        let bytes = self.source[start..].as_bytes();

        let mut i = 1;
        let mut closed = false;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if i + 1 < bytes.len() && !matches!(bytes[i + 1], b'\n' | b'\r') => i += 2,
                b'/' => {
                    closed = true;
                    break;
                }
                b'\n' | b'\r' => break,
                _ => i += 1,
            }
        }
        // An escape before a multi-byte character may overshoot the end.
        let body_end = i.min(bytes.len());

        let open = Token::new(SyntaxKind::Slash, range_to_text_range(start..start + 1));
        if body_end > 1 {
            self.pending.push_back(Token::new(
                SyntaxKind::RegexBody,
                range_to_text_range(start + 1..start + body_end),
            ));
        }

        let mut end = body_end;
        if closed {
            self.pending.push_back(Token::new(
                SyntaxKind::Slash,
                range_to_text_range(start + body_end..start + body_end + 1),
            ));
            end += 1;
            let flags_len = bytes[end..]
                .iter()
                .take_while(|b| REGEX_FLAGS.contains(b))
                .count();
            if flags_len > 0 {
                self.pending.push_back(Token::new(
                    SyntaxKind::RegexFlags,
                    range_to_text_range(start + end..start + end + flags_len),
                ));
                end += flags_len;
            }
        }

        self.offset = start + end;
        open
    }

    fn scan_logos_token(&mut self, mode: LexMode) -> Token {
        let rest = &self.source[self.offset..];
        let mut lexer = SyntaxKind::lexer(rest);

        match lexer.next() {
            Some(Ok(kind)) => {
                let len = lexer.span().end;
                self.emit(kind, len)
            }
            Some(Err(())) => {
                let mut len = lexer.span().end;
                while let Some(Err(())) = lexer.next() {
                    let span = lexer.span();
                    // In filter mode pattern characters start a word of their own.
                    if mode == LexMode::Filter
                        && rest
                            .get(span.start..)
                            .is_some_and(|s| s.starts_with(is_pattern_char))
                    {
                        break;
                    }
                    len = span.end;
                }
                while !rest.is_char_boundary(len) {
                    len += 1;
                }
                self.emit(SyntaxKind::Garbage, len)
            }
            None => self.emit(SyntaxKind::Garbage, rest.len()),
        }
    }

    fn emit(&mut self, kind: SyntaxKind, len: usize) -> Token {
        let start = self.offset;
        self.offset += len;
        Token::new(kind, range_to_text_range(start..self.offset))
    }
}

/// Number, keyword, field word or pattern, decided on the whole scanned run.
fn classify_word(text: &str) -> SyntaxKind {
    if is_number(text) {
        return SyntaxKind::NumberLit;
    }
    if let Some(keyword) = keyword(text) {
        return keyword;
    }
    if text.chars().all(is_field_char) {
        SyntaxKind::Word
    } else {
        SyntaxKind::PatternWord
    }
}

fn is_number(text: &str) -> bool {
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

fn keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "case" => SyntaxKind::KwCase,
        "match" => SyntaxKind::KwMatch,
        "like" => SyntaxKind::KwLike,
        "true" => SyntaxKind::KwTrue,
        "false" => SyntaxKind::KwFalse,
        _ if text.eq_ignore_ascii_case("and") => SyntaxKind::KwAnd,
        _ if text.eq_ignore_ascii_case("or") => SyntaxKind::KwOr,
        _ if text.eq_ignore_ascii_case("not") => SyntaxKind::KwNot,
        _ => return None,
    };
    Some(kind)
}

/// Tokenizes the whole source in a single mode.
///
/// The parser drives [`Lexer`] directly; this is for inspection and tests.
pub fn lex(source: &str, mode: LexMode) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    std::iter::from_fn(|| lexer.next_token(mode)).collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
