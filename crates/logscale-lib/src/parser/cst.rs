//! Syntax kinds for the query language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds
//! (from the parser). Logos derives recognition for the expression-mode token
//! grammar; filter-mode words and regex pieces are produced by the lexer's own
//! scanner and carry no logos attributes. `LogScale` implements Rowan's
//! `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("|")]
    Pipe,

    /// `:=` eval shorthand
    #[token(":=")]
    ColonEq,

    /// `=~` field shorthand
    #[token("=~")]
    EqTilde,

    /// `=>` match arm separator
    #[token("=>")]
    FatArrow,

    /// Joins namespaced names: `text:contains`
    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<")]
    Lt,

    #[token("<=")]
    LtEq,

    #[token(">")]
    Gt,

    #[token(">=")]
    GtEq,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    /// Division in expressions; regex delimiter in filters.
    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("!")]
    Bang,

    #[token("$")]
    Dollar,

    #[token("?")]
    Question,

    #[token("and", ignore(case))]
    KwAnd,

    #[token("or", ignore(case))]
    KwOr,

    #[token("not", ignore(case))]
    KwNot,

    #[token("case")]
    KwCase,

    #[token("match")]
    KwMatch,

    #[token("like")]
    KwLike,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    /// Digits with an optional fraction. Wins over `Word` on equal length.
    #[regex(r"[0-9]+(\.[0-9]+)?", priority = 3)]
    NumberLit,

    /// Field-name characters. Keywords are defined above so they take precedence.
    #[regex(r"[A-Za-z0-9_.#%&@\\^\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{FF}]+", priority = 1)]
    Word,

    /// Unquoted pattern containing `* + - ~ ¬` (filter mode only)
    PatternWord,

    #[regex(r#""(?:[^"\\\n]|\\[^\n])*""#)]
    StringLit,

    /// Quoted string cut short by a newline or end of input
    #[regex(r#""(?:[^"\\\n]|\\[^\n])*"#, allow_greedy = true)]
    UnterminatedString,

    RegexBody,
    RegexFlags,

    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Query,
    Pipeline,
    AndFilter,
    OrFilter,
    NotFilter,
    FieldComparison,
    FreeTextPattern,
    ParenthesizedFilter,
    BooleanFilter,
    Pattern,
    AnchoredPattern,
    Wildcard,
    ComparisonExpr,
    AdditiveExpr,
    MultiplicativeExpr,
    UnaryExpr,
    ParenExpr,
    FunctionCall,
    ArgList,
    NamedArg,
    UnnamedArg,
    EvalShorthand,
    EvalFunctionShorthand,
    FieldShorthand,
    ArrayExpr,
    Subquery,
    CaseExpr,
    MatchExpr,
    MatchArm,
    SavedQuery,
    QueryParameter,
    Regex,
    Identifier,
    QuotedString,
    Number,
    FieldName,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage | UnterminatedString)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            KwAnd | KwOr | KwNot | KwCase | KwMatch | KwLike | KwTrue | KwFalse
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (Query as u16)
    }

    /// Tokens whose text is fixed by their kind (punctuation and keywords).
    #[inline]
    pub fn is_fixed_text(self) -> bool {
        (self as u16) <= (KwFalse as u16)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogScale {}

impl Language for LogScale {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<LogScale>;
pub type SyntaxToken = rowan::SyntaxToken<LogScale>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can start a filter operand.
    pub const FILTER_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        KwNot,
        Bang,
        KwTrue,
        KwFalse,
        KwMatch,
        Word,
        PatternWord,
        NumberLit,
        StringLit,
        UnterminatedString,
        Slash,
        Question,
    ]);

    /// Tokens that can start a pipeline step.
    pub const STEP_FIRST: TokenSet =
        FILTER_FIRST.union(TokenSet::new(&[KwCase, BracketOpen, Dollar]));

    /// Tokens that can start an expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        Minus,
        Bang,
        NumberLit,
        StringLit,
        UnterminatedString,
        Word,
        KwMatch,
        KwTrue,
        KwFalse,
        Question,
    ]);

    /// Tokens that can start an argument value.
    pub const ARG_FIRST: TokenSet = EXPR_FIRST.union(TokenSet::new(&[BraceOpen, BracketOpen]));

    pub const FIELD_COMPARISON_OPS: TokenSet =
        TokenSet::new(&[Equals, NotEq, Lt, LtEq, Gt, GtEq, KwLike]);

    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[EqEq, NotEq, Lt, LtEq, Gt, GtEq]);

    pub const ADDITIVE_OPS: TokenSet = TokenSet::new(&[Plus, Minus]);

    pub const MULTIPLICATIVE_OPS: TokenSet = TokenSet::new(&[Star, Slash, Percent]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);

    /// Where a pipeline step ends.
    pub const STEP_END: TokenSet = TokenSet::new(&[Pipe, Semicolon, BraceClose, ParenClose]);

    /// Synchronisation points when skipping a broken step.
    pub const STEP_RECOVERY: TokenSet = TokenSet::new(&[Pipe, Semicolon, BraceClose]);

    pub const ARG_RECOVERY: TokenSet =
        TokenSet::new(&[Comma, ParenClose, BracketClose, BraceClose, Pipe]);
}
