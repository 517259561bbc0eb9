use rowan::TextRange;

/// Everything the parser can complain about.
///
/// Declaration order is priority order: of two overlapping diagnostics, the
/// one declared first survives filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unterminated constructs cascade through the rest of the query
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,
    UnterminatedString,
    UnterminatedRegex,

    // Something required is missing
    ExpectedStep,
    ExpectedFilter,
    ExpectedExpression,
    ExpectedValue,
    ExpectedFunctionCall,
    ExpectedGuard,
    ExpectedName,

    // Well-formed tokens in a shape the language rejects
    InvalidRegexContext,
    ReservedWordMisuse,
    MultipleUnnamedArgs,

    // Leftover input
    UnexpectedToken,
    InvalidCharacter,
}

/// Coarse grouping of diagnostic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The text does not form valid tokens.
    Lex,
    /// Tokens in an order the grammar does not accept.
    Syntax,
    /// Grammatical, but in a position the language forbids.
    SemanticShape,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lex => write!(f, "lex error"),
            ErrorCategory::Syntax => write!(f, "syntax error"),
            ErrorCategory::SemanticShape => write!(f, "semantic shape error"),
        }
    }
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnterminatedString | Self::UnterminatedRegex | Self::InvalidCharacter => {
                ErrorCategory::Lex
            }
            Self::InvalidRegexContext | Self::ReservedWordMisuse | Self::MultipleUnnamedArgs => {
                ErrorCategory::SemanticShape
            }
            _ => ErrorCategory::Syntax,
        }
    }

    /// Earlier-declared kinds win over later ones.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Unclosed delimiters. They yield to a root-cause error reported at the
    /// same offset.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedParen | Self::UnclosedBracket | Self::UnclosedBrace
        )
    }

    /// The `Expected*` family.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedStep
                | Self::ExpectedFilter
                | Self::ExpectedExpression
                | Self::ExpectedValue
                | Self::ExpectedFunctionCall
                | Self::ExpectedGuard
                | Self::ExpectedName
        )
    }

    /// Hint attached to every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRegexContext => Some("use `regex()` or a filter step to match a regex"),
            Self::MultipleUnnamedArgs => Some("only the first argument may omit its name"),
            _ => None,
        }
    }

    /// Message used when the reporter gives no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedRegex => "unterminated regex",

            Self::ExpectedStep => "expected a pipeline step",
            Self::ExpectedFilter => "expected a filter",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedValue => "expected a value",
            Self::ExpectedFunctionCall => "expected a function call",
            Self::ExpectedGuard => "expected a match guard",
            Self::ExpectedName => "expected a name",

            Self::InvalidRegexContext => "regex is not valid in an expression",
            Self::ReservedWordMisuse => "reserved function name used as free text",
            Self::MultipleUnnamedArgs => "only one argument may be unnamed",

            Self::UnexpectedToken => "unexpected token",
            Self::InvalidCharacter => "invalid character",
        }
    }

    /// Message shape around the reporter's detail, which replaces `{}`.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedParen | Self::UnclosedBracket | Self::UnclosedBrace => {
                format!("{}; {{}}", self.fallback_message())
            }

            // Detail reads "found `x`"
            k if k.is_root_cause_error() => format!("{}, {{}}", self.fallback_message()),

            Self::ReservedWordMisuse => "`{}` is a reserved function name".to_string(),

            // Detail is the whole "expected X, found Y" sentence
            Self::UnexpectedToken => "{}".to_string(),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// `fallback_message` without detail, `custom_message` filled in with it.
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

/// A single positioned diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Defaults to `range`; the parser widens it
    /// to the innermost open delimiter so errors inside an unclosed group collapse.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
