//! ANSI color codes for terminal output.
//!
//! Semantic roles used by the token visualizer:
//! - Cyan: identifiers and field names
//! - Blue: function names
//! - Green: quoted strings
//! - Yellow: numbers and boolean literals
//! - Magenta: unquoted patterns
//! - Red: regex bodies and flags
//! - Dim: comments and punctuation

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes (no RGB) so it reads in both light
/// and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub magenta: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[94m",
        cyan: "\x1b[36m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        magenta: "\x1b[35m",
        red: "\x1b[31m",
        dim: "\x1b[90m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        cyan: "",
        green: "",
        yellow: "",
        magenta: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
