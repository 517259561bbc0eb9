mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::{CheckParams, FormatParams, ParseParams, TokenizeParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Never,
}

impl ColorChoice {
    /// Colors for stdout output, e.g. the token view.
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }

    /// Colors for diagnostics, which go to stderr.
    pub fn should_colorize_stderr(self) -> bool {
        match self {
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}
