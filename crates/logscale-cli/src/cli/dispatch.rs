//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::format::FormatArgs;
use crate::commands::parse::{OutputFormat, ParseArgs};
use crate::commands::tokenize::TokenizeArgs;

pub struct FormatParams {
    pub files: Vec<PathBuf>,
    pub in_place: bool,
    pub check: bool,
    pub width: usize,
    pub indent: usize,
}

impl FormatParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: files(m),
            in_place: m.get_flag("in_place"),
            check: m.get_flag("check"),
            width: m.get_one::<usize>("width").copied().unwrap_or(80),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(2),
        }
    }
}

impl From<FormatParams> for FormatArgs {
    fn from(p: FormatParams) -> Self {
        Self {
            files: p.files,
            in_place: p.in_place,
            check: p.check,
            width: p.width,
            indent: p.indent,
        }
    }
}

pub struct ParseParams {
    pub files: Vec<PathBuf>,
    pub output: OutputFormat,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let output = match m.get_one::<String>("output").map(|s| s.as_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Sexp,
        };
        Self {
            files: files(m),
            output,
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            files: p.files,
            output: p.output,
        }
    }
}

pub struct CheckParams {
    pub files: Vec<PathBuf>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self { files: files(m) }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            color: ColorChoice::Auto.should_colorize_stderr(),
        }
    }
}

pub struct TokenizeParams {
    pub files: Vec<PathBuf>,
    pub color: ColorChoice,
}

impl TokenizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let color = if m.get_flag("no_color") {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };
        Self {
            files: files(m),
            color,
        }
    }
}

impl From<TokenizeParams> for TokenizeArgs {
    fn from(p: TokenizeParams) -> Self {
        Self {
            files: p.files,
            color: p.color.should_colorize(),
        }
    }
}

fn files(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
