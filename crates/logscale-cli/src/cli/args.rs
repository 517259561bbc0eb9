//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input files (positional, any number). Stdin when omitted.
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILES")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Input files (reads stdin if omitted)")
}

/// Rewrite files in place (-i/--in-place).
pub fn in_place_arg() -> Arg {
    Arg::new("in_place")
        .short('i')
        .long("in-place")
        .action(ArgAction::SetTrue)
        .conflicts_with("check")
        .help("Edit files in place instead of writing to stdout")
}

/// Report unformatted inputs (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Check that inputs are already formatted (exit 1 if not)")
}

/// Preferred line width (--width).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .long("width")
        .value_name("N")
        .default_value("80")
        .value_parser(value_parser!(usize))
        .help("Preferred maximum line width")
}

/// Spaces per indentation level (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("2")
        .value_parser(value_parser!(usize))
        .help("Spaces per indentation level")
}

/// Tree output format (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FORMAT")
        .default_value("sexp")
        .value_parser(["sexp", "json"])
        .help("Output format")
}

/// Disable colors (--no-color).
pub fn no_color_arg() -> Arg {
    Arg::new("no_color")
        .long("no-color")
        .action(ArgAction::SetTrue)
        .help("Disable colored output")
}
