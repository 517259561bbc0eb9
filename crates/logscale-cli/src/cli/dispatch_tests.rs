//! Tests for CLI dispatch logic: flags, defaults and params extraction.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, format_command, parse_command, tokenize_command};
use crate::commands::parse::OutputFormat;

#[test]
fn format_defaults() {
    let m = format_command()
        .try_get_matches_from(["format", "a.lql"])
        .unwrap();
    let params = FormatParams::from_matches(&m);

    assert_eq!(params.files, [PathBuf::from("a.lql")]);
    assert!(!params.in_place);
    assert!(!params.check);
    assert_eq!(params.width, 80);
    assert_eq!(params.indent, 2);
}

#[test]
fn format_layout_flags() {
    let m = format_command()
        .try_get_matches_from(["format", "-i", "--width", "40", "--indent", "4", "a.lql", "b.lql"])
        .unwrap();
    let params = FormatParams::from_matches(&m);

    assert_eq!(params.files, [PathBuf::from("a.lql"), PathBuf::from("b.lql")]);
    assert!(params.in_place);
    assert_eq!(params.width, 40);
    assert_eq!(params.indent, 4);
}

#[test]
fn format_without_files_reads_stdin() {
    let m = format_command().try_get_matches_from(["format"]).unwrap();
    let params = FormatParams::from_matches(&m);

    assert!(params.files.is_empty());
}

#[test]
fn in_place_conflicts_with_check() {
    let result = format_command().try_get_matches_from(["format", "-i", "--check", "a.lql"]);

    assert!(result.is_err(), "-i and --check should conflict");
}

#[test]
fn width_must_be_a_number() {
    let result = format_command().try_get_matches_from(["format", "--width", "wide"]);

    assert!(result.is_err());
}

#[test]
fn parse_output_format() {
    let m = parse_command().try_get_matches_from(["parse", "q.lql"]).unwrap();
    assert_eq!(ParseParams::from_matches(&m).output, OutputFormat::Sexp);

    let m = parse_command()
        .try_get_matches_from(["parse", "-o", "json", "q.lql"])
        .unwrap();
    assert_eq!(ParseParams::from_matches(&m).output, OutputFormat::Json);

    let result = parse_command().try_get_matches_from(["parse", "-o", "yaml"]);
    assert!(result.is_err(), "unknown output formats are rejected");
}

#[test]
fn check_takes_files() {
    let m = check_command()
        .try_get_matches_from(["check", "a.lql", "b.lql"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.files.len(), 2);
}

#[test]
fn tokenize_color_choice() {
    let m = tokenize_command().try_get_matches_from(["tokenize"]).unwrap();
    assert_eq!(TokenizeParams::from_matches(&m).color, ColorChoice::Auto);

    let m = tokenize_command()
        .try_get_matches_from(["tokenize", "--no-color"])
        .unwrap();
    assert_eq!(TokenizeParams::from_matches(&m).color, ColorChoice::Never);
}

#[test]
fn aliases_resolve_to_commands() {
    let m = build_cli()
        .try_get_matches_from(["logscale-query", "fmt", "a.lql"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("format"));

    let m = build_cli()
        .try_get_matches_from(["logscale-query", "tok", "a.lql"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("tokenize"));
}

#[test]
fn no_command_is_not_an_error() {
    let m = build_cli().try_get_matches_from(["logscale-query"]).unwrap();

    assert_eq!(m.subcommand_name(), None);
    let help = build_cli().render_help().to_string();
    assert!(help.contains("format"), "{help}");
    assert!(help.contains("tokenize"), "{help}");
}

#[test]
fn never_colorizes_when_disabled() {
    assert!(!ColorChoice::Never.should_colorize());
    assert!(!ColorChoice::Never.should_colorize_stderr());
}
