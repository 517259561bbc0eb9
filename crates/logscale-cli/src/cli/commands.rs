//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("logscale-query")
        .about("Parse and format LogScale queries")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(format_command())
        .subcommand(parse_command())
        .subcommand(check_command())
        .subcommand(tokenize_command())
}

/// Format queries to their canonical layout.
pub fn format_command() -> Command {
    Command::new("format")
        .visible_alias("fmt")
        .about("Format LogScale query files")
        .override_usage(
            "\
  logscale-query format [FILES]...
  logscale-query format --check [FILES]...
  logscale-query format -i <FILES>...",
        )
        .after_help(
            r#"EXAMPLES:
  logscale-query format query.lql            # print formatted query
  logscale-query fmt -i a.lql b.lql          # rewrite files
  logscale-query format --check *.lql        # CI check, exit 1 if unformatted
  echo 'a|count()' | logscale-query format   # from stdin"#,
        )
        .arg(files_arg())
        .arg(in_place_arg())
        .arg(check_arg())
        .arg(width_arg())
        .arg(indent_arg())
}

/// Print the syntax tree.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse LogScale queries and display the syntax tree")
        .after_help(
            r#"EXAMPLES:
  logscale-query parse query.lql             # S-expression
  logscale-query parse -o json query.lql     # JSON tree"#,
        )
        .arg(files_arg())
        .arg(output_arg())
}

/// Validate queries.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate LogScale queries for syntax errors")
        .arg(files_arg())
}

/// Show token labels above the source text.
pub fn tokenize_command() -> Command {
    Command::new("tokenize")
        .visible_alias("tok")
        .about("Show each token with its syntax label above it")
        .arg(files_arg())
        .arg(no_color_arg())
}
