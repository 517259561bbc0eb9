use std::fs;
use std::path::PathBuf;

use logscale_lib::FormatOptions;

use super::input::{self, Input};
use super::run_common::{parse_input, render_diagnostics};

pub struct FormatArgs {
    pub files: Vec<PathBuf>,
    pub in_place: bool,
    pub check: bool,
    pub width: usize,
    pub indent: usize,
}

/// What formatting one input produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Formatted {
    /// Canonical text, and whether it differs from the input.
    Text { text: String, changed: bool },
    /// The input has syntax errors; rendered diagnostics.
    Invalid(String),
    /// The parser ran out of fuel (already reported).
    Failed,
}

pub fn format_input(input: &Input, options: &FormatOptions, color: bool) -> Formatted {
    let Some(query) = parse_input(input) else {
        return Formatted::Failed;
    };
    match query.format_with(options) {
        Ok(text) => {
            let changed = text != input.content;
            Formatted::Text { text, changed }
        }
        Err(_) => Formatted::Invalid(render_diagnostics(&query, &input.label, color)),
    }
}

pub fn run(args: FormatArgs) -> i32 {
    if args.in_place && args.files.is_empty() {
        eprintln!("error: --in-place requires file arguments");
        return 1;
    }

    let inputs = match input::load_or_report(&args.files) {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };

    let options = FormatOptions::new().width(args.width).indent(args.indent);
    let color = crate::cli::ColorChoice::Auto.should_colorize_stderr();
    let mut exit_code = 0;

    for input in &inputs {
        let (text, changed) = match format_input(input, &options, color) {
            Formatted::Text { text, changed } => (text, changed),
            Formatted::Invalid(rendered) => {
                eprintln!("{}", rendered);
                exit_code = 1;
                continue;
            }
            Formatted::Failed => {
                exit_code = 1;
                continue;
            }
        };

        if args.check {
            if changed {
                eprintln!("would reformat {}", input.label);
                exit_code = 1;
            }
        } else if args.in_place {
            let Some(path) = &input.path else { continue };
            if !changed {
                continue;
            }
            if let Err(e) = fs::write(path, &text) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                exit_code = 1;
            } else {
                tracing::info!(file = %path.display(), "reformatted");
            }
        } else {
            print!("{}", text);
        }
    }

    exit_code
}
