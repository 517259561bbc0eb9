use std::path::PathBuf;

use super::input;
use super::run_common::{parse_input, render_diagnostics};

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> i32 {
    let inputs = match input::load_or_report(&args.files) {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };

    let mut exit_code = 0;
    for input in &inputs {
        let Some(query) = parse_input(input) else {
            exit_code = 1;
            continue;
        };
        if query.is_valid() {
            println!("ok: {}", input.label);
            continue;
        }
        tracing::debug!(
            file = %input.label,
            errors = query.diagnostics().error_count(),
            "invalid query"
        );
        eprintln!("error: {}: syntax error detected", input.label);
        eprintln!("{}", render_diagnostics(&query, &input.label, args.color));
        exit_code = 1;
    }
    exit_code
}
