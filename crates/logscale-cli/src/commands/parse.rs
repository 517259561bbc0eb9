use std::path::PathBuf;

use super::input;
use super::run_common::{header, parse_input};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Sexp,
    Json,
}

pub struct ParseArgs {
    pub files: Vec<PathBuf>,
    pub output: OutputFormat,
}

pub fn run(args: ParseArgs) -> i32 {
    let inputs = match input::load_or_report(&args.files) {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };

    let mut exit_code = 0;
    for input in &inputs {
        if let Some(header) = header(&inputs, input) {
            println!("{}", header);
        }
        let Some(query) = parse_input(input) else {
            exit_code = 1;
            continue;
        };
        // The tree is printed even for invalid input; errors show as ERROR nodes.
        match args.output {
            OutputFormat::Sexp => println!("{}", query.to_sexp()),
            OutputFormat::Json => println!("{}", query.to_json()),
        }
    }
    exit_code
}
