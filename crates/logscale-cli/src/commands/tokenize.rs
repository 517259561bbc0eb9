//! Token view: each token's syntax label printed above its text.
//!
//! ```text
//! pattern  pipeline  identifier  arg_list  arg_list
//! error    |         count       (         )
//! ```

use std::path::PathBuf;

use logscale_core::Colors;
use logscale_lib::Query;
use logscale_lib::parser::SyntaxKind;
use logscale_lib::query::QueryToken;

use super::input;
use super::run_common::header;

pub struct TokenizeArgs {
    pub files: Vec<PathBuf>,
    pub color: bool,
}

pub fn run(args: TokenizeArgs) -> i32 {
    let inputs = match input::load_or_report(&args.files) {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };

    let colors = Colors::new(args.color);
    let mut exit_code = 0;
    for input in &inputs {
        if let Some(header) = header(&inputs, input) {
            println!("{}", header);
        }
        for line in input.content.lines() {
            match Query::try_from(line) {
                Ok(query) => print!("{}", render_tokens(&query.tokens(), colors)),
                Err(err) => {
                    eprintln!("error: {}: {}", input.label, err);
                    exit_code = 1;
                }
            }
        }
    }
    exit_code
}

/// Two lines, labels over texts, each column as wide as its longer half.
///
/// Blank input gives a single empty line.
pub fn render_tokens(tokens: &[QueryToken], colors: Colors) -> String {
    let cells: Vec<_> = tokens
        .iter()
        .filter(|t| !t.text.trim().is_empty())
        .map(|t| {
            let label = t.label();
            let width = label.chars().count().max(t.text.chars().count());
            (t, label, width)
        })
        .collect();

    if cells.is_empty() {
        return "\n".to_string();
    }

    let mut labels = String::new();
    let mut texts = String::new();
    let last = cells.len() - 1;
    for (i, (token, label, width)) in cells.iter().enumerate() {
        let color = token_color(token, colors);
        push_cell(&mut labels, label, *width, colors.dim, colors.reset, i == last);
        push_cell(&mut texts, &token.text, *width, color, colors.reset, i == last);
    }

    format!("{}\n{}\n", labels, texts)
}

fn push_cell(out: &mut String, text: &str, width: usize, color: &str, reset: &str, last: bool) {
    if color.is_empty() {
        out.push_str(text);
    } else {
        out.push_str(color);
        out.push_str(text);
        out.push_str(reset);
    }
    if !last {
        let pad = width - text.chars().count() + 2;
        out.extend(std::iter::repeat_n(' ', pad));
    }
}

fn token_color(token: &QueryToken, colors: Colors) -> &'static str {
    use SyntaxKind::*;

    if token.kind.is_comment() {
        return colors.dim;
    }
    match token.label_kind {
        QuotedString | UnterminatedString => colors.green,
        Number | BooleanFilter => colors.yellow,
        Pattern | AnchoredPattern => colors.magenta,
        Regex | Error => colors.red,
        Identifier => colors.blue,
        FieldName => colors.cyan,
        _ if token.kind.is_fixed_text() && !token.kind.is_keyword() => colors.dim,
        _ => "",
    }
}
