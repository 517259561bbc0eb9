//! Shared logic for the per-input commands.

use logscale_lib::Query;

use super::input::Input;

/// Parse one input, or print why it could not be parsed at all.
///
/// Syntax errors still produce a query; only exhausted fuel fails here.
pub fn parse_input(input: &Input) -> Option<Query<'_>> {
    match Query::try_from(input.content.as_str()) {
        Ok(query) => Some(query),
        Err(err) => {
            eprintln!("error: {}: {}", input.label, err);
            None
        }
    }
}

/// Source snippets for the query's diagnostics, cascades suppressed.
pub fn render_diagnostics(query: &Query<'_>, label: &str, color: bool) -> String {
    query
        .diagnostics()
        .filtered()
        .printer(query.source())
        .path(label)
        .colored(color)
        .render()
}

/// `==> label <==` header, printed only when there are several inputs.
pub fn header(inputs: &[Input], input: &Input) -> Option<String> {
    (inputs.len() > 1).then(|| format!("==> {} <==", input.label))
}
