mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CheckParams, FormatParams, ParseParams, TokenizeParams, build_cli};

/// Log filter variable, e.g. `LOGSCALE_LOG=logscale_lib=debug`.
const LOG_ENV: &str = "LOGSCALE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    let code = match matches.subcommand() {
        Some(("format", m)) => commands::format::run(FormatParams::from_matches(m).into()),
        Some(("parse", m)) => commands::parse::run(ParseParams::from_matches(m).into()),
        Some(("check", m)) => commands::check::run(CheckParams::from_matches(m).into()),
        Some(("tokenize", m)) => commands::tokenize::run(TokenizeParams::from_matches(m).into()),
        Some(_) => unreachable!("clap should have caught this"),
        None => {
            print!("{}", build_cli().render_help());
            0
        }
    };
    std::process::exit(code);
}
