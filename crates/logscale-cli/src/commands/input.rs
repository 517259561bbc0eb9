use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Label used for standard input in headers and messages.
pub const STDIN_LABEL: &str = "<stdin>";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read '{}': {}", .0.display(), .1)]
    Read(PathBuf, io::Error),

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("no input files and stdin is a terminal")]
    StdinIsTerminal,
}

/// One query source: a file, or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub label: String,
    pub path: Option<PathBuf>,
    pub content: String,
}

impl Input {
    pub fn from_stdin_text(content: String) -> Self {
        Self {
            label: STDIN_LABEL.to_string(),
            path: None,
            content,
        }
    }
}

/// Reads every named file, or stdin when `files` is empty.
///
/// A missing file fails the whole load before anything is read.
pub fn load_inputs(files: &[PathBuf]) -> Result<Vec<Input>, InputError> {
    if files.is_empty() {
        return load_stdin().map(|input| vec![input]);
    }

    if let Some(missing) = files.iter().find(|p| !p.exists()) {
        return Err(InputError::NotFound(missing.clone()));
    }
    files.iter().map(|p| load_file(p)).collect()
}

fn load_file(path: &Path) -> Result<Input, InputError> {
    let content =
        fs::read_to_string(path).map_err(|e| InputError::Read(path.to_path_buf(), e))?;
    Ok(Input {
        label: path.display().to_string(),
        path: Some(path.to_path_buf()),
        content,
    })
}

fn load_stdin() -> Result<Input, InputError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::StdinIsTerminal);
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(Input::from_stdin_text(buf))
}

/// Loads inputs or prints the error and returns the exit code to use.
pub fn load_or_report(files: &[PathBuf]) -> Result<Vec<Input>, i32> {
    load_inputs(files).map_err(|err| {
        eprintln!("error: {}", err);
        if matches!(err, InputError::StdinIsTerminal) {
            eprintln!("Usage: logscale-query <command> [files...]");
        }
        1
    })
}
