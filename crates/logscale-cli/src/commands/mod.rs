pub mod check;
pub mod format;
pub mod input;
pub mod parse;
pub mod run_common;
pub mod tokenize;
