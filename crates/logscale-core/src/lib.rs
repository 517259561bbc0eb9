#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared data for the LogScale query tooling.
//!
//! - [`functions`]: the versioned catalog of reserved function names
//! - [`Colors`]: ANSI palette for terminal output
//! - [`utils`]: small naming helpers

mod colors;
pub mod functions;
pub mod utils;

#[cfg(test)]
mod functions_tests;

pub use colors::Colors;
pub use functions::{CATALOG_VERSION, is_reserved};
