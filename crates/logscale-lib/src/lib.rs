//! Parser and canonical formatter for the LogScale query language.
//!
//! # Example
//!
//! ```
//! use logscale_lib::Query;
//!
//! let source = "error | groupBy(host, function=count())";
//!
//! let query = Query::try_from(source).expect("out of fuel");
//! assert!(query.is_valid());
//! assert_eq!(
//!     query.format().unwrap(),
//!     "error\n| groupBy(host, function = count())\n",
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod format;
pub mod parser;
pub mod query;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use format::FormatOptions;
pub use query::{Query, QueryPrinter};

/// Errors that can occur while parsing or formatting a query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("query parsing failed with {} errors", .0.error_count())]
    QueryParseError(Diagnostics),

    /// The formatter only accepts queries without syntax errors.
    #[error("cannot format a query with {} syntax errors", .0.error_count())]
    FormatError(Diagnostics),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source`, failing with [`Error::QueryParseError`] on syntax errors.
///
/// Use [`Query`] directly to inspect the tree of a malformed query.
pub fn parse(source: &str) -> Result<Query<'_>> {
    let query = Query::try_from(source)?;
    if !query.is_valid() {
        return Err(Error::QueryParseError(query.diagnostics().clone()));
    }
    Ok(query)
}

/// Parses and formats `source` with default [`FormatOptions`].
pub fn format(source: &str) -> Result<String> {
    Query::try_from(source)?.format()
}
