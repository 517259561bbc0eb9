//! Grammar productions for the query language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Where the language is ambiguous for a top-down parser, the choice is made by
//! a fixed lookahead rule documented at the production that applies it.

mod atoms;
mod blocks;
mod calls;
mod expressions;
mod filters;
mod pipeline;
