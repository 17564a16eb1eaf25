//! # csrgen-cli
//!
//! Command-line front end for the csrgen core: flag parsing, identity-file
//! loading, and atomic PEM artifact output. The key and request themselves
//! are produced by `csrgen-core`.

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
