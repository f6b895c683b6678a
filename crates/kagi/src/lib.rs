//! kagi - Kagi FastGPT from the command line
//!
//! Sends a query to the FastGPT API and renders the answer, with its web
//! references, as text, Markdown or JSON. Built for people at a terminal and
//! for scripts or agents reading stdout.
//!
//! The library side is split so every piece can be tested without a network
//! or a terminal:
//!
//! - [`config`] - flag/env/file merging and validation
//! - [`query`] - query text from arguments or piped stdin
//! - [`client`] - the HTTP call and response interpretation
//! - [`render`] - the pure response-to-string pipeline
//! - [`term`] - terminal detection behind a trait

pub mod client;
pub mod config;
pub mod query;
pub mod render;
pub mod response;
pub mod term;

pub use client::{ApiClient, ApiError};
pub use config::{ColorMode, Config, ConfigError, FileConfig, OutputFormat, Overrides, Settings};
pub use query::{resolve_query, QueryError};
pub use render::{render, RenderError};
pub use response::{Data, Meta, Reference, Response};
pub use term::{StdTerminal, Terminal};

/// Repository shown by `--version`
pub const REPOSITORY: &str = "https://github.com/grantcarthew/kagi";
