//! Response rendering
//!
//! Turns a [`Response`] into the exact string written to stdout. Three
//! renderers exist (text, markdown, JSON); [`render`] picks one from
//! [`Config::format`]. Only the JSON renderer can fail.
//!
//! The presentation flags compose the same way across formats:
//!
//! - `quiet` leaves only the answer text (a JSON string in JSON format)
//! - `heading` only affects text output; markdown always has a heading
//! - color only affects text output

mod color;
mod json;
mod markdown;
mod text;

pub use color::{colorize, should_use_color, Style, RESET};
pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text;

use thiserror::Error;

use crate::config::{Config, OutputFormat};
use crate::response::Response;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Quiet mode could not encode the answer text
    #[error("failed to marshal output to JSON: {0}")]
    OutputSerialization(#[source] serde_json::Error),

    /// The full response could not be encoded
    #[error("failed to marshal response to JSON: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Render a response in the configured format.
///
/// Text is the fallback renderer: a format name that slipped past validation
/// reaches here as [`OutputFormat::Text`] (see
/// [`OutputFormat::from_name_lenient`]) and is rendered as text.
pub fn render(response: &Response, config: &Config, use_color: bool) -> Result<String, RenderError> {
    match config.format {
        OutputFormat::Json => render_json(response, config),
        OutputFormat::Markdown => Ok(render_markdown(response, config)),
        OutputFormat::Text => Ok(render_text(response, config, use_color)),
    }
}
