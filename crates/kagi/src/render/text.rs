//! Plain terminal output

use super::color::{colorize, Style};
use crate::config::Config;
use crate::response::Response;

/// Render the answer as terminal text, styled when `use_color` is set
pub fn render_text(response: &Response, config: &Config, use_color: bool) -> String {
    let mut out = String::new();

    if config.heading && !config.quiet {
        let heading = format!("# {}", config.query);
        out.push_str(&colorize(&heading, Style::Heading, use_color));
        out.push_str("\n\n");
    }

    out.push_str(response.output());
    out.push('\n');

    let references = response.references();
    if config.quiet || references.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&colorize("References:", Style::Bold, use_color));
    out.push_str("\n\n");

    for (i, reference) in references.iter().enumerate() {
        let number = format!("{}. ", i + 1);
        out.push_str(&colorize(&number, Style::Number, use_color));
        out.push_str(&reference.title);
        out.push_str(" - ");
        out.push_str(&colorize(&reference.url, Style::Link, use_color));
        if let Some(snippet) = reference.snippet() {
            out.push_str(" - ");
            out.push_str(snippet);
        }
        out.push('\n');
    }

    out
}
