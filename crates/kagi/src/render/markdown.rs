//! Markdown document output
//!
//! Markdown always carries the query heading unless quiet; the `heading` flag
//! only applies to text output. Titles and URLs are written as-is.

use crate::config::Config;
use crate::response::Response;

/// Render the answer as a Markdown document
pub fn render_markdown(response: &Response, config: &Config) -> String {
    let mut out = String::new();

    if config.quiet {
        out.push_str(response.output());
        out.push('\n');
        return out;
    }

    out.push_str(&format!("# {}\n\n", config.query));
    out.push_str(response.output());
    out.push('\n');

    let references = response.references();
    if references.is_empty() {
        return out;
    }

    out.push_str("\n## References\n\n");
    for (i, reference) in references.iter().enumerate() {
        out.push_str(&format!("{}. [{}]({})\n", i + 1, reference.title, reference.url));
        if let Some(snippet) = reference.snippet() {
            out.push_str(&format!("   > {}\n", snippet));
        }
    }

    out
}
