//! JSON output for tool consumption

use super::RenderError;
use crate::config::Config;
use crate::response::Response;

/// Render the response as JSON.
///
/// Quiet mode emits only the answer as a JSON string. Otherwise the whole
/// response is emitted, pretty-printed with a compact fallback.
pub fn render_json(response: &Response, config: &Config) -> Result<String, RenderError> {
    if config.quiet {
        let json = serde_json::to_string_pretty(response.output())
            .map_err(RenderError::OutputSerialization)?;
        return Ok(json + "\n");
    }

    let json = match serde_json::to_string_pretty(response) {
        Ok(json) => json,
        Err(err) => {
            tracing::debug!("pretty JSON encoding failed, retrying compact: {}", err);
            serde_json::to_string(response).map_err(RenderError::Serialization)?
        }
    };

    Ok(json + "\n")
}
