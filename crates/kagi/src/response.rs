//! FastGPT response model
//!
//! The field layout mirrors the API payload and doubles as the shape of
//! `--format json` output, which downstream tools parse.

use serde::{Deserialize, Deserializer, Serialize};

/// A complete FastGPT answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,

    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Data,
}

/// Diagnostic fields about the request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Request identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Serving node label
    #[serde(default, deserialize_with = "null_as_default")]
    pub node: String,

    /// Elapsed time in milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub ms: u64,
}

/// The answer body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Generated answer text
    #[serde(default, deserialize_with = "null_as_default")]
    pub output: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tokens: u64,

    /// Sources in the order the API returned them
    #[serde(default, deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
}

/// A cited web source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Short excerpt; empty means "no snippet"
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippet: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl Response {
    /// Build a response carrying only answer text
    pub fn with_output(output: impl Into<String>) -> Self {
        Response {
            data: Data {
                output: output.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Answer text
    pub fn output(&self) -> &str {
        &self.data.output
    }

    /// Cited sources
    pub fn references(&self) -> &[Reference] {
        &self.data.references
    }
}

impl Reference {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Reference {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
        }
    }

    /// The snippet, if it has any content
    pub fn snippet(&self) -> Option<&str> {
        if self.snippet.is_empty() {
            None
        } else {
            Some(&self.snippet)
        }
    }
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
