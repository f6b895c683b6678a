//! FastGPT API client
//!
//! One blocking POST per invocation. No retries, no caching.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::MAX_TIMEOUT;
use crate::response::Response;

/// FastGPT endpoint
pub const API_ENDPOINT: &str = "https://kagi.com/api/v0/fastgpt";

const AUTH_PREFIX: &str = "Bot ";

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request timeout exceeded ({0}s)")]
    Timeout(u64),

    #[error("network request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    Read(#[source] reqwest::Error),

    #[error("API request failed [{0}]: Invalid API key")]
    InvalidApiKey(i64),

    #[error("API rate limit exceeded, try again later")]
    RateLimited,

    #[error("API request failed [{code}]: {message}")]
    Api { code: i64, message: String },

    #[error("API returned HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("failed to parse API response: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("API returned empty response")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct FastGptRequest<'a> {
    query: &'a str,
    web_search: bool,
    cache: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    msg: String,
}

/// Blocking FastGPT client
pub struct ApiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    timeout_secs: u64,
}

impl ApiClient {
    /// Create a client for the public endpoint
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Result<Self, ApiError> {
        Self::with_endpoint(API_ENDPOINT, api_key, timeout_secs)
    }

    /// Create a client for a specific endpoint URL.
    ///
    /// Timeouts above [`MAX_TIMEOUT`] are capped to it.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let timeout_secs = timeout_secs.min(MAX_TIMEOUT);
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(ApiError::Client)?;

        Ok(ApiClient {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout_secs,
        })
    }

    /// Send a query and return the parsed answer
    pub fn query(&self, query: &str) -> Result<Response, ApiError> {
        let request = FastGptRequest {
            query,
            web_search: true,
            cache: true,
        };

        tracing::debug!(endpoint = %self.endpoint, "sending FastGPT request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("{}{}", AUTH_PREFIX, self.api_key))
            .json(&request)
            .send()
            .map_err(|err| self.transport_error(err, ApiError::Network))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| self.transport_error(err, ApiError::Read))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response body read");

        interpret_response(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            &body,
        )
    }

    fn transport_error(&self, err: reqwest::Error, wrap: fn(reqwest::Error) -> ApiError) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            wrap(err)
        }
    }
}

/// Turn an HTTP status and body into an answer or a descriptive error
pub fn interpret_response(status: u16, reason: &str, body: &str) -> Result<Response, ApiError> {
    if !(200..300).contains(&status) {
        let first = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error.into_iter().next());

        return Err(match first {
            Some(entry) => match status {
                401 | 403 => ApiError::InvalidApiKey(entry.code),
                429 => ApiError::RateLimited,
                _ => ApiError::Api {
                    code: entry.code,
                    message: entry.msg,
                },
            },
            None => ApiError::Http {
                status,
                reason: reason.to_string(),
            },
        });
    }

    let response: Response = serde_json::from_str(body).map_err(ApiError::Parse)?;
    if response.output().is_empty() {
        return Err(ApiError::EmptyResponse);
    }

    Ok(response)
}
