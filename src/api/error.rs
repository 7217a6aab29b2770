//! Error taxonomy for API interactions.
//!
//! Every failure is terminal for the current command: helpers hand errors to
//! their direct caller (the command handler), which prints once and exits
//! non-zero. No retries, no multi-level wrapping.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Resource kinds the client can list and resolve by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Droplet,
    Image,
    SshKey,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Droplet => "droplet",
            ResourceKind::Image => "image",
            ResourceKind::SshKey => "SSH key",
        };
        f.write_str(s)
    }
}

/// Everything that can go wrong between "user typed a command" and
/// "the API answered usefully".
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, timeout). Never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status other than 422. Carries the HTTP status line.
    #[error("API error: {status}")]
    Api { status: StatusCode },

    /// 422 Unprocessable Entity. Echoes the serialized request body verbatim
    /// so malformed payloads can be diagnosed from the message alone.
    #[error("Unprocessable Entity: {body}")]
    Validation { body: String },

    /// The response body was not the JSON shape the caller asked for.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload failed to serialize. Practically unreachable for
    /// the payload types this crate defines.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Name resolution found no resource with the given name.
    #[error("No {kind} '{name}' available")]
    NotFound { kind: ResourceKind, name: String },

    /// Client-side configuration problem (bad base URL, bad request path).
    #[error("invalid configuration: {0}")]
    Config(String),
}
