//! Error taxonomy for the monday.com client.
//!
//! Every failed call yields exactly one [`MondayError`]. Its [`ErrorKind`]
//! is a stable code that callers can match on or serialize.

use monday_core::ArgumentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Invalid arguments, detected before any request.
    #[serde(rename = "ARGUMENT_ERROR")]
    Argument,
    /// Connection failure, timeout or non-2xx status.
    #[serde(rename = "TRANSPORT_ERROR")]
    Transport,
    /// Response body was not valid JSON or did not fit the requested type.
    #[serde(rename = "DECODE_ERROR")]
    Decode,
    /// The API answered with an error payload.
    #[serde(rename = "API_ERROR")]
    Api,
    /// An upload file could not be read.
    #[serde(rename = "FILE_ERROR")]
    File,
}

impl ErrorKind {
    /// Returns the string representation of the error kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "ARGUMENT_ERROR",
            Self::Transport => "TRANSPORT_ERROR",
            Self::Decode => "DECODE_ERROR",
            Self::Api => "API_ERROR",
            Self::File => "FILE_ERROR",
        }
    }

    /// Returns true if the failure happened before anything was sent.
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Argument | Self::File)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error reported by the API inside a well-formed JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Server-provided text, verbatim when available.
    pub message: String,
    /// The error entry (or `error_message` value) it was taken from.
    pub details: Value,
}

impl ApiError {
    /// Builds an error from the first entry of an `errors` array.
    pub fn from_entry(entry: &Value) -> Self {
        let message = match entry.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(message) if !message.is_null() => message.to_string(),
            _ => entry.to_string(),
        };
        Self {
            message,
            details: entry.clone(),
        }
    }

    /// Builds an error from a top-level `error_message` value.
    pub fn from_error_message(value: &Value) -> Self {
        let message = match value {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        Self {
            message,
            details: value.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Client error.
#[derive(Error, Debug)]
pub enum MondayError {
    /// Invalid arguments.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// The HTTP request failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API reported an error.
    #[error("{0}")]
    Api(ApiError),

    /// An upload file could not be read.
    #[error("failed to read `{}`: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MondayError {
    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Api(_) => ErrorKind::Api,
            Self::File { .. } => ErrorKind::File,
        }
    }

    /// Returns the server-provided message for API errors.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api(err) => Some(&err.message),
            _ => None,
        }
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

impl From<ApiError> for MondayError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

/// Type alias for client results.
pub type MondayResult<T> = std::result::Result<T, MondayError>;
