//! Error type shared by all remote API calls.
//!
//! Views render the `Display` text inline; nothing on the request path panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call to the remote API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16 },
    /// The body could not be parsed into the expected payload.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR render or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message shown next to the control that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Status { status: 401 | 403 } => "You need to be signed in to do that.".to_owned(),
            Self::Status { status: 404 } => "That item no longer exists.".to_owned(),
            Self::Status { status } if *status >= 500 => "The server had a problem. Try again shortly.".to_owned(),
            other => other.to_string(),
        }
    }
}
