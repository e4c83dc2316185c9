//! Request error taxonomy for the admin console.
//!
//! Every failure is a local rejection of one in-flight call; nothing here
//! escalates to a process-level fatal state. The pages decide how to
//! present an error to the operator.

use thiserror::Error;

use crate::net::http::Method;

/// Errors surfaced by the HTTP client.
///
/// `Unauthorized` is deliberately distinct from `Status`: it is the only
/// variant that carries side effects (session cleared, browser sent to the
/// login screen) and it is never retried.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The backend reported 401. The session has already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx response, with the request identity kept for
    /// diagnostics.
    #[error("request {method} {url} failed with status {status}")]
    Status {
        method: Method,
        url: String,
        status: u16,
    },

    /// The transport could not complete the exchange (connection refused,
    /// timeout, and so on).
    #[error("network error: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(String),

    /// The 2xx response body did not match the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

impl HttpError {
    /// Status code for `Status` rejections, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
