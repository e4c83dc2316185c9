//! Request error taxonomy for the shopper app.
//!
//! Every failure is a local rejection of one in-flight call. The pages
//! decide how to present an error; nothing escalates to a process-level
//! fatal state.

use thiserror::Error;

use crate::net::http::Method;

/// Errors surfaced by the HTTP client.
///
/// `Unauthorized` covers both a transport-level 401 and a 401 code
/// embedded in the response body; it is the only variant with side
/// effects (session cleared, shopper sent to login) and is never retried.
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

    /// The transport could not complete the exchange.
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
