//! Shared HTTP request pipeline for the shopper app.
//!
//! Every REST call goes through [`HttpClient`]. The client prefixes
//! relative paths with the configured base address (absolute `http(s)`
//! URLs pass through untouched, which is how the agent sidecar is
//! reached), injects `Authorization: Bearer <token>` when a session is
//! present, and treats both a transport-level 401 and a `code: 401`
//! embedded in the body as an authentication failure: the session is
//! cleared and the shopper is sent to the login screen — unless they are
//! already there, which keeps a burst of concurrent 401s from stacking
//! redirects.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::HttpError;
use crate::state::guard::LOGIN_PATH;
use crate::state::session::SessionStore;

/// Characters escaped when interpolating a value into a URL path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Characters escaped in query keys and values.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Percent-encode one URL path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

fn encode_query(part: &str) -> String {
    utf8_percent_encode(part, QUERY_ENCODE_SET).to_string()
}

/// HTTP method of an outgoing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One REST call before the pipeline has touched it.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if the payload cannot be serialized.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, HttpError> {
        self.body =
            Some(serde_json::to_value(body).map_err(|err| HttpError::Encode(err.to_string()))?);
        Ok(self)
    }

    /// Append one query pair; both halves are percent-encoded at send time.
    pub fn query(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Add a caller-supplied header. A caller `Authorization` header takes
    /// precedence over the session token.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// Fully assembled request handed to the transport.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub timeout_ms: u32,
}

/// Transport-level response before the pipeline classifies it.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Performs one HTTP exchange. Implemented over `fetch` in the browser and
/// by in-memory doubles in tests.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, String>;
}

/// Navigation hook used by the 401 handler. `current_path` lets the
/// handler skip the redirect when the shopper is already on the login
/// screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
    fn current_path(&self) -> Option<String>;
}

/// Fixed configuration for one [`HttpClient`].
#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub default_headers: Vec<(String, String)>,
}

impl Default for HttpConfig {
    /// The base address comes from `JOYRENT_API_BASE` at build time and
    /// falls back to the local dev backend. On-device testing wants the
    /// machine's LAN address instead of localhost.
    fn default() -> Self {
        Self {
            base_url: option_env!("JOYRENT_API_BASE")
                .unwrap_or("http://localhost:8080")
                .to_owned(),
            timeout_ms: 60_000,
            default_headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
        }
    }
}

/// The shopper app's request dispatcher, constructed once per application
/// instance with its collaborators passed in explicitly.
pub struct HttpClient {
    config: HttpConfig,
    session: Arc<SessionStore>,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    pub fn new(
        config: HttpConfig,
        session: Arc<SessionStore>,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            session,
            transport,
            navigator,
        }
    }

    /// Dispatch one request through the full pipeline and resolve with the
    /// response body.
    ///
    /// # Errors
    ///
    /// [`HttpError::Unauthorized`] when the backend reports 401 either as
    /// the transport status or as a `code` field in the body (the session
    /// is cleared first), [`HttpError::Status`] on any other non-2xx
    /// response, and [`HttpError::Network`] when the transport fails or
    /// times out.
    pub async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, HttpError> {
        let url = self.build_url(&request.path, &request.query);
        let headers = self.build_headers(&request);
        let prepared = PreparedRequest {
            method: request.method,
            url: url.clone(),
            headers,
            body: request.body,
            timeout_ms: self.config.timeout_ms,
        };

        let response = self
            .transport
            .execute(&prepared)
            .await
            .map_err(HttpError::Network)?;

        if is_unauthorized(&response) {
            self.session.clear();
            let on_login = self
                .navigator
                .current_path()
                .is_some_and(|path| path == LOGIN_PATH);
            if !on_login {
                self.navigator.navigate(LOGIN_PATH);
            }
            return Err(HttpError::Unauthorized);
        }

        if (200..300).contains(&response.status) {
            return Ok(response.body);
        }

        log::warn!(
            "request {} {url} failed with status {}",
            request.method,
            response.status
        );
        Err(HttpError::Status {
            method: request.method,
            url,
            status: response.status,
        })
    }

    /// [`send`](Self::send) plus JSON decoding into a typed value.
    ///
    /// # Errors
    ///
    /// Everything `send` rejects with, plus [`HttpError::Decode`] when the
    /// body does not match `T`.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, HttpError> {
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|err| HttpError::Decode(err.to_string()))
    }

    fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else {
            format!("{}{path}", self.config.base_url)
        };
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", encode_query(key), encode_query(value)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    fn build_headers(&self, request: &ApiRequest) -> Vec<(String, String)> {
        let mut headers = self.config.default_headers.clone();
        let caller_has_auth = request
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("authorization"));
        if !caller_has_auth {
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }
        headers.extend(request.headers.iter().cloned());
        headers
    }
}

/// The backend signals an expired session either with a plain 401 or with
/// a 2xx envelope carrying `code: 401`.
fn is_unauthorized(response: &RawResponse) -> bool {
    if response.status == 401 {
        return true;
    }
    response
        .body
        .get("code")
        .and_then(serde_json::Value::as_i64)
        == Some(401)
}

/// Browser transport over `fetch`, with the configured timeout enforced by
/// racing the exchange against a timer.
#[cfg(feature = "csr")]
pub struct FetchTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, String> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let ready = match &request.body {
            Some(body) => builder.json(body).map_err(|err| err.to_string())?,
            None => builder.build().map_err(|err| err.to_string())?,
        };

        let exchange = async move {
            let response = ready.send().await.map_err(|err| err.to_string())?;
            let status = response.status();
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            Ok(RawResponse { status, body })
        };
        let deadline =
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                request.timeout_ms,
            )));

        match select(Box::pin(exchange), Box::pin(deadline)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                Err(format!("request timed out after {}ms", request.timeout_ms))
            }
        }
    }
}

/// Navigator that drives the real browser location.
#[cfg(feature = "csr")]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }

    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }
}

/// Transport used outside the browser; every call fails.
pub struct NullTransport;

#[async_trait(?Send)]
impl Transport for NullTransport {
    async fn execute(&self, _request: &PreparedRequest) -> Result<RawResponse, String> {
        Err("http transport is only available in the browser".to_owned())
    }
}

/// Navigator that goes nowhere.
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, _path: &str) {}

    fn current_path(&self) -> Option<String> {
        None
    }
}
