use super::*;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::executor::block_on;

use crate::net::error::HttpError;
use crate::net::types::AdminUser;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

struct StubTransport {
    responses: Mutex<Vec<RawResponse>>,
    seen: Mutex<Vec<PreparedRequest>>,
}

impl StubTransport {
    fn new(responses: Vec<RawResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last_request(&self) -> PreparedRequest {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("a request should have been recorded")
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, String> {
        self.seen.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err("connection refused".to_owned())
        } else {
            Ok(responses.remove(0))
        }
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

impl RecordingNavigator {
    fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

fn empty_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::load(Arc::new(MemoryStorage::default())))
}

fn session_with_token(token: &str) -> Arc<SessionStore> {
    let session = empty_session();
    session.set_session(AdminUser::default(), token);
    session
}

fn client(
    session: &Arc<SessionStore>,
    transport: &Arc<StubTransport>,
    navigator: &Arc<RecordingNavigator>,
) -> HttpClient {
    let config = HttpConfig {
        base_url: "/api".to_owned(),
        timeout_ms: 1_000,
        default_headers: Vec::new(),
    };
    HttpClient::new(
        config,
        Arc::clone(session),
        Arc::clone(transport) as Arc<dyn Transport>,
        Arc::clone(navigator) as Arc<dyn Navigator>,
    )
}

fn ok_response() -> RawResponse {
    RawResponse {
        status: 200,
        body: serde_json::json!({"ok": true}),
    }
}

fn status_response(status: u16) -> RawResponse {
    RawResponse {
        status,
        body: serde_json::Value::Null,
    }
}

fn auth_header(request: &PreparedRequest) -> Option<String> {
    request
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .map(|(_, value)| value.clone())
}

// =============================================================
// bearer injection
// =============================================================

#[test]
fn bearer_header_attached_when_token_present() {
    let session = session_with_token("secret-token");
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    block_on(http.send(ApiRequest::get("/games/all"))).expect("request should succeed");

    assert_eq!(
        auth_header(&transport.last_request()).as_deref(),
        Some("Bearer secret-token")
    );
}

#[test]
fn no_bearer_header_without_token() {
    let session = empty_session();
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    block_on(http.send(ApiRequest::get("/games/all"))).expect("request should succeed");

    assert!(auth_header(&transport.last_request()).is_none());
}

#[test]
fn caller_authorization_header_is_not_overridden() {
    let session = session_with_token("secret-token");
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let request = ApiRequest::get("/games/all").header("Authorization", "Basic abc");
    block_on(http.send(request)).expect("request should succeed");

    let headers = transport.last_request().headers;
    let auth: Vec<&str> = headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(auth, vec!["Basic abc"]);
}

// =============================================================
// response classification
// =============================================================

#[test]
fn two_xx_resolves_with_body() {
    let session = empty_session();
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let body = block_on(http.send(ApiRequest::get("/games/all"))).expect("should resolve");

    assert_eq!(body, serde_json::json!({"ok": true}));
}

#[test]
fn status_404_is_generic_and_side_effect_free() {
    let session = session_with_token("secret-token");
    let transport = StubTransport::new(vec![status_response(404)]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let err = block_on(http.send(ApiRequest::get("/games/all"))).expect_err("should reject");

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("404"));
    assert!(err.to_string().contains("GET"));
    assert!(session.is_authenticated(), "404 must not clear the session");
    assert!(navigator.visits().is_empty(), "404 must not redirect");
}

#[test]
fn transport_failure_surfaces_as_network_error() {
    let session = empty_session();
    let transport = StubTransport::new(Vec::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let err = block_on(http.send(ApiRequest::get("/games/all"))).expect_err("should reject");

    assert!(matches!(err, HttpError::Network(_)));
}

// =============================================================
// 401 handling
// =============================================================

#[test]
fn status_401_clears_session_and_redirects_once() {
    let session = session_with_token("stale-token");
    let transport = StubTransport::new(vec![status_response(401), status_response(401)]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let first = block_on(http.send(ApiRequest::get("/orders/today-list")));
    let second = block_on(http.send(ApiRequest::get("/games/all")));

    assert!(matches!(first, Err(HttpError::Unauthorized)));
    assert!(matches!(second, Err(HttpError::Unauthorized)));
    assert!(!session.is_authenticated());
    assert_eq!(navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn successful_response_releases_redirect_latch() {
    let session = session_with_token("stale-token");
    let transport = StubTransport::new(vec![
        status_response(401),
        ok_response(),
        status_response(401),
    ]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let _ = block_on(http.send(ApiRequest::get("/a")));
    let _ = block_on(http.send(ApiRequest::get("/b")));
    let _ = block_on(http.send(ApiRequest::get("/c")));

    assert_eq!(navigator.visits().len(), 2);
}

// =============================================================
// URL assembly
// =============================================================

#[test]
fn base_url_is_joined_to_relative_paths() {
    let session = empty_session();
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    block_on(http.send(ApiRequest::get("/games/all"))).expect("request should succeed");

    assert_eq!(transport.last_request().url, "/api/games/all");
}

#[test]
fn absolute_urls_pass_through() {
    let session = empty_session();
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    block_on(http.send(ApiRequest::get("http://127.0.0.1:5001/rag/search")))
        .expect("request should succeed");

    assert_eq!(transport.last_request().url, "http://127.0.0.1:5001/rag/search");
}

#[test]
fn query_pairs_are_percent_encoded() {
    let session = empty_session();
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let request = ApiRequest::get("/rag/search")
        .query("query", "zelda & friends")
        .query("game_id", 42);
    block_on(http.send(request)).expect("request should succeed");

    assert_eq!(
        transport.last_request().url,
        "/api/rag/search?query=zelda%20%26%20friends&game_id=42"
    );
}

#[test]
fn path_segments_are_percent_encoded() {
    assert_eq!(encode_segment("mario kart/8"), "mario%20kart%2F8");
}

// =============================================================
// typed decoding
// =============================================================

#[test]
fn request_decodes_typed_payloads() {
    let session = empty_session();
    let transport = StubTransport::new(vec![RawResponse {
        status: 200,
        body: serde_json::json!(12),
    }]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let count: u64 = block_on(http.request(ApiRequest::get("/auth/user/number")))
        .expect("should decode");

    assert_eq!(count, 12);
}

#[test]
fn request_rejects_mismatched_payloads() {
    let session = empty_session();
    let transport = StubTransport::new(vec![ok_response()]);
    let navigator = Arc::new(RecordingNavigator::default());
    let http = client(&session, &transport, &navigator);

    let result: Result<u64, HttpError> = block_on(http.request(ApiRequest::get("/x")));

    assert!(matches!(result, Err(HttpError::Decode(_))));
}
