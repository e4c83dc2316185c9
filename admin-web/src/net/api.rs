//! REST endpoint wrappers for the admin console.
//!
//! One function per backend operation. Wrappers are pure glue: they build
//! a method/URL/payload triple and hand it to [`HttpClient`]; anything
//! smarter lives in the pipeline itself.

use crate::net::error::HttpError;
use crate::net::http::{ApiRequest, HttpClient, encode_segment};
use crate::net::types::{
    AdminLoginPayload, DailyOrderCount, DailyTurnover, Game, LoginResponse, OrderSummary,
    RagAnswer, RagDocument, RagQuestion,
};

/// Base address of the RAG sidecar, a separate FastAPI service. Absolute
/// URLs pass through the shared client untouched.
pub const RAG_BASE_URL: &str = "http://127.0.0.1:5001";

// ---------------------------------------------------------------- auth --

/// `POST /auth/login/admin`
pub async fn admin_login(
    http: &HttpClient,
    payload: &AdminLoginPayload,
) -> Result<LoginResponse, HttpError> {
    http.request(ApiRequest::post("/auth/login/admin").json(payload)?)
        .await
}

/// `GET /auth/user/number` — registered-user count for the dashboard.
pub async fn query_user_count(http: &HttpClient) -> Result<u64, HttpError> {
    http.request(ApiRequest::get("/auth/user/number")).await
}

// --------------------------------------------------------------- games --

/// `GET /games/all`
pub async fn get_game_list(http: &HttpClient) -> Result<Vec<Game>, HttpError> {
    http.request(ApiRequest::get("/games/all")).await
}

/// `GET /games/searchByName/{name}`
pub async fn search_games_by_name(http: &HttpClient, name: &str) -> Result<Vec<Game>, HttpError> {
    http.request(ApiRequest::get(format!(
        "/games/searchByName/{}",
        encode_segment(name)
    )))
    .await
}

/// `GET /games/searchByPlatform/{platform}`
pub async fn search_games_by_platform(
    http: &HttpClient,
    platform: &str,
) -> Result<Vec<Game>, HttpError> {
    http.request(ApiRequest::get(format!(
        "/games/searchByPlatform/{}",
        encode_segment(platform)
    )))
    .await
}

/// `POST /games/create`
pub async fn create_game(http: &HttpClient, game: &Game) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/games/create").json(game)?)
        .await
        .map(|_| ())
}

/// `PUT /games/update`
pub async fn update_game(http: &HttpClient, game: &Game) -> Result<(), HttpError> {
    http.send(ApiRequest::put("/games/update").json(game)?)
        .await
        .map(|_| ())
}

/// `DELETE /games/delete/{id}`
pub async fn delete_game(http: &HttpClient, id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::delete(format!("/games/delete/{id}")))
        .await
        .map(|_| ())
}

// -------------------------------------------------------------- orders --

/// `GET /orders/weekly-daily-trend` — order volume per day, last week.
pub async fn query_week_count(http: &HttpClient) -> Result<Vec<DailyOrderCount>, HttpError> {
    http.request(ApiRequest::get("/orders/weekly-daily-trend"))
        .await
}

/// `GET /orders/today-money`
pub async fn query_today_money(http: &HttpClient) -> Result<f64, HttpError> {
    http.request(ApiRequest::get("/orders/today-money")).await
}

/// `GET /orders/weekly-daily-amount` — turnover per day, last week.
pub async fn query_daily_turnover(http: &HttpClient) -> Result<Vec<DailyTurnover>, HttpError> {
    http.request(ApiRequest::get("/orders/weekly-daily-amount"))
        .await
}

/// `GET /orders/today-list`
pub async fn query_today_orders(http: &HttpClient) -> Result<Vec<OrderSummary>, HttpError> {
    http.request(ApiRequest::get("/orders/today-list")).await
}

// ----------------------------------------------------------------- rag --

/// `POST {RAG_BASE_URL}/rag/add` — push a document into the knowledge base.
pub async fn add_document(http: &HttpClient, document: &RagDocument) -> Result<(), HttpError> {
    http.send(ApiRequest::post(format!("{RAG_BASE_URL}/rag/add")).json(document)?)
        .await
        .map(|_| ())
}

/// `GET {RAG_BASE_URL}/rag/search`
pub async fn search_document(
    http: &HttpClient,
    query: &str,
    game_id: Option<i64>,
) -> Result<serde_json::Value, HttpError> {
    let mut request = ApiRequest::get(format!("{RAG_BASE_URL}/rag/search")).query("query", query);
    if let Some(game_id) = game_id {
        request = request.query("game_id", game_id);
    }
    http.send(request).await
}

/// `POST {RAG_BASE_URL}/rag/ask`
pub async fn ask_question(
    http: &HttpClient,
    question: &RagQuestion,
) -> Result<RagAnswer, HttpError> {
    http.request(ApiRequest::post(format!("{RAG_BASE_URL}/rag/ask")).json(question)?)
        .await
}
