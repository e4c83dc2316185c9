//! Wire DTOs for the admin REST API.
//!
//! Field names follow the backend's camelCase JSON. Missing fields fall
//! back to defaults so dashboard widgets keep rendering while the backend
//! evolves.

use serde::{Deserialize, Serialize};

/// Administrator account attached to the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Credentials for `POST /auth/login/admin`.
#[derive(Clone, Debug, Serialize)]
pub struct AdminLoginPayload {
    pub username: String,
    pub password: String,
}

/// Successful login: the bearer token plus the admin profile.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<AdminUser>,
}

/// Catalog entry managed from the console.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub daily_price: f64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// One day of the weekly order-volume trend.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOrderCount {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub count: u64,
}

/// One day of the weekly turnover series.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTurnover {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
}

/// Row in the today's-orders table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: i32,
}

/// Document pushed into the RAG knowledge base. The RAG sidecar is a
/// Python service and speaks snake_case.
#[derive(Clone, Debug, Serialize)]
pub struct RagDocument {
    pub game_id: i64,
    pub category: String,
    pub content: String,
}

/// Question for the RAG assistant.
#[derive(Clone, Debug, Serialize)]
pub struct RagQuestion {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,
}

/// Answer returned by `/rag/ask`.
#[derive(Clone, Debug, Deserialize)]
pub struct RagAnswer {
    #[serde(default)]
    pub answer: String,
}
