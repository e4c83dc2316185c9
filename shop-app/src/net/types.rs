//! Wire DTOs for the shopper REST API.
//!
//! The backend serializes in camelCase; fields the UI can live without are
//! defaulted so a sparse payload still decodes.

use serde::{Deserialize, Serialize};

/// Shopper account record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopUser {
    pub id: i64,
    pub phone: String,
    pub nickname: String,
    pub avatar: String,
}

/// Password login body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub phone: String,
    pub password: String,
}

/// Registration body for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub phone: String,
    pub password: String,
    pub code: String,
}

/// Successful login response. Some backends omit the user record and only
/// hand back a token; the caller then fetches the profile separately.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<ShopUser>,
}

/// One rentable game in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub platform: String,
    pub cover_image: String,
    pub daily_price: f64,
    pub deposit: f64,
    pub stock: i64,
    pub description: String,
    pub rating: Option<f64>,
}

/// One line in the shopper's cart.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartItem {
    pub id: i64,
    pub game_id: i64,
    pub game_name: String,
    pub cover_image: String,
    pub daily_price: f64,
    pub rent_days: i64,
}

/// Body for `POST /cart/add`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAdd {
    pub game_id: i64,
    pub rent_days: i64,
}

/// Body for `POST /orders/create`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub address_id: i64,
    pub cart_ids: Vec<i64>,
}

/// One rental order as listed and detailed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: i64,
    pub order_no: String,
    pub status: String,
    pub total_amount: f64,
    pub create_time: String,
    pub items: Vec<OrderItem>,
}

/// One game line inside an order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    pub game_id: i64,
    pub game_name: String,
    pub cover_image: String,
    pub rent_days: i64,
    pub daily_price: f64,
}

/// Delivery address record, also used as the add/update body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub id: i64,
    pub receiver: String,
    pub phone: String,
    pub region: String,
    pub detail: String,
    pub is_default: bool,
}

/// One published review of a game.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub avatar: String,
    pub rating: i64,
    pub content: String,
    pub create_time: String,
}

/// Body for `POST /reviews/submit`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmit {
    pub order_id: i64,
    pub game_id: i64,
    pub rating: i64,
    pub content: String,
}

/// Body for the face login and enrollment endpoints. `user_id` is only
/// required for enrollment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacePayload {
    pub image_base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Enrollment state for `GET /face/status/{userId}`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceStatus {
    pub registered: bool,
}

/// Body for the conversational agent sidecar.
#[derive(Clone, Debug, Serialize)]
pub struct AgentQuestion {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Reply from the agent sidecar.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgentReply {
    pub reply: String,
}
