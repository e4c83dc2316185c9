//! One thin wrapper per REST operation.
//!
//! Wrappers only name the route, attach the payload, and pick the decoded
//! type. Everything cross-cutting (base URL, bearer token, 401 handling,
//! error mapping) lives in [`crate::net::http`].

use serde_json::json;

use crate::net::error::HttpError;
use crate::net::http::{ApiRequest, HttpClient, encode_segment};
use crate::net::types::{
    Address, AgentQuestion, AgentReply, CartAdd, CartItem, FacePayload, FaceStatus, Game,
    LoginPayload, LoginResponse, Order, OrderCreate, RegisterPayload, Review, ReviewSubmit,
    ShopUser,
};

/// The conversational agent runs as a separate sidecar; its absolute URL
/// bypasses the configured base address.
pub const AGENT_BASE_URL: &str = "http://localhost:8001";

// --- auth ---

pub async fn login(http: &HttpClient, payload: &LoginPayload) -> Result<LoginResponse, HttpError> {
    http.request(ApiRequest::post("/auth/login").json(payload)?)
        .await
}

pub async fn register(http: &HttpClient, payload: &RegisterPayload) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/auth/register").json(payload)?)
        .await
        .map(|_| ())
}

/// Ask the backend to text a verification code to `phone`.
pub async fn send_code(http: &HttpClient, phone: &str) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/auth/sendCode").json(&json!({ "phone": phone }))?)
        .await
        .map(|_| ())
}

pub async fn fetch_profile(http: &HttpClient) -> Result<ShopUser, HttpError> {
    http.request(ApiRequest::get("/auth/userInfo")).await
}

pub async fn logout(http: &HttpClient) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/auth/logout")).await.map(|_| ())
}

// --- profile ---

pub async fn get_user_info(http: &HttpClient) -> Result<ShopUser, HttpError> {
    http.request(ApiRequest::get("/user/info")).await
}

pub async fn update_user(http: &HttpClient, user: &ShopUser) -> Result<(), HttpError> {
    http.send(ApiRequest::put("/user/update").json(user)?)
        .await
        .map(|_| ())
}

// --- catalog ---

pub async fn get_game_list(http: &HttpClient) -> Result<Vec<Game>, HttpError> {
    http.request(ApiRequest::get("/games/all")).await
}

pub async fn get_top_rented(http: &HttpClient) -> Result<Vec<Game>, HttpError> {
    http.request(ApiRequest::get("/games/top-rented")).await
}

pub async fn get_game_detail(http: &HttpClient, id: i64) -> Result<Game, HttpError> {
    http.request(ApiRequest::get(format!("/games/{id}"))).await
}

pub async fn search_games_by_name(http: &HttpClient, name: &str) -> Result<Vec<Game>, HttpError> {
    http.request(ApiRequest::get(format!(
        "/games/searchByName/{}",
        encode_segment(name)
    )))
    .await
}

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

// --- cart ---

pub async fn add_to_cart(http: &HttpClient, item: &CartAdd) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/cart/add").json(item)?)
        .await
        .map(|_| ())
}

pub async fn get_cart_list(http: &HttpClient) -> Result<Vec<CartItem>, HttpError> {
    http.request(ApiRequest::get("/cart/list")).await
}

pub async fn update_cart_item(
    http: &HttpClient,
    id: i64,
    rent_days: i64,
) -> Result<(), HttpError> {
    http.send(ApiRequest::post(format!("/cart/update/{id}")).json(&json!({ "rentDays": rent_days }))?)
        .await
        .map(|_| ())
}

pub async fn remove_cart_item(http: &HttpClient, id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::delete(format!("/cart/delete/{id}")))
        .await
        .map(|_| ())
}

pub async fn clear_cart(http: &HttpClient) -> Result<(), HttpError> {
    http.send(ApiRequest::delete("/cart/clear")).await.map(|_| ())
}

// --- orders ---

pub async fn create_order(http: &HttpClient, payload: &OrderCreate) -> Result<Order, HttpError> {
    http.request(ApiRequest::post("/orders/create").json(payload)?)
        .await
}

/// List the shopper's orders, optionally narrowed to one status.
pub async fn get_my_orders(
    http: &HttpClient,
    status: Option<&str>,
) -> Result<Vec<Order>, HttpError> {
    let mut request = ApiRequest::get("/orders/my");
    if let Some(status) = status {
        request = request.query("status", status);
    }
    http.request(request).await
}

pub async fn get_order_detail(http: &HttpClient, id: i64) -> Result<Order, HttpError> {
    http.request(ApiRequest::get(format!("/orders/{id}"))).await
}

pub async fn cancel_order(http: &HttpClient, id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::post(format!("/orders/{id}/cancel")))
        .await
        .map(|_| ())
}

pub async fn pay_order(http: &HttpClient, id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::post(format!("/orders/{id}/pay")))
        .await
        .map(|_| ())
}

// --- addresses ---

pub async fn get_address_list(http: &HttpClient) -> Result<Vec<Address>, HttpError> {
    http.request(ApiRequest::get("/address/list")).await
}

pub async fn add_address(http: &HttpClient, address: &Address) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/address/add").json(address)?)
        .await
        .map(|_| ())
}

pub async fn update_address(http: &HttpClient, address: &Address) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/address/update").json(address)?)
        .await
        .map(|_| ())
}

pub async fn delete_address(http: &HttpClient, id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::post(format!("/address/delete/{id}")))
        .await
        .map(|_| ())
}

pub async fn set_default_address(http: &HttpClient, id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::post(format!("/address/setDefault/{id}")))
        .await
        .map(|_| ())
}

// --- reviews ---

pub async fn get_game_reviews(http: &HttpClient, game_id: i64) -> Result<Vec<Review>, HttpError> {
    http.request(ApiRequest::get(format!("/reviews/game/{game_id}")))
        .await
}

pub async fn submit_review(http: &HttpClient, review: &ReviewSubmit) -> Result<(), HttpError> {
    http.send(ApiRequest::post("/reviews/submit").json(review)?)
        .await
        .map(|_| ())
}

// --- face recognition ---

pub async fn face_login(http: &HttpClient, image_base64: &str) -> Result<LoginResponse, HttpError> {
    let payload = FacePayload {
        image_base64: image_base64.to_owned(),
        user_id: None,
    };
    http.request(ApiRequest::post("/face/login").json(&payload)?)
        .await
}

pub async fn face_register(
    http: &HttpClient,
    user_id: i64,
    image_base64: &str,
) -> Result<(), HttpError> {
    let payload = FacePayload {
        image_base64: image_base64.to_owned(),
        user_id: Some(user_id),
    };
    http.send(ApiRequest::post("/face/register").json(&payload)?)
        .await
        .map(|_| ())
}

pub async fn face_delete(http: &HttpClient, user_id: i64) -> Result<(), HttpError> {
    http.send(ApiRequest::get(format!("/face/delete/{user_id}")))
        .await
        .map(|_| ())
}

pub async fn face_status(http: &HttpClient, user_id: i64) -> Result<FaceStatus, HttpError> {
    http.request(ApiRequest::get(format!("/face/status/{user_id}")))
        .await
}

// --- agent sidecar ---

/// Ask the shopping assistant a free-form question. Rides the shared
/// pipeline via an absolute URL; the session's user id is forwarded when
/// one exists so the agent can personalize replies.
pub async fn ask_agent(
    http: &HttpClient,
    message: &str,
    user_id: Option<i64>,
) -> Result<AgentReply, HttpError> {
    let question = AgentQuestion {
        message: message.to_owned(),
        user_id: user_id.map(|id| id.to_string()),
    };
    http.request(ApiRequest::post(format!("{AGENT_BASE_URL}/chat")).json(&question)?)
        .await
}
