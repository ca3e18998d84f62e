pub mod extract;
pub mod whiskies;

use axum::{http::StatusCode, response::Html, Json};
use serde_json::json;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Welcome Application</h1>")
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "whisky-service" })))
}
