use axum::{extract::Query, response::Html, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_GUEST: &str = "Guest";

const INDEX_HTML: &str = include_str!("../../templates/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct TimeResponse {
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GreetResponse {
    pub message: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn time() -> Json<TimeResponse> {
    Json(TimeResponse {
        time: Local::now().format(TIME_FORMAT).to_string(),
    })
}

/// Repeated `name` keys are allowed; the first one wins.
pub async fn greet(Query(params): Query<Vec<(String, String)>>) -> Json<GreetResponse> {
    let name = params
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .unwrap_or(DEFAULT_GUEST);
    Json(GreetResponse {
        message: format!("Hello, {}!", name),
    })
}
