use axum::{Router, http::StatusCode, routing::get};

pub mod error;
pub mod group;
pub mod integration;
pub mod participant;
pub mod state;

pub type Result<T> = std::result::Result<T, error::Error>;

pub fn app(s: state::AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(group::api(s.clone()))
        .merge(participant::api(s))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
