use std::{fmt::Display, sync::Arc};

use axum::{Router, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

mod handler;
pub mod model;
pub mod repository;
pub mod service;

type Result<T> = std::result::Result<T, Error>;
pub type Repository = Arc<dyn repository::ParticipantRepository + Send + Sync>;
pub type Service = Arc<dyn service::ParticipantService + Send + Sync>;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Id(pub u64);

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn api<S>(s: AppState) -> Router<S> {
    Router::new()
        .route("/participants", get(handler::api::find_all))
        .route("/participant/{id}", get(handler::api::find_one))
        .with_state(s)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("participant name is required")]
    MissingName,
    #[error("participant not found: {0}")]
    NotFound(Id),
}

impl From<Error> for StatusCode {
    fn from(e: Error) -> Self {
        match e {
            Error::MissingName => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
