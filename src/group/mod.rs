use std::{fmt::Display, sync::Arc};

use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};

use crate::{participant, state::AppState};

mod handler;
pub mod model;
pub mod repository;
pub mod service;

type Result<T> = std::result::Result<T, Error>;
pub type Repository = Arc<dyn repository::GroupRepository + Send + Sync>;
pub type Service = Arc<dyn service::GroupService + Send + Sync>;

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
        .route("/group", post(handler::api::create))
        .route("/groups", get(handler::api::find_all))
        .route("/group/{id}", get(handler::api::find_one))
        .route("/group/{id}", put(handler::api::update))
        .route("/group/{id}", delete(handler::api::delete))
        .route("/group/{id}/participant", post(handler::api::add_participant))
        .with_state(s)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("group name is required")]
    MissingName,
    #[error("group not found: {0}")]
    NotFound(Id),

    #[error(transparent)]
    _Participant(#[from] participant::Error),
}

impl From<Error> for StatusCode {
    fn from(e: Error) -> Self {
        match e {
            Error::MissingName => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::_Participant(e) => e.into(),
        }
    }
}
