use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde::Serialize;

use crate::{group, participant};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    _Group(#[from] group::Error),
    #[error(transparent)]
    _Participant(#[from] participant::Error),
}

impl From<JsonRejection> for Error {
    fn from(r: JsonRejection) -> Self {
        Self::InvalidBody(r.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let message = self.to_string();
        let status = match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::_Group(e) => StatusCode::from(e),
            Self::_Participant(e) => StatusCode::from(e),
        };

        if status.is_server_error() {
            error!("{message}");
        } else {
            warn!("{status}: {message}");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_map_domain_errors_to_status() {
        let cases = [
            (Error::from(group::Error::MissingName), StatusCode::BAD_REQUEST),
            (
                Error::from(group::Error::NotFound(group::Id(1))),
                StatusCode::NOT_FOUND,
            ),
            (
                Error::from(group::Error::from(participant::Error::MissingName)),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::from(participant::Error::NotFound(participant::Id(3))),
                StatusCode::NOT_FOUND,
            ),
            (Error::InvalidBody("nope".into()), StatusCode::BAD_REQUEST),
        ];

        for (e, expected) in cases {
            assert_eq!(e.into_response().status(), expected);
        }
    }
}
