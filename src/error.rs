use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blackjack::GameError;
use log::error;
use thiserror::Error;

use crate::msg::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Session limit of {0} reached")]
    SessionLimit(usize),
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Game(GameError::InvalidState(_)) => StatusCode::CONFLICT,
            ApiError::Game(GameError::EmptyDeck) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SessionLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidSessionId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() && !matches!(self, ApiError::SessionLimit(_)) {
            error!("Request failed: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
