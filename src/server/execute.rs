use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use blackjack::GameSession;
use log::debug;

use crate::error::ApiError;
use crate::msg::{HitResponse, StandResponse, StartResponse};
use crate::state::{AppState, SessionId};

/// Deals a fresh round, discarding whatever the session held before.
pub async fn start(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StartResponse>, ApiError> {
    let id = SessionId::from_headers(&headers)?;
    debug!("[{id}] start");
    let view = state.sessions.with_session(&id, GameSession::start)?;
    Ok(Json(view.into()))
}

pub async fn hit(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HitResponse>, ApiError> {
    let id = SessionId::from_headers(&headers)?;
    debug!("[{id}] hit");
    let view = state.sessions.with_session(&id, GameSession::hit)?;
    Ok(Json(view.into()))
}

pub async fn stand(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StandResponse>, ApiError> {
    let id = SessionId::from_headers(&headers)?;
    debug!("[{id}] stand");
    let view = state.sessions.with_session(&id, GameSession::stand)?;
    Ok(Json(view.into()))
}
