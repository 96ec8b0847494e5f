pub mod execute;
pub mod query;

use axum::http::{header::InvalidHeaderValue, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;

/// Browser access for the listed front-end origins. Credentials are allowed,
/// so methods and headers are mirrored from the preflight instead of `*`.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(query::welcome))
        .route("/start", get(execute::start))
        .route("/hit", get(execute::hit))
        .route("/stand", get(execute::stand))
        .layer(cors)
        .with_state(state)
}
