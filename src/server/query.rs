use axum::Json;

use crate::msg::WelcomeResponse;

/// Liveness check and greeting.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}
