use axum::Json;

use crate::models::responses::HealthResponse;

// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "HIV Mate server running 💙".to_string(),
    })
}
