use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Something went wrong. Please try again later.")]
    Upstream {
        detail: String,
        expose_detail: bool,
    },
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn upstream(detail: impl Into<String>, expose_detail: bool) -> Self {
        Self::Upstream {
            detail: detail.into(),
            expose_detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, None),
            Self::Upstream {
                detail,
                expose_detail,
            } => {
                tracing::error!(error = %detail, "Upstream generation failed");
                let details = expose_detail.then(|| detail.clone());
                (StatusCode::INTERNAL_SERVER_ERROR, details)
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
