use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::AppState;

// Fallback for anything the API routes and the asset directory did not
// handle. Paths whose final segment carries an extension miss with 404;
// everything else gets the SPA shell.
pub async fn spa_fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let is_asset = uri
        .path()
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'));

    if is_asset {
        return StatusCode::NOT_FOUND.into_response();
    }

    let index = Path::new(&state.settings.static_dir).join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, path = %index.display(), "Failed to read SPA shell");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
