use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
};

/// Lets id-addressed requests through only when the movie is present. The
/// looked-up row is discarded.
pub async fn ensure_movie_exists(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    match state.store.find(id).await {
        Ok(Some(_)) => Ok(next.run(request).await),
        Ok(None) => Err(AppError::NotFound),
        Err(err) => {
            tracing::warn!(id, error = %err, "movie lookup failed");
            Err(AppError::Lookup)
        }
    }
}
