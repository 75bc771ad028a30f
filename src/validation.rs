use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{MOVIE_FIELDS, MovieBody, REQUIRED_FIELDS},
};

/// Same ceiling axum applies to `Json` bodies by default.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BodyKind {
    Create,
    Update,
}

pub fn validate_body(body: &MovieBody, kind: BodyKind) -> AppResult<()> {
    match kind {
        BodyKind::Create => {
            if !REQUIRED_FIELDS.iter().all(|key| body.contains_key(*key)) {
                return Err(AppError::MissingKeys);
            }
        }
        BodyKind::Update => {
            if body.contains_key("id") {
                return Err(AppError::IdentityColumn);
            }
        }
    }

    if body.keys().any(|key| !MOVIE_FIELDS.contains(&key.as_str())) {
        return Err(AppError::WrongKey);
    }

    if body.values().any(|value| matches!(value, Value::String(s) if s.is_empty())) {
        return Err(AppError::EmptyValue);
    }

    Ok(())
}

/// Checks movie payloads before they reach a handler. POST bodies are held to
/// the create rules, anything else to the update rules.
pub async fn validate_body_middleware(request: Request, next: Next) -> AppResult<Response> {
    let kind = if request.method() == Method::POST { BodyKind::Create } else { BodyKind::Update };

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(%err, "unreadable request body");
            return Ok(StatusCode::PAYLOAD_TOO_LARGE.into_response());
        }
    };

    // non-object bodies are left for the JSON extractor to reject
    if let Ok(map) = serde_json::from_slice::<MovieBody>(&bytes) {
        validate_body(&map, kind)?;
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
