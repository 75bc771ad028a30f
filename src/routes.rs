use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, DbErr};

use crate::{
    AppState,
    entities::movie,
    error::{AppError, AppResult},
    listing::{ListParams, ListQuery},
    models::{self, MovieBody, MoviePage},
};

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MovieBody>,
) -> AppResult<(StatusCode, Json<movie::Model>)> {
    let mut model = movie::ActiveModel { ..Default::default() };
    models::apply_fields(&mut model, &body)?;

    let created = state.store.insert(model).await.map_err(|err| {
        tracing::warn!(error = %err, "movie insert rejected");
        AppError::Conflict
    })?;

    tracing::debug!(id = created.id, "movie created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> AppResult<Json<MoviePage>> {
    let params = ListParams::from_query(&q);

    let (data, total) = state.store.page(&params).await.map_err(|err| {
        tracing::warn!(error = %err, "movie listing failed");
        AppError::Unavailable
    })?;

    let base = &state.config.public_url;
    let next_page = params.has_next(total).then(|| params.link(base, params.page + 1));
    let previous_page = params.has_previous(total).then(|| params.link(base, params.page - 1));

    Ok(Json(MoviePage { previous_page, next_page, count: data.len(), data }))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<MovieBody>,
) -> AppResult<Json<movie::Model>> {
    if body.contains_key("id") {
        return Err(AppError::IdentityColumn);
    }

    let mut model = movie::ActiveModel { id: Unchanged(id), ..Default::default() };
    models::apply_fields(&mut model, &body)?;

    // an empty SET list is not a valid statement
    if !model.is_changed() {
        return Err(AppError::Conflict);
    }

    match state.store.update(model).await {
        Ok(updated) => Ok(Json(updated)),
        Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
        Err(err) => {
            tracing::warn!(id, error = %err, "movie update rejected");
            Err(AppError::Conflict)
        }
    }
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let removed = state.store.delete(id).await.map_err(|err| {
        tracing::error!(id, error = %err, "movie delete failed");
        AppError::Internal
    })?;

    tracing::debug!(id, removed, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
