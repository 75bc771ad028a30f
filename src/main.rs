mod config;
mod db;
mod entities;
mod error;
mod listing;
mod middleware;
mod models;
mod routes;
mod store;
mod validation;

use std::sync::Arc;

use axum::{
    Router,
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{patch, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::MovieStore};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    let movies = post(routes::create_movie.layer(from_fn(validation::validate_body_middleware)))
        .get(routes::list_movies);

    let movie = patch(routes::update_movie.layer(from_fn(validation::validate_body_middleware)))
        .delete(routes::delete_movie)
        .route_layer(from_fn_with_state(state.clone(), middleware::ensure_movie_exists));

    Router::new()
        .route("/movies", movies)
        .route("/movies/{id}", movie)
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviebox=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    let state = Arc::new(AppState { config: config.clone(), store: MovieStore::new(db) });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
