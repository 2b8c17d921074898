use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    handlers::{movies, screenings},
};

/// The route table, served both at the root and under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let movies = Router::new()
        .route("/list", get(movies::index))
        .route("/get/{id}", get(movies::find))
        .route("/create", post(movies::store))
        .route("/update/{id}", post(movies::update))
        .route("/delete/{id}", delete(movies::destroy));

    let screenings = Router::new()
        .route("/list", get(screenings::index))
        .route("/get/{id}", get(screenings::show))
        .route("/create", post(screenings::store))
        .route("/update/{id}", post(screenings::update))
        .route("/delete/{id}", delete(screenings::destroy));

    let api = Router::new().nest("/movies", movies).nest("/screenings", screenings);

    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
            ),
        )
}
