use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use super::{ValidJson, record_id};
use crate::{
    AppState,
    entities::movie,
    error::{AppError, AppResult, RepoResultExt},
    models::Message,
    repository::Repository,
    validation::{CreateMovieRequest, UpdateMovieRequest},
};

const NOT_FOUND: &str = "Movie not found";

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<movie::Model>>> {
    let movies = state.movies.all().await.or_respond(NOT_FOUND, "Error during fetching movies")?;
    Ok(Json(movies))
}

pub async fn store(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateMovieRequest>,
) -> AppResult<Json<movie::Model>> {
    let fields = req.into_new_movie()?;
    let movie =
        state.movies.create(fields).await.or_respond(NOT_FOUND, "Error during movie creation")?;
    Ok(Json(movie))
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<movie::Model>> {
    let id = record_id(id, NOT_FOUND)?;
    let movie = state.movies.find(id).await.or_respond(NOT_FOUND, "Error during fetching movie")?;
    Ok(Json(movie))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    ValidJson(req): ValidJson<UpdateMovieRequest>,
) -> AppResult<Json<movie::Model>> {
    let id = record_id(id, NOT_FOUND)?;
    let patch = req.into_patch()?;
    let movie =
        state.movies.update(id, patch).await.or_respond(NOT_FOUND, "Error during movie update")?;
    Ok(Json(movie))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Message>> {
    let id = record_id(id, NOT_FOUND)?;
    let deleted =
        state.movies.delete(id).await.or_respond(NOT_FOUND, "Error during movie deletion")?;
    if !deleted {
        return Err(AppError::NotFound(NOT_FOUND));
    }
    Ok(Json(Message::new("Movie deleted successfully")))
}
