use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use super::{ValidJson, record_id};
use crate::{
    AppState,
    error::{AppError, AppResult, RepoResultExt},
    models::{Message, ScreeningWithMovie},
    repository::Repository,
    validation::{CreateScreeningRequest, UpdateScreeningRequest},
};

const NOT_FOUND: &str = "Screening not found";

pub async fn index(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<ScreeningWithMovie>>> {
    let screenings =
        state.screenings.all().await.or_respond(NOT_FOUND, "Error during fetching screenings")?;
    Ok(Json(screenings))
}

pub async fn store(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateScreeningRequest>,
) -> AppResult<Json<ScreeningWithMovie>> {
    let fields = req.into_new_screening(&state.movies).await?;
    let screening = state
        .screenings
        .create(fields)
        .await
        .or_respond(NOT_FOUND, "Error during screening creation")?;
    Ok(Json(screening))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<ScreeningWithMovie>> {
    let id = record_id(id, NOT_FOUND)?;
    let screening =
        state.screenings.find(id).await.or_respond(NOT_FOUND, "Error during fetching screening")?;
    Ok(Json(screening))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    ValidJson(req): ValidJson<UpdateScreeningRequest>,
) -> AppResult<Json<ScreeningWithMovie>> {
    let id = record_id(id, NOT_FOUND)?;
    let patch = req.into_patch(&state.movies).await?;
    let screening = state
        .screenings
        .update(id, patch)
        .await
        .or_respond(NOT_FOUND, "Error during screening update")?;
    Ok(Json(screening))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Message>> {
    let id = record_id(id, NOT_FOUND)?;
    let deleted = state
        .screenings
        .delete(id)
        .await
        .or_respond(NOT_FOUND, "Error during screening deletion")?;
    if !deleted {
        return Err(AppError::NotFound(NOT_FOUND));
    }
    Ok(Json(Message::new("Screening deleted successfully")))
}
