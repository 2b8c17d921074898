pub mod movies;
pub mod screenings;

use axum::{
    Json,
    extract::{FromRequest, Path, rejection::PathRejection},
};

use crate::error::{AppError, AppResult};

/// JSON body whose rejections render as a 422 validation failure.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// Ids that do not parse as `i32` cannot name a record, so they answer with
/// the entity's not-found response.
pub(crate) fn record_id(
    path: Result<Path<i32>, PathRejection>,
    not_found: &'static str,
) -> AppResult<i32> {
    path.map(|Path(id)| id).map_err(|_| AppError::NotFound(not_found))
}
