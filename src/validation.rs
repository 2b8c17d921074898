//! Request payloads and their rule sets.
//!
//! Create payloads mark every field `required`; update payloads validate
//! only the fields that are present. Movie rules are identical on both
//! paths (description 10..=255 chars, age limit 0..=18).

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppResult, RepoResultExt},
    models::{MoviePatch, NewMovie, NewScreening, ScreeningPatch, normalize_screening_date},
    repository::{MovieRepository, RepoResult},
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(
        required(message = "A title is required for the movie."),
        custom(function = "title_present"),
        length(max = 255, message = "The title must not exceed 255 characters.")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Please provide a description for the movie."),
        custom(function = "description_present"),
        length(min = 10, max = 255, message = "The description must be between 10 and 255 characters.")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Age limit is required."),
        range(min = 0, max = 18, message = "Age limit must be between 0 and 18.")
    )]
    pub age_limit: Option<i32>,
    #[validate(
        required(message = "The movie language is required."),
        custom(function = "language_present"),
        length(max = 25, message = "The language must not exceed 25 characters.")
    )]
    pub language: Option<String>,
    #[validate(
        required(message = "Please provide a cover art URL for the movie."),
        custom(function = "cover_art_present"),
        length(max = 255, message = "The cover art URL must not exceed 255 characters.")
    )]
    pub cover_art: Option<String>,
}

impl CreateMovieRequest {
    pub fn into_new_movie(self) -> Result<NewMovie, ValidationErrors> {
        self.validate()?;

        let (Some(title), Some(description), Some(age_limit), Some(language), Some(cover_art)) =
            (self.title, self.description, self.age_limit, self.language, self.cover_art)
        else {
            return Err(ValidationErrors::new());
        };

        Ok(NewMovie { title, description, age_limit, language, cover_art })
    }
}

/// Outer `None` is an absent key, `Some(None)` an explicit `null`, which is
/// rejected like a missing required field.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(
        custom(function = "title_present"),
        length(max = 255, message = "The title must not exceed 255 characters.")
    )]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(
        custom(function = "description_present"),
        length(min = 10, max = 255, message = "The description must be between 10 and 255 characters.")
    )]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(range(min = 0, max = 18, message = "Age limit must be between 0 and 18."))]
    pub age_limit: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(
        custom(function = "language_present"),
        length(max = 25, message = "The language must not exceed 25 characters.")
    )]
    pub language: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(
        custom(function = "cover_art_present"),
        length(max = 255, message = "The cover art URL must not exceed 255 characters.")
    )]
    pub cover_art: Option<Option<String>>,
}

impl UpdateMovieRequest {
    pub fn into_patch(self) -> Result<MoviePatch, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        reject_null(&mut errors, "title", &self.title, "A title is required for the movie.");
        reject_null(
            &mut errors,
            "description",
            &self.description,
            "Please provide a description for the movie.",
        );
        reject_null(&mut errors, "age_limit", &self.age_limit, "Age limit is required.");
        reject_null(&mut errors, "language", &self.language, "The movie language is required.");
        reject_null(
            &mut errors,
            "cover_art",
            &self.cover_art,
            "Please provide a cover art URL for the movie.",
        );
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(MoviePatch {
            title: self.title.flatten(),
            description: self.description.flatten(),
            age_limit: self.age_limit.flatten(),
            language: self.language.flatten(),
            cover_art: self.cover_art.flatten(),
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateScreeningRequest {
    #[validate(
        required(message = "A date is required for the screening."),
        custom(function = "validate_screening_date")
    )]
    pub date: Option<String>,
    #[validate(
        required(message = "Please provide the maximum seating number for the movie."),
        range(max = 50, message = "The available seats must not exceed 50.")
    )]
    pub available_seats: Option<i32>,
    #[validate(required(message = "Movie id is required."))]
    pub movie_id: Option<i32>,
}

impl CreateScreeningRequest {
    /// Field rules plus the live-movie check on `movie_id`.
    pub async fn into_new_screening(self, movies: &MovieRepository) -> AppResult<NewScreening> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        check_movie_exists(self.movie_id, movies, &mut errors)
            .await
            .or_respond("Movie not found", "Error during screening creation")?;
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let date = self.date.as_deref().and_then(normalize_screening_date);
        let (Some(date), Some(available_seats), Some(movie_id)) =
            (date, self.available_seats, self.movie_id)
        else {
            return Err(ValidationErrors::new().into());
        };

        Ok(NewScreening { date, available_seats, movie_id })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateScreeningRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_screening_date"))]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(range(max = 50, message = "The available seats must not exceed 50."))]
    pub available_seats: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub movie_id: Option<Option<i32>>,
}

impl UpdateScreeningRequest {
    /// Re-checks `movie_id` when it is being changed.
    pub async fn into_patch(self, movies: &MovieRepository) -> AppResult<ScreeningPatch> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        reject_null(&mut errors, "date", &self.date, "A date is required for the screening.");
        reject_null(
            &mut errors,
            "available_seats",
            &self.available_seats,
            "Please provide the maximum seating number for the movie.",
        );
        reject_null(&mut errors, "movie_id", &self.movie_id, "Movie id is required.");
        check_movie_exists(self.movie_id.flatten(), movies, &mut errors)
            .await
            .or_respond("Movie not found", "Error during screening update")?;
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(ScreeningPatch {
            date: self.date.flatten().as_deref().and_then(normalize_screening_date),
            available_seats: self.available_seats.flatten(),
            movie_id: self.movie_id.flatten(),
        })
    }
}

/// Keeps an explicit `null` distinguishable from an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn reject_null<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<T>>,
    message: &'static str,
) {
    if matches!(value, Some(None)) {
        errors.add(field, ValidationError::new("required").with_message(Cow::Borrowed(message)));
    }
}

/// Blank strings count as missing.
fn not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

fn title_present(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "A title is required for the movie.")
}

fn description_present(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Please provide a description for the movie.")
}

fn language_present(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "The movie language is required.")
}

fn cover_art_present(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Please provide a cover art URL for the movie.")
}

fn validate_screening_date(date: &str) -> Result<(), ValidationError> {
    match normalize_screening_date(date) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date")
            .with_message(Cow::Borrowed("The date must be a valid date."))),
    }
}

async fn check_movie_exists(
    movie_id: Option<i32>,
    movies: &MovieRepository,
    errors: &mut ValidationErrors,
) -> RepoResult<()> {
    let Some(movie_id) = movie_id else {
        return Ok(());
    };
    if !movies.exists(movie_id).await? {
        errors.add(
            "movie_id",
            ValidationError::new("exists").with_message(Cow::Borrowed("The movie must exist.")),
        );
    }
    Ok(())
}
