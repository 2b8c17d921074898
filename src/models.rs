use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::Serialize;

use crate::entities::{movie, screening};

pub const SCREENING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub age_limit: i32,
    pub language: String,
    pub cover_art: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub age_limit: Option<i32>,
    pub language: Option<String>,
    pub cover_art: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewScreening {
    /// Already normalized to [`SCREENING_DATE_FORMAT`].
    pub date: String,
    pub available_seats: i32,
    pub movie_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreeningPatch {
    pub date: Option<String>,
    pub available_seats: Option<i32>,
    pub movie_id: Option<i32>,
}

/// A screening as served over HTTP, with its movie attached. `movie` is
/// `None` once the movie has been soft-deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreeningWithMovie {
    #[serde(flatten)]
    pub screening: screening::Model,
    pub movie: Option<movie::Model>,
}

impl ScreeningWithMovie {
    pub fn new(screening: screening::Model, movie: Option<movie::Model>) -> Self {
        Self { screening, movie: movie.filter(|m| m.deleted_at.is_none()) }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Accepts civil date-times (`2025-05-15 19:30:00`, `2025-05-15T19:30`,
/// `2025-05-15`) and RFC 3339 timestamps, which are converted to UTC.
pub fn parse_screening_date(raw: &str) -> Option<DateTime> {
    let raw = raw.trim();
    if let Ok(dt) = raw.parse::<DateTime>() {
        return Some(dt);
    }
    raw.parse::<Timestamp>().ok().map(|ts| ts.to_zoned(TimeZone::UTC).datetime())
}

pub fn normalize_screening_date(raw: &str) -> Option<String> {
    parse_screening_date(raw).map(|dt| dt.strftime(SCREENING_DATE_FORMAT).to_string())
}
