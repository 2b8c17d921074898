use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use validator::ValidationErrors;

use crate::{models::Message, repository::RepoError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unreadable request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: DbErr,
    },
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    message: &'static str,
    errors: BTreeMap<String, Vec<String>>,
}

impl AppError {
    fn validation_failed(errors: BTreeMap<String, Vec<String>>) -> Response {
        let body = ValidationBody { message: "Validation failed", errors };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => Self::validation_failed(field_messages(&errors)),
            AppError::Body(rejection) => {
                let errors = BTreeMap::from([("body".to_string(), vec![rejection.body_text()])]);
                Self::validation_failed(errors)
            },
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(Message::new(message))).into_response()
            },
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(Message::new(message))).into_response()
            },
        }
    }
}

/// Flattens validator output into `field -> [messages]`, falling back to
/// the rule code when a rule carries no message.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

pub type AppResult<T> = Result<T, AppError>;

/// Two-tier failure policy for controller calls: a missing record becomes
/// `not_found`, anything else becomes `failure`.
pub trait RepoResultExt<T> {
    fn or_respond(self, not_found: &'static str, failure: &'static str) -> AppResult<T>;
}

impl<T> RepoResultExt<T> for Result<T, RepoError> {
    fn or_respond(self, not_found: &'static str, failure: &'static str) -> AppResult<T> {
        self.map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound(not_found),
            RepoError::Db(source) => AppError::Internal { message: failure, source },
        })
    }
}
