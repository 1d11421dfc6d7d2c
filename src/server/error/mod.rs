//! Application errors and their HTTP responses.
//!
//! Handlers return `Result<_, AppError>`; the `IntoResponse` impl below decides what
//! the visitor sees. Problems a visitor can fix in a form (taken names, blank fields,
//! unknown ids) never reach this type: services report them as outcomes and
//! controllers answer with a flash message and a redirect.

pub mod auth;
pub mod config;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError, upload::UploadError};

#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing environment configuration at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Nobody usable is signed in.
    ///
    /// `AuthGuard` queues the login flash before returning this.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected upload input.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Session table creation failed.
    #[error(transparent)]
    SessionStoreErr(#[from] sea_orm::sqlx::Error),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Hashing failed or a stored hash could not be parsed.
    #[error("Password hash error: {0}")]
    PasswordHashErr(argon2::password_hash::Error),

    /// No route or resource for the request; the message is sent as the body.
    #[error("{0}")]
    NotFound(String),

    /// Multipart body that could not be read, including one over the size limit.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),
}

// `password_hash::Error` only implements `std::error::Error` with its `std` feature.
impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHashErr(err)
    }
}

/// # Returns
/// - 303 See Other to `/login` - `AuthErr`
/// - 400 Bad Request - `UploadErr`
/// - 404 Not Found - `NotFound`
/// - status chosen by the multipart extractor (400, 413) - `MultipartErr`
/// - 500 Internal Server Error - everything else, logged with its cause
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => {
                tracing::debug!("Redirecting to login: {}", err);
                Redirect::to("/login").into_response()
            }
            Self::UploadErr(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            Self::MultipartErr(err) => (err.status(), err.body_text()).into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 with a generic body, hiding the cause.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
