//! # Application Error Type
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! This site serves HTML, so errors render a minimal standalone error
//! page rather than a JSON body. Internal error details are logged for
//! operators but never exposed to clients.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Application-level error type for route handlers.
///
/// Form-level problems (empty title, bad tag, duplicate email) are not
/// errors — they become flash messages and redirects, matching the site's
/// original behavior. `AppError` covers the cases where no sensible page
/// can be produced.
#[derive(Error, Debug)]
pub enum AppError {
    /// No such page (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The request body or parameters could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not rendered.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and page heading for this error.
    fn status_and_heading(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Page not found"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
        }
    }
}

/// Standalone error page. Does not extend the base layout — the layout
/// needs per-request state (site title, flashes) that an error response
/// may not have.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    status: u16,
    heading: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading) = self.status_and_heading();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred.".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let page = ErrorPage {
            status: status.as_u16(),
            heading,
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "error page failed to render");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

/// Database failures are internal errors; the SQL detail goes to the log.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(format!("database error: {err}"))
    }
}

/// Malformed multipart bodies are client errors.
impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::BadRequest(format!("invalid multipart body: {}", err.body_text()))
    }
}
